mod github_client;
pub mod response;
mod search;

pub use github_client::GithubClient;
pub use search::{SearchQuery, SearchRequest};
