mod pull_request_summary;
mod search_response;

pub use pull_request_summary::{PullRequestLinks, PullRequestSummary};
pub use search_response::SearchResponse;
