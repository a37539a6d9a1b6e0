mod card;
mod date;
mod loader;
mod state;

pub use card::{Card, Placeholder, PlaceholderKind, PullRequestCard};
pub use date::format_date;
pub use loader::{load_and_render_prs, FeedOutcome};
pub use state::DisplayState;
