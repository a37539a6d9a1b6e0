use crate::github::response::PullRequestSummary;
use serde::{Serialize, Serializer};
use std::fmt::{self, Display};

const OPEN: &str = "open";
const CLOSED: &str = "closed";
const MERGED: &str = "merged";

/// Badge state of a card. `Merged` never appears in the raw payload, it is
/// derived from a closed state plus a merge timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayState {
    Open,
    Closed,
    Merged,
    Other(String),
}

impl DisplayState {
    pub fn derive(summary: &PullRequestSummary) -> Self {
        match summary.state.as_deref() {
            Some(CLOSED) if summary.merged_at().is_some() => DisplayState::Merged,
            Some(CLOSED) => DisplayState::Closed,
            Some(OPEN) => DisplayState::Open,
            other => DisplayState::Other(other.unwrap_or_default().to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DisplayState::Open => OPEN,
            DisplayState::Closed => CLOSED,
            DisplayState::Merged => MERGED,
            DisplayState::Other(raw) => raw,
        }
    }
}

impl Display for DisplayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for DisplayState {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
