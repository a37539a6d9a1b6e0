use super::{date::format_date, state::DisplayState};
use crate::{config::FeedConfig, github::response::PullRequestSummary};
use serde::Serialize;

/// One entry of a feed container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Card {
    PullRequest(PullRequestCard),
    Placeholder(Placeholder),
}

#[cfg(test)]
impl Card {
    pub fn placeholder(&self) -> Option<&Placeholder> {
        match self {
            Card::Placeholder(placeholder) => Some(placeholder),
            Card::PullRequest(_) => None,
        }
    }

    pub fn pull_request(&self) -> Option<&PullRequestCard> {
        match self {
            Card::PullRequest(card) => Some(card),
            Card::Placeholder(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PullRequestCard {
    pub title: String,
    pub repository_label: String,
    pub state: DisplayState,
    pub opened: String,
    pub number: String,
    pub url: String,
}

impl PullRequestCard {
    pub fn new(summary: &PullRequestSummary, feed: &FeedConfig) -> Self {
        PullRequestCard {
            title: summary.title.clone().unwrap_or_default(),
            repository_label: repository_label(summary, feed),
            state: DisplayState::derive(summary),
            opened: format_date(summary.created_at.as_deref().unwrap_or_default()),
            number: summary
                .number
                .map(|number| format!("#{}", number))
                .unwrap_or_default(),
            url: summary.html_url.clone().unwrap_or_default(),
        }
    }
}

fn repository_label(summary: &PullRequestSummary, feed: &FeedConfig) -> String {
    let slug = feed.repository.slug();

    match &summary.repository_url {
        Some(url) if url.contains(&slug) => feed.label.clone(),
        _ => String::new(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderKind {
    Loading,
    Empty,
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub kind: PlaceholderKind,
    pub message: String,
}

impl Placeholder {
    pub fn loading(label: &str) -> Self {
        Placeholder {
            kind: PlaceholderKind::Loading,
            message: format!("Loading {} PRs...", label),
        }
    }

    pub fn empty() -> Self {
        Placeholder {
            kind: PlaceholderKind::Empty,
            message: "No PRs found yet. Check back soon.".to_owned(),
        }
    }

    pub fn unavailable() -> Self {
        Placeholder {
            kind: PlaceholderKind::Unavailable,
            message: "Unable to load PRs (rate limit or network). Use the button above to view on GitHub."
                .to_owned(),
        }
    }
}
