use super::card::{Card, Placeholder, PullRequestCard};
use crate::{
    config::FeedConfig,
    github::{response::PullRequestSummary, GithubClient, SearchRequest},
    page::Surface,
};
use anyhow::{Context, Result};
use std::fmt::{self, Display};

/// What ended up in the feed container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    Rendered(usize),
    Empty,
    Unavailable,
    MissingContainer,
}

impl Display for FeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedOutcome::Rendered(count) => write!(f, "rendered {} pull requests", count),
            FeedOutcome::Empty => write!(f, "no pull requests found"),
            FeedOutcome::Unavailable => write!(f, "pull requests unavailable"),
            FeedOutcome::MissingContainer => write!(f, "no feed container"),
        }
    }
}

/// Fills the `container_id` container of `surface` with one card per pull
/// request `feed.username` opened against `feed.repository`.
///
/// Never fails: a missing container is a no-op, an empty result becomes a
/// "no results" placeholder and any request or parse failure becomes an
/// "unable to load" placeholder.
pub async fn load_and_render_prs<S>(
    client: &GithubClient,
    feed: &FeedConfig,
    surface: &mut S,
    container_id: &str,
) -> FeedOutcome
where
    S: Surface,
{
    let Some(container) = surface.container_mut(container_id) else {
        log::warn!("No container with id '{}', skipping feed", container_id);
        return FeedOutcome::MissingContainer;
    };

    container.append(Card::Placeholder(Placeholder::loading(&feed.label)));
    present(surface);

    let result = fetch(client, feed).await;

    let Some(container) = surface.container_mut(container_id) else {
        return FeedOutcome::MissingContainer;
    };
    container.clear();

    let outcome = match result {
        Ok(items) if items.is_empty() => {
            container.append(Card::Placeholder(Placeholder::empty()));
            FeedOutcome::Empty
        }
        Ok(items) => {
            for item in &items {
                container.append(Card::PullRequest(PullRequestCard::new(item, feed)));
            }
            FeedOutcome::Rendered(items.len())
        }
        Err(err) => {
            log::error!("{:#}", err);
            container.append(Card::Placeholder(Placeholder::unavailable()));
            FeedOutcome::Unavailable
        }
    };

    present(surface);
    outcome
}

async fn fetch(client: &GithubClient, feed: &FeedConfig) -> Result<Vec<PullRequestSummary>> {
    let request = SearchRequest::from(feed);
    log::info!("Searching pull requests: {}", request.query());

    let response = client
        .search_issues(&request)
        .await
        .context("Cannot load pull requests")?;

    log::info!(
        "Found {} of {} pull requests",
        response.items().len(),
        response.total_count
    );
    if response.incomplete_results {
        log::warn!("Search results are incomplete");
    }

    Ok(response.into_items())
}

fn present<S>(surface: &mut S)
where
    S: Surface,
{
    if let Err(err) = surface.present() {
        log::error!("Cannot paint the feed: {:#}", err);
    }
}
