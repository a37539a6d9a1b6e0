mod config;
mod feed;
mod github;
mod http;
mod logger;
mod page;
mod repository;

use anyhow::{Context, Result};
use config::Config;
use github::GithubClient;
use page::HtmlPage;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().await.context("Cannot load config file")?;
    logger::init(&config.log_level)?;

    log::info!("Starting");
    let client = GithubClient::new(&config.feed.api_url);
    let mut page = HtmlPage::new(&config)?;

    let outcome = feed::load_and_render_prs(
        &client,
        &config.feed,
        &mut page,
        &config.page.container_id,
    )
    .await;

    log::info!(
        "Feed {}, page written to {}",
        outcome,
        config.page.output.display()
    );

    Ok(())
}
