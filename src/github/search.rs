use crate::config::FeedConfig;
use std::fmt::{self, Display};

const SORT_BY_CREATED: &str = "created";
const ORDER_DESC: &str = "desc";

/// Search qualifiers selecting pull requests opened by one author against
/// one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    username: String,
    owner: String,
    repo: String,
}

impl SearchQuery {
    pub fn new(
        username: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        SearchQuery {
            username: username.into(),
            owner: owner.into(),
            repo: repo.into(),
        }
    }
}

impl From<&FeedConfig> for SearchQuery {
    fn from(config: &FeedConfig) -> Self {
        SearchQuery::new(
            &config.username,
            &config.repository.owner,
            &config.repository.name,
        )
    }
}

impl Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "repo:{}/{} is:pr author:{}",
            self.owner, self.repo, self.username
        )
    }
}

#[derive(Debug, Clone)]
pub struct SearchRequest {
    query: SearchQuery,
    per_page: u32,
}

impl SearchRequest {
    pub fn new(query: SearchQuery, per_page: u32) -> Self {
        SearchRequest { query, per_page }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Newest first, first page only.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("q", self.query.to_string()),
            ("sort", SORT_BY_CREATED.to_owned()),
            ("order", ORDER_DESC.to_owned()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

impl From<&FeedConfig> for SearchRequest {
    fn from(config: &FeedConfig) -> Self {
        SearchRequest::new(SearchQuery::from(config), config.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_scope_query_to_author_and_repository() {
        let query = SearchQuery::new("octocat", "SeedSigner", "seedsigner");

        assert_eq!(
            query.to_string(),
            "repo:SeedSigner/seedsigner is:pr author:octocat"
        );
    }

    #[test]
    fn should_build_query_from_feed_config() {
        let config = FeedConfig::default();

        let query = SearchQuery::from(&config);

        assert_eq!(
            query.to_string(),
            "repo:SeedSigner/seedsigner is:pr author:krishnavbajoria02"
        );
    }

    #[test]
    fn should_sort_newest_first_and_cap_page_size() {
        let request = SearchRequest::new(SearchQuery::new("octocat", "owner", "repo"), 8);

        assert_eq!(
            request.params(),
            vec![
                ("q", "repo:owner/repo is:pr author:octocat".to_owned()),
                ("sort", "created".to_owned()),
                ("order", "desc".to_owned()),
                ("per_page", "8".to_owned()),
            ]
        );
    }
}
