use super::{response::SearchResponse, search::SearchRequest};
use crate::http::{self, Headers, HttpClient, ResponseHandler};

pub struct GithubClient {
    http: HttpClient,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: impl Into<String>) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
        }
    }

    pub async fn search_issues(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, http::Error> {
        let uri = format!("{}/search/issues", self.api_url.trim_end_matches('/'));
        log::debug!("GET {} q={}", uri, request.query());

        let body = self
            .http
            .get(&uri)
            .default_headers()
            .query(&request.params())
            .send()
            .await
            .handle()
            .await?;

        http::parse::<SearchResponse>(&body)
    }
}
