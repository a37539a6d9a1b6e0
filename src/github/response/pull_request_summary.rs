use serde::{de::DeserializeOwned, Deserialize, Deserializer};

/// One pull request as returned by the issue search endpoint. Every field is
/// optional, and a field of the wrong type reads as absent, so a sparse or
/// odd item still renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PullRequestSummary {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub number: Option<u64>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub title: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub state: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub created_at: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub html_url: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub repository_url: Option<String>,
    #[serde(deserialize_with = "deserialize_lenient")]
    pub pull_request: Option<PullRequestLinks>,
    /// Legacy flat merge timestamp. Search results carry it under
    /// `pull_request.merged_at` instead.
    #[serde(deserialize_with = "deserialize_lenient")]
    pub pull_request_merged_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PullRequestLinks {
    #[serde(deserialize_with = "deserialize_lenient")]
    pub merged_at: Option<String>,
}

impl PullRequestSummary {
    /// Blank timestamps do not count as merged.
    pub fn merged_at(&self) -> Option<&str> {
        self.pull_request
            .as_ref()
            .and_then(|links| non_empty(&links.merged_at))
            .or_else(|| non_empty(&self.pull_request_merged_at))
    }

    /// Reads one search item. Anything that is not an object becomes an
    /// empty summary.
    pub(super) fn from_value(value: serde_json::Value) -> Self {
        PullRequestSummary::deserialize(value).unwrap_or_default()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
