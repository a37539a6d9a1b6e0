use super::PullRequestSummary;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchResponse {
    pub total_count: u64,
    pub incomplete_results: bool,
    #[serde(deserialize_with = "deserialize_items")]
    items: Option<Vec<PullRequestSummary>>,
}

/// The list itself must be an array; each element is read on its own so one
/// malformed item cannot sink the rest.
fn deserialize_items<'de, D>(
    deserializer: D,
) -> Result<Option<Vec<PullRequestSummary>>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?;

    Ok(items.map(|items| {
        items
            .into_iter()
            .map(PullRequestSummary::from_value)
            .collect()
    }))
}

impl SearchResponse {
    pub fn items(&self) -> &[PullRequestSummary] {
        self.items.as_deref().unwrap_or_default()
    }

    /// Items in API order. A missing or `null` list is empty.
    pub fn into_items(self) -> Vec<PullRequestSummary> {
        self.items.unwrap_or_default()
    }
}
