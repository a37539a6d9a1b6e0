use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl Repository {
    /// `owner/name`, the form used by search qualifiers and contained in
    /// every repository API url.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_join_owner_and_name() {
        let repository = Repository {
            owner: "SeedSigner".to_owned(),
            name: "seedsigner".to_owned(),
        };

        assert_eq!(repository.slug(), "SeedSigner/seedsigner");
    }
}
