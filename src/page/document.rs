use crate::feed::Card;
use chrono::{Datelike, Local};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Container {
    id: String,
    children: Vec<Card>,
}

impl Container {
    pub fn new(id: impl Into<String>) -> Self {
        Container {
            id: id.into(),
            children: vec![],
        }
    }

    pub fn children(&self) -> &[Card] {
        &self.children
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn append(&mut self, card: Card) {
        self.children.push(card);
    }
}

/// In-memory page: the year stamp plus the containers cards are painted
/// into.
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    year: i32,
    containers: Vec<Container>,
}

impl Document {
    pub fn new<I, S>(container_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document::with_year(Local::now().year(), container_ids)
    }

    pub fn with_year<I, S>(year: i32, container_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Document {
            year,
            containers: container_ids.into_iter().map(Container::new).collect(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    #[cfg(test)]
    pub fn container(&self, id: &str) -> Option<&Container> {
        self.containers.iter().find(|container| container.id == id)
    }

    pub fn container_mut(&mut self, id: &str) -> Option<&mut Container> {
        self.containers.iter_mut().find(|container| container.id == id)
    }
}
