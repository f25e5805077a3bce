use serde::{Deserialize, Serialize};

/// A tag attached to a work.
///
/// Tags are identified by name plus an optional discriminator that
/// distinguishes same-named tags from different namespaces (for example
/// `cat` the animal vs `cat` the unix tool). Two tags are the same tag
/// exactly when both fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub discriminator: Option<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discriminator: None,
        }
    }

    pub fn discriminated(name: impl Into<String>, discriminator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discriminator: Some(discriminator.into()),
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.discriminator {
            Some(discriminator) => write!(f, "{} ({discriminator})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Collapse duplicate tags, preserving first-seen order.
///
/// A work's tag list is semantically a set; the backend collapses
/// duplicates on its side as well, but write intents are normalized
/// before submission so the payload matches what will be stored.
pub fn normalize_tags(tags: Vec<Tag>) -> Vec<Tag> {
    let mut seen = std::collections::HashSet::new();
    tags.into_iter()
        .filter(|tag| seen.insert(tag.clone()))
        .collect()
}
