use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Label(String);

crate::impl_string_newtype!(Label);

/// Absolute URL opened on activation; `mailto:` links included.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct Link(String);

crate::impl_string_newtype!(Link);

impl Link {
    /// Has a scheme, e.g. `https:` or `mailto:`.
    pub fn is_absolute(&self) -> bool {
        self.0
            .split_once(':')
            .is_some_and(|(scheme, rest)| {
                !scheme.is_empty()
                    && !rest.is_empty()
                    && scheme
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub label: Label,
    pub link: Link,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: Label::new(label),
            link: Link::new(link),
        }
    }

    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new("Portfolio", "https://example.com/portfolio"),
            Self::new("Github", "https://github.com"),
            Self::new("Discord", "https://discord.com"),
            Self::new("Blog", "https://example.com/blog"),
            Self::new("Contact", "mailto:hello@example.com"),
        ]
    }
}
