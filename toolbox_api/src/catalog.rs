use serde::{Deserialize, Serialize};

/// Entry in the tool directory shown on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Stable identifier, also used as the tool's path segment.
    pub id: String,
    /// Human-friendly title.
    pub title: String,
    /// One-line description for the tool card.
    pub description: String,
}

impl ToolDescriptor {
    /// Construct a descriptor from borrowed strings.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}
