use serde::{Deserialize, Serialize};

/// A typed reference to another resource: opaque identifier plus display
/// label. Wire objects may omit either field (or the whole reference);
/// normalization substitutes empty strings, never `None` — downstream code
/// does not null-check this path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub uuid: String,
    #[serde(default)]
    pub display: String,
}

impl Reference {
    pub fn new(uuid: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            display: display.into(),
        }
    }
}
