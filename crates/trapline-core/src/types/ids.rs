//! Record identity and entity kinds.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Backend-assigned identifier of a stored record.
///
/// Identities are always assigned by the backend; the client only carries
/// them back for display. Backends that hand out integer keys are accepted
/// and held in their decimal string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wraps an identifier received from the backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The first non-empty identifier of two wire keys, or an empty one.
    pub(crate) fn first_present(primary: Option<Self>, fallback: Option<Self>) -> Self {
        primary
            .into_iter()
            .chain(fallback)
            .find(|id| !id.0.is_empty())
            .unwrap_or_default()
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// The two record kinds the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// Harvest (catch) records.
    Harvest,
    /// Investor contribution records.
    Investment,
}

impl EntityKind {
    /// Collection path segment on the backend.
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Harvest => "harvest",
            EntityKind::Investment => "investment",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
