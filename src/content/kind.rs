use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::entities::{Product, ResearchArticle, Sanitize, Service, TeamMember};
use super::record::Record;

/// One of the site's content collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Products,
    Services,
    Team,
    Research,
}

impl ContentKind {
    pub const ALL: [ContentKind; 4] = [
        ContentKind::Products,
        ContentKind::Services,
        ContentKind::Team,
        ContentKind::Research,
    ];

    /// Name of the JSON file holding this collection.
    #[must_use]
    pub fn file_name(self) -> &'static str {
        match self {
            ContentKind::Products => "products.json",
            ContentKind::Services => "services.json",
            ContentKind::Team => "team.json",
            ContentKind::Research => "research.json",
        }
    }

    /// Run a raw editor payload through this collection's typed entity:
    /// decode it, apply the entity's [`Sanitize`] rules and return it as a
    /// generic [`Record`].
    pub fn sanitize_record(self, value: Value) -> Result<Record, serde_json::Error> {
        match self {
            ContentKind::Products => sanitize_as::<Product>(value),
            ContentKind::Services => sanitize_as::<Service>(value),
            ContentKind::Team => sanitize_as::<TeamMember>(value),
            ContentKind::Research => sanitize_as::<ResearchArticle>(value),
        }
    }
}

fn sanitize_as<T>(value: Value) -> Result<Record, serde_json::Error>
where
    T: DeserializeOwned + Serialize + Sanitize,
{
    let mut entity: T = serde_json::from_value(value)?;
    entity.sanitize();
    serde_json::from_value(serde_json::to_value(entity)?)
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Products => write!(f, "products"),
            ContentKind::Services => write!(f, "services"),
            ContentKind::Team => write!(f, "team"),
            ContentKind::Research => write!(f, "research"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "products" | "product" => Ok(ContentKind::Products),
            "services" | "service" => Ok(ContentKind::Services),
            "team" | "members" => Ok(ContentKind::Team),
            "research" | "articles" => Ok(ContentKind::Research),
            _ => Err(format!("Unknown content kind: {s}")),
        }
    }
}
