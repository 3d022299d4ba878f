use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The fields every content record shares and the ordering manager reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderedCore {
    #[serde(default)]
    pub id: String,
    #[serde(default, deserialize_with = "super::lenient::order")]
    pub order: u32,
    #[serde(default)]
    pub archived: bool,
}

impl OrderedCore {
    #[must_use]
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            id: id.into(),
            order,
            archived: false,
        }
    }
}

/// A stored record of any collection.
///
/// Everything besides the ordered core is kept verbatim in `fields`, so a
/// load/save round trip never loses data the store does not know about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(flatten)]
    pub core: OrderedCore,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<String>, order: u32) -> Self {
        Self {
            core: OrderedCore::new(id, order),
            fields: Map::new(),
        }
    }

    /// Builder-style setter for an entity field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn archived(mut self) -> Self {
        self.core.archived = true;
        self
    }
}

macro_rules! ordered_via_core {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::ordering::Ordered for $ty {
            fn id(&self) -> &str {
                &self.core.id
            }

            fn order(&self) -> u32 {
                self.core.order
            }

            fn set_order(&mut self, order: u32) {
                self.core.order = order;
            }

            fn is_archived(&self) -> bool {
                self.core.archived
            }

            fn set_archived(&mut self, archived: bool) {
                self.core.archived = archived;
            }
        }
    )+};
}

pub(super) use ordered_via_core;

ordered_via_core!(Record);
