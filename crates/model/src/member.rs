use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::household::Household;
use crate::validation::{self, Validate};

pub const DEFAULT_STATUS: &str = "unknown";

fn default_status() -> String {
    DEFAULT_STATUS.to_owned()
}

/// A person belonging to a household. `status` and `last_known_location`
/// are updated as members report in during an emergency.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub household_id: Id<Household>,
    pub name: String,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub last_known_location: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
}

impl Member {
    pub fn new(
        household_id: Id<Household>,
        name: impl Into<String>,
        contact: Option<String>,
    ) -> Self {
        Self {
            household_id,
            name: name.into(),
            contact,
            last_known_location: None,
            status: default_status(),
        }
    }
}

impl HasId for Member {
    type IdType = i32;
}

impl Validate for Member {
    fn validate(&self) -> validation::Result {
        validation::required("name", &self.name)?;
        validation::required("status", &self.status)
    }
}
