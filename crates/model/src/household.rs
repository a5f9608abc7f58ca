use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Household {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

impl HasId for Household {
    type IdType = i32;
}

impl Validate for Household {
    fn validate(&self) -> validation::Result {
        validation::required("name", &self.name)
    }
}
