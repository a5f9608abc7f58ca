use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};

/// An account. The password is opaque to this crate and never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl HasId for User {
    type IdType = String;
}

impl Validate for User {
    fn validate(&self) -> validation::Result {
        validation::required("username", &self.username)?;
        validation::required("password", &self.password)
    }
}
