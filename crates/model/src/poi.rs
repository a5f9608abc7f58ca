use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};
use crate::ExampleData;

fn default_available() -> bool {
    true
}

/// A point of interest such as a health center, a charging station or a pet
/// shelter.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Poi {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub latitude: String,
    pub longitude: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

impl HasId for Poi {
    type IdType = i32;
}

impl ExampleData for Poi {
    fn example_data() -> Self {
        Self {
            name: "Pio Duran Health Center".to_owned(),
            kind: "medical".to_owned(),
            latitude: "13.0350".to_owned(),
            longitude: "123.4570".to_owned(),
            address: Some("Main Street, Pio Duran".to_owned()),
            available: true,
        }
    }
}

impl Validate for Poi {
    fn validate(&self) -> validation::Result {
        validation::required("name", &self.name)?;
        validation::required("type", &self.kind)?;
        validation::latitude("latitude", &self.latitude)?;
        validation::longitude("longitude", &self.longitude)
    }
}
