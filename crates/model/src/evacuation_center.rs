use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};
use crate::ExampleData;

pub const DEFAULT_STATUS: &str = "Open";

fn default_status() -> String {
    DEFAULT_STATUS.to_owned()
}

/// A shelter. Distance and capacity are display texts like `0.5 km` and
/// `500 pax`; the status is free text such as `Open` or `Full`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvacuationCenter {
    pub name: String,
    pub distance: String,
    pub capacity: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
}

impl HasId for EvacuationCenter {
    type IdType = i32;
}

impl ExampleData for EvacuationCenter {
    fn example_data() -> Self {
        Self {
            name: "Municipal Gymnasium".to_owned(),
            distance: "1.2 km".to_owned(),
            capacity: "1000 pax".to_owned(),
            status: default_status(),
            latitude: Some("13.0355".to_owned()),
            longitude: Some("123.4577".to_owned()),
        }
    }
}

impl Validate for EvacuationCenter {
    fn validate(&self) -> validation::Result {
        validation::required("name", &self.name)?;
        validation::required("distance", &self.distance)?;
        validation::required("capacity", &self.capacity)?;
        validation::required("status", &self.status)?;
        validation::optional_latitude("latitude", self.latitude.as_deref())?;
        validation::optional_longitude("longitude", self.longitude.as_deref())
    }
}
