use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate, ValidationError};
use crate::ExampleData;

pub const DEFAULT_SEVERITY: &str = "medium";

fn default_severity() -> String {
    DEFAULT_SEVERITY.to_owned()
}

/// An area shown on the hazard map. The outline is an ordered list of
/// `"lat,lng"` points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct HazardZone {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<String>,
    #[serde(default = "default_severity")]
    pub severity: String,
}

impl HasId for HazardZone {
    type IdType = i32;
}

impl ExampleData for HazardZone {
    fn example_data() -> Self {
        Self {
            name: "Bicol River Flood Zone".to_owned(),
            kind: "flood".to_owned(),
            coordinates: vec![
                "13.0300,123.4500".to_owned(),
                "13.0320,123.4520".to_owned(),
                "13.0310,123.4540".to_owned(),
            ],
            severity: "high".to_owned(),
        }
    }
}

impl Validate for HazardZone {
    fn validate(&self) -> validation::Result {
        validation::required("name", &self.name)?;
        validation::required("type", &self.kind)?;
        validation::required("severity", &self.severity)?;
        if self.coordinates.is_empty() {
            return Err(ValidationError::new(
                "coordinates",
                "needs at least one point",
            ));
        }
        self.coordinates
            .iter()
            .try_for_each(|point| validation::coordinate_pair("coordinates", point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_points_are_checked() {
        let mut zone = HazardZone::example_data();
        assert!(zone.validate().is_ok());

        zone.coordinates.push("13.04".to_owned());
        assert_eq!(zone.validate().unwrap_err().field, "coordinates");

        zone.coordinates.clear();
        assert!(zone.validate().is_err());
    }
}
