use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};
use crate::ExampleData;

/// A report submitted by a resident. `kind` holds ids like `fire`, `flood`,
/// `landslide`, `vehicular-accident`, `medical-emergency` or `earthquake`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub is_anonymous: bool,
    pub reported_at: NaiveDateTime,
}

impl HasId for Incident {
    type IdType = i32;
}

impl ExampleData for Incident {
    fn example_data() -> Self {
        Self {
            kind: "flood".to_owned(),
            description: "Knee-deep water on the main road".to_owned(),
            location: "Legazpi City, Albay".to_owned(),
            latitude: Some("13.0281".to_owned()),
            longitude: Some("123.4441".to_owned()),
            is_anonymous: false,
            reported_at: NaiveDateTime::default(),
        }
    }
}

/// The payload of a new report. The report time is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewIncident {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub latitude: Option<String>,
    #[serde(default)]
    pub longitude: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
}

impl NewIncident {
    pub fn reported_at(self, reported_at: NaiveDateTime) -> Incident {
        Incident {
            kind: self.kind,
            description: self.description,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            is_anonymous: self.is_anonymous,
            reported_at,
        }
    }
}

impl Validate for NewIncident {
    fn validate(&self) -> validation::Result {
        validation::required("type", &self.kind)?;
        validation::required("description", &self.description)?;
        validation::required("location", &self.location)?;
        validation::optional_latitude("latitude", self.latitude.as_deref())?;
        validation::optional_longitude("longitude", self.longitude.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_to_named_report() {
        let incident: NewIncident = serde_json::from_str(
            r#"{"type": "fire", "description": "Smoke", "location": "Town Plaza"}"#,
        )
        .unwrap();
        assert_eq!(incident.kind, "fire");
        assert!(!incident.is_anonymous);
        assert_eq!(incident.latitude, None);
        assert!(incident.validate().is_ok());
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let incident = NewIncident {
            kind: "flood".to_owned(),
            description: "Rising water".to_owned(),
            location: "Bicol River".to_owned(),
            latitude: Some("113.02".to_owned()),
            longitude: Some("123.44".to_owned()),
            is_anonymous: true,
        };
        assert_eq!(incident.validate().unwrap_err().field, "latitude");
    }

    #[test]
    fn serializes_type_and_camel_case() {
        let value = serde_json::to_value(Incident::example_data()).unwrap();
        assert_eq!(value["type"], "flood");
        assert_eq!(value["isAnonymous"], false);
        assert!(value.get("reportedAt").is_some());
    }
}
