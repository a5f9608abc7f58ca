use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::{HasId, Id};

use crate::member::Member;
use crate::validation::{self, Validate};

/// A member reporting whether they are safe.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    pub member_id: Id<Member>,
    pub location: Option<String>,
    pub is_safe: bool,
    pub timestamp: NaiveDateTime,
}

impl HasId for CheckIn {
    type IdType = i32;
}

fn default_is_safe() -> bool {
    true
}

/// The payload of a new check-in. The timestamp is assigned on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewCheckIn {
    pub member_id: Id<Member>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_is_safe")]
    pub is_safe: bool,
}

impl NewCheckIn {
    pub fn checked_in_at(self, timestamp: NaiveDateTime) -> CheckIn {
        CheckIn {
            member_id: self.member_id,
            location: self.location,
            is_safe: self.is_safe,
            timestamp,
        }
    }
}

impl Validate for NewCheckIn {
    fn validate(&self) -> validation::Result {
        match &self.location {
            Some(location) => validation::required("location", location),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_are_safe_unless_told_otherwise() {
        let check_in: NewCheckIn = serde_json::from_str(r#"{"memberId": 2}"#).unwrap();
        assert!(check_in.is_safe);
        assert_eq!(check_in.member_id.raw(), 2);

        let check_in: NewCheckIn =
            serde_json::from_str(r#"{"memberId": 2, "isSafe": false, "location": ""}"#)
                .unwrap();
        assert!(!check_in.is_safe);
        assert!(check_in.validate().is_err());
    }
}
