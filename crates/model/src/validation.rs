//! Rules every insert payload has to satisfy before it is handed to storage.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid `{field}`: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

pub type Result = core::result::Result<(), ValidationError>;

pub trait Validate {
    fn validate(&self) -> Result;
}

pub fn required(field: &'static str, value: &str) -> Result {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "must not be blank"));
    }
    Ok(())
}

pub(crate) fn latitude(field: &'static str, value: &str) -> Result {
    degrees(field, value, 90.0)
}

pub(crate) fn longitude(field: &'static str, value: &str) -> Result {
    degrees(field, value, 180.0)
}

pub(crate) fn optional_latitude(field: &'static str, value: Option<&str>) -> Result {
    value.map_or(Ok(()), |value| latitude(field, value))
}

pub(crate) fn optional_longitude(field: &'static str, value: Option<&str>) -> Result {
    value.map_or(Ok(()), |value| longitude(field, value))
}

/// Checks a `"lat,lng"` pair as used by hazard zone outlines.
pub(crate) fn coordinate_pair(field: &'static str, value: &str) -> Result {
    let (lat, lng) = value
        .split_once(',')
        .ok_or_else(|| ValidationError::new(field, format!("`{}` is not a lat,lng pair", value)))?;
    latitude(field, lat)?;
    longitude(field, lng)
}

fn degrees(field: &'static str, value: &str, limit: f64) -> Result {
    let degrees: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, format!("`{}` is not a number", value)))?;
    if !degrees.is_finite() || degrees.abs() > limit {
        return Err(ValidationError::new(
            field,
            format!("{} is outside of -{limit}..={limit}", degrees),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert_eq!(
            required("name", "   "),
            Err(ValidationError::new("name", "must not be blank"))
        );
        assert!(required("name", "Extra Clothes").is_ok());
    }

    #[test]
    fn degrees_are_range_checked() {
        assert!(latitude("latitude", "13.0345").is_ok());
        assert!(latitude("latitude", "-90").is_ok());
        assert!(latitude("latitude", "90.5").is_err());
        assert!(longitude("longitude", "123.4567").is_ok());
        assert!(longitude("longitude", "181").is_err());
        assert!(longitude("longitude", "east").is_err());
        assert!(optional_latitude("latitude", None).is_ok());
    }

    #[test]
    fn coordinate_pairs_need_both_halves() {
        assert!(coordinate_pair("coordinates", "13.0300,123.4500").is_ok());
        assert!(coordinate_pair("coordinates", " 13.03 , 123.45 ").is_ok());
        assert!(coordinate_pair("coordinates", "13.0300").is_err());
        assert!(coordinate_pair("coordinates", "13.03,").is_err());
    }
}
