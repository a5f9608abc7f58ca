//! Conversion between logical values and what a backend's columns can hold.
//!
//! Postgres has native `BOOLEAN` and `TEXT[]` columns. The SQLite schema only
//! declares `INTEGER` and `TEXT`, so flags are stored as 0/1 and sequences as
//! JSON text there.

use preparedness::BackendKind;

pub trait Codec: Send + Sync + 'static {
    const KIND: BackendKind;

    /// Column representation of a boolean.
    type Flag;

    /// Column representation of an ordered sequence of strings.
    type Sequence;

    fn encode_flag(value: bool) -> Self::Flag;
    fn decode_flag(value: Self::Flag) -> bool;
    fn encode_sequence(values: &[String]) -> Self::Sequence;
    fn decode_sequence(value: Self::Sequence) -> Vec<String>;
}

/// Postgres: values are stored as they are.
#[derive(Debug, Clone, Copy)]
pub struct Hosted;

impl Codec for Hosted {
    const KIND: BackendKind = BackendKind::Hosted;

    type Flag = bool;
    type Sequence = Vec<String>;

    fn encode_flag(value: bool) -> bool {
        value
    }

    fn decode_flag(value: bool) -> bool {
        value
    }

    fn encode_sequence(values: &[String]) -> Vec<String> {
        values.to_vec()
    }

    fn decode_sequence(value: Vec<String>) -> Vec<String> {
        value
    }
}

/// SQLite: flags become 0/1, sequences become a JSON array.
#[derive(Debug, Clone, Copy)]
pub struct Embedded;

impl Codec for Embedded {
    const KIND: BackendKind = BackendKind::Embedded;

    type Flag = i64;
    type Sequence = String;

    fn encode_flag(value: bool) -> i64 {
        i64::from(value)
    }

    /// Any non-zero value reads as `true`.
    fn decode_flag(value: i64) -> bool {
        value != 0
    }

    fn encode_sequence(values: &[String]) -> String {
        serde_json::Value::from(values.to_vec()).to_string()
    }

    /// A blob that is not a JSON array of strings reads as an empty sequence.
    fn decode_sequence(value: String) -> Vec<String> {
        serde_json::from_str(&value).unwrap_or_else(|why| {
            log::warn!("unreadable sequence {:?}, using an empty one: {}", value, why);
            Vec::new()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<String> {
        vec!["13.0300,123.4500".to_owned(), "13.0320,123.4520".to_owned()]
    }

    #[test]
    fn embedded_flags_are_integers() {
        assert_eq!(Embedded::encode_flag(true), 1);
        assert_eq!(Embedded::encode_flag(false), 0);
        assert!(Embedded::decode_flag(1));
        assert!(Embedded::decode_flag(-3));
        assert!(!Embedded::decode_flag(0));
    }

    #[test]
    fn embedded_sequences_are_json_text() {
        let encoded = Embedded::encode_sequence(&points());
        assert_eq!(encoded, r#"["13.0300,123.4500","13.0320,123.4520"]"#);
        assert_eq!(Embedded::decode_sequence(encoded), points());
        assert_eq!(Embedded::decode_sequence("[]".to_owned()), Vec::<String>::new());
    }

    #[test]
    fn unreadable_sequences_decode_empty() {
        assert!(Embedded::decode_sequence("13.03,123.45".to_owned()).is_empty());
        assert!(Embedded::decode_sequence("[1, 2]".to_owned()).is_empty());
        assert!(Embedded::decode_sequence(String::new()).is_empty());
    }

    #[test]
    fn hosted_values_pass_through() {
        assert!(Hosted::decode_flag(Hosted::encode_flag(true)));
        assert_eq!(Hosted::decode_sequence(Hosted::encode_sequence(&points())), points());
        assert_eq!(Hosted::KIND, BackendKind::Hosted);
        assert_eq!(Embedded::KIND, BackendKind::Embedded);
    }
}
