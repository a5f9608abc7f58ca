use chrono::NaiveDateTime;
use model::incident::Incident;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

/// Table: `incidents`. `is_anonymous` is a `bool` on the hosted and an
/// `i64` on the embedded backend.
#[derive(Debug, Clone, FromRow)]
pub struct IncidentRow<F> {
    pub id: i32,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub description: String,
    pub location: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub is_anonymous: F,
    pub reported_at: NaiveDateTime,
}

impl<C: Codec> DatabaseRow<C> for IncidentRow<C::Flag> {
    type Model = Incident;

    fn get_id(&self) -> Id<Incident> {
        Id::new(self.id)
    }

    fn to_model(self) -> Incident {
        Incident {
            kind: self.kind,
            description: self.description,
            location: self.location,
            latitude: self.latitude,
            longitude: self.longitude,
            is_anonymous: C::decode_flag(self.is_anonymous),
            reported_at: self.reported_at,
        }
    }
}
