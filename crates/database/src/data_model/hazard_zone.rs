use model::hazard_zone::HazardZone;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

/// Table: `hazard_zones`. `coordinates` is a `TEXT[]` on the hosted and a
/// JSON text blob on the embedded backend.
#[derive(Debug, Clone, FromRow)]
pub struct HazardZoneRow<S> {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub coordinates: S,
    pub severity: String,
}

impl<C: Codec> DatabaseRow<C> for HazardZoneRow<C::Sequence> {
    type Model = HazardZone;

    fn get_id(&self) -> Id<HazardZone> {
        Id::new(self.id)
    }

    fn to_model(self) -> HazardZone {
        HazardZone {
            name: self.name,
            kind: self.kind,
            coordinates: C::decode_sequence(self.coordinates),
            severity: self.severity,
        }
    }
}
