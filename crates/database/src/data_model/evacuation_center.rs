use model::evacuation_center::EvacuationCenter;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct EvacuationCenterRow {
    pub id: i32,
    pub name: String,
    pub distance: String,
    pub capacity: String,
    pub status: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
}

impl<C: Codec> DatabaseRow<C> for EvacuationCenterRow {
    type Model = EvacuationCenter;

    fn get_id(&self) -> Id<EvacuationCenter> {
        Id::new(self.id)
    }

    fn to_model(self) -> EvacuationCenter {
        EvacuationCenter {
            name: self.name,
            distance: self.distance,
            capacity: self.capacity,
            status: self.status,
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }
}
