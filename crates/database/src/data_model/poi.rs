use model::poi::Poi;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

/// Table: `pois`
#[derive(Debug, Clone, FromRow)]
pub struct PoiRow<F> {
    pub id: i32,
    pub name: String,
    #[sqlx(rename = "type")]
    pub kind: String,
    pub latitude: String,
    pub longitude: String,
    pub address: Option<String>,
    pub available: F,
}

impl<C: Codec> DatabaseRow<C> for PoiRow<C::Flag> {
    type Model = Poi;

    fn get_id(&self) -> Id<Poi> {
        Id::new(self.id)
    }

    fn to_model(self) -> Poi {
        Poi {
            name: self.name,
            kind: self.kind,
            latitude: self.latitude,
            longitude: self.longitude,
            address: self.address,
            available: C::decode_flag(self.available),
        }
    }
}
