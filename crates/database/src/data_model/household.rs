use model::household::Household;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct HouseholdRow {
    pub id: i32,
    pub name: String,
    pub address: Option<String>,
}

impl<C: Codec> DatabaseRow<C> for HouseholdRow {
    type Model = Household;

    fn get_id(&self) -> Id<Household> {
        Id::new(self.id)
    }

    fn to_model(self) -> Household {
        Household {
            name: self.name,
            address: self.address,
        }
    }
}
