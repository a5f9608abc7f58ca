use chrono::NaiveDateTime;
use model::check_in::CheckIn;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

/// Table: `check_ins`
#[derive(Debug, Clone, FromRow)]
pub struct CheckInRow<F> {
    pub id: i32,
    pub member_id: i32,
    pub location: Option<String>,
    pub is_safe: F,
    pub timestamp: NaiveDateTime,
}

impl<C: Codec> DatabaseRow<C> for CheckInRow<C::Flag> {
    type Model = CheckIn;

    fn get_id(&self) -> Id<CheckIn> {
        Id::new(self.id)
    }

    fn to_model(self) -> CheckIn {
        CheckIn {
            member_id: Id::new(self.member_id),
            location: self.location,
            is_safe: C::decode_flag(self.is_safe),
            timestamp: self.timestamp,
        }
    }
}
