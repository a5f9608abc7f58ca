use model::member::Member;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct MemberRow {
    pub id: i32,
    pub household_id: i32,
    pub name: String,
    pub contact: Option<String>,
    pub last_known_location: Option<String>,
    pub status: String,
}

impl<C: Codec> DatabaseRow<C> for MemberRow {
    type Model = Member;

    fn get_id(&self) -> Id<Member> {
        Id::new(self.id)
    }

    fn to_model(self) -> Member {
        Member {
            household_id: Id::new(self.household_id),
            name: self.name,
            contact: self.contact,
            last_known_location: self.last_known_location,
            status: self.status,
        }
    }
}
