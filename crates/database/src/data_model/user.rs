use model::user::User;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: String,
    pub username: String,
    pub password: String,
}

impl<C: Codec> DatabaseRow<C> for UserRow {
    type Model = User;

    fn get_id(&self) -> Id<User> {
        Id::new(self.id.clone())
    }

    fn to_model(self) -> User {
        User {
            username: self.username,
            password: self.password,
        }
    }
}
