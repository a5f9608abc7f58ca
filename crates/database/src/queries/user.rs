use model::{user::User, WithId};
use preparedness::database::Result;
use utility::id::Id;
use uuid::Uuid;

use crate::data_model::{user::UserRow, with_id};

use super::convert_error;

const SELECT_BY_ID: &str = "
    SELECT id, username, password
    FROM users
    WHERE id = $1;
";

const SELECT_BY_USERNAME: &str = "
    SELECT id, username, password
    FROM users
    WHERE username = $1;
";

const INSERT: &str = "
    INSERT INTO users (id, username, password)
    VALUES ($1, $2, $3)
    RETURNING id, username, password;
";

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<User>) -> Result<Option<WithId<User>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw_ref::<str>())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<UserRow>| row.map(with_id::<Hosted, _>))
    }

    pub async fn get_by_username<'c, E>(
        executor: E,
        username: &str,
    ) -> Result<Option<WithId<User>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_USERNAME)
            .bind(username)
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<UserRow>| row.map(with_id::<Hosted, _>))
    }

    pub async fn insert<'c, E>(executor: E, user: User) -> Result<WithId<User>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(new_id())
            .bind(user.username)
            .bind(user.password)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: UserRow| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<User>) -> Result<Option<WithId<User>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw_ref::<str>())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<UserRow>| row.map(with_id::<Embedded, _>))
    }

    pub async fn get_by_username<'c, E>(
        executor: E,
        username: &str,
    ) -> Result<Option<WithId<User>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_USERNAME)
            .bind(username)
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<UserRow>| row.map(with_id::<Embedded, _>))
    }

    pub async fn insert<'c, E>(executor: E, user: User) -> Result<WithId<User>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(new_id())
            .bind(user.username)
            .bind(user.password)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: UserRow| with_id::<Embedded, _>(row))
    }
}
