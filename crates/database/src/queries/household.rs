use model::{household::Household, WithId};
use preparedness::database::Result;
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{household::HouseholdRow, with_id, with_ids};

use super::convert_error;

const SELECT_ALL: &str = "
    SELECT id, name, address
    FROM households
    ORDER BY id;
";

const SELECT_BY_ID: &str = "
    SELECT id, name, address
    FROM households
    WHERE id = $1;
";

const INSERT: &str = "
    INSERT INTO households (name, address)
    VALUES ($1, $2)
    RETURNING id, name, address;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<Household>) -> Result<Option<WithId<Household>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<HouseholdRow>| row.map(with_id::<Hosted, _>))
    }

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Household>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<HouseholdRow>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, household: Household) -> Result<WithId<Household>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(household.name)
            .bind(household.address)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: HouseholdRow| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<Household>) -> Result<Option<WithId<Household>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<HouseholdRow>| row.map(with_id::<Embedded, _>))
    }

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Household>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<HouseholdRow>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, household: Household) -> Result<WithId<Household>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(household.name)
            .bind(household.address)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: HouseholdRow| with_id::<Embedded, _>(row))
    }
}
