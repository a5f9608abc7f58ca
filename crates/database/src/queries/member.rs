use model::{household::Household, member::Member, WithId};
use preparedness::database::Result;
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{member::MemberRow, with_id, with_ids};

use super::convert_error;

const SELECT_BY_HOUSEHOLD: &str = "
    SELECT id, household_id, name, contact, last_known_location, status
    FROM members
    WHERE household_id = $1
    ORDER BY id;
";

const SELECT_ALL: &str = "
    SELECT id, household_id, name, contact, last_known_location, status
    FROM members
    ORDER BY id;
";

const SELECT_BY_ID: &str = "
    SELECT id, household_id, name, contact, last_known_location, status
    FROM members
    WHERE id = $1;
";

const INSERT: &str = "
    INSERT INTO members (household_id, name, contact, last_known_location, status)
    VALUES ($1, $2, $3, $4, $5)
    RETURNING id, household_id, name, contact, last_known_location, status;
";

// A NULL location keeps the last known one.
const UPDATE_STATUS: &str = "
    UPDATE members
    SET status = $1,
        last_known_location = COALESCE($2, last_known_location)
    WHERE id = $3
    RETURNING id, household_id, name, contact, last_known_location, status;
";

fn non_empty(location: Option<&str>) -> Option<&str> {
    location.filter(|location| !location.is_empty())
}

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<Member>) -> Result<Option<WithId<Member>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<MemberRow>| row.map(with_id::<Hosted, _>))
    }

    pub async fn get_by_household<'c, E>(
        executor: E,
        household_id: &Id<Household>,
    ) -> Result<Vec<WithId<Member>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_HOUSEHOLD)
            .bind(household_id.raw())
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<MemberRow>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Member>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<MemberRow>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, member: Member) -> Result<WithId<Member>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(member.household_id.raw())
            .bind(member.name)
            .bind(member.contact)
            .bind(member.last_known_location)
            .bind(member.status)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: MemberRow| with_id::<Hosted, _>(row))
    }

    pub async fn update_status<'c, E>(
        executor: E,
        id: &Id<Member>,
        status: &str,
        location: Option<&str>,
    ) -> Result<Option<WithId<Member>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(UPDATE_STATUS)
            .bind(status)
            .bind(non_empty(location))
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<MemberRow>| row.map(with_id::<Hosted, _>))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get<'c, E>(executor: E, id: &Id<Member>) -> Result<Option<WithId<Member>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_ID)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<MemberRow>| row.map(with_id::<Embedded, _>))
    }

    pub async fn get_by_household<'c, E>(
        executor: E,
        household_id: &Id<Household>,
    ) -> Result<Vec<WithId<Member>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_HOUSEHOLD)
            .bind(household_id.raw())
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<MemberRow>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Member>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<MemberRow>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, member: Member) -> Result<WithId<Member>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(member.household_id.raw())
            .bind(member.name)
            .bind(member.contact)
            .bind(member.last_known_location)
            .bind(member.status)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: MemberRow| with_id::<Embedded, _>(row))
    }

    pub async fn update_status<'c, E>(
        executor: E,
        id: &Id<Member>,
        status: &str,
        location: Option<&str>,
    ) -> Result<Option<WithId<Member>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(UPDATE_STATUS)
            .bind(status)
            .bind(non_empty(location))
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<MemberRow>| row.map(with_id::<Embedded, _>))
    }
}
