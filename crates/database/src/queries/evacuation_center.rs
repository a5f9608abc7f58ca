use model::{evacuation_center::EvacuationCenter, WithId};
use preparedness::database::Result;
use utility::{id::Id, let_also::LetAlso};

use crate::data_model::{evacuation_center::EvacuationCenterRow, with_id, with_ids};

use super::convert_error;

const SELECT_ALL: &str = "
    SELECT id, name, distance, capacity, status, latitude, longitude
    FROM evacuation_centers
    ORDER BY id;
";

const INSERT: &str = "
    INSERT INTO evacuation_centers (name, distance, capacity, status, latitude, longitude)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, name, distance, capacity, status, latitude, longitude;
";

const UPDATE_STATUS: &str = "
    UPDATE evacuation_centers
    SET status = $1
    WHERE id = $2
    RETURNING id, name, distance, capacity, status, latitude, longitude;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<EvacuationCenter>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<EvacuationCenterRow>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(
        executor: E,
        center: EvacuationCenter,
    ) -> Result<WithId<EvacuationCenter>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(center.name)
            .bind(center.distance)
            .bind(center.capacity)
            .bind(center.status)
            .bind(center.latitude)
            .bind(center.longitude)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: EvacuationCenterRow| with_id::<Hosted, _>(row))
    }

    pub async fn update_status<'c, E>(
        executor: E,
        id: &Id<EvacuationCenter>,
        status: &str,
    ) -> Result<Option<WithId<EvacuationCenter>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(UPDATE_STATUS)
            .bind(status)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<EvacuationCenterRow>| row.map(with_id::<Hosted, _>))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<EvacuationCenter>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<EvacuationCenterRow>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(
        executor: E,
        center: EvacuationCenter,
    ) -> Result<WithId<EvacuationCenter>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(center.name)
            .bind(center.distance)
            .bind(center.capacity)
            .bind(center.status)
            .bind(center.latitude)
            .bind(center.longitude)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: EvacuationCenterRow| with_id::<Embedded, _>(row))
    }

    pub async fn update_status<'c, E>(
        executor: E,
        id: &Id<EvacuationCenter>,
        status: &str,
    ) -> Result<Option<WithId<EvacuationCenter>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(UPDATE_STATUS)
            .bind(status)
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<EvacuationCenterRow>| row.map(with_id::<Embedded, _>))
    }
}
