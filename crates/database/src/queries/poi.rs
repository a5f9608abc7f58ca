use model::{poi::Poi, WithId};
use preparedness::database::Result;
use utility::let_also::LetAlso;

use crate::codec::Codec;
use crate::data_model::{poi::PoiRow, with_id, with_ids};

use super::convert_error;

const SELECT_ALL: &str = "
    SELECT id, name, type, latitude, longitude, address, available
    FROM pois
    ORDER BY id;
";

const SELECT_BY_KIND: &str = "
    SELECT id, name, type, latitude, longitude, address, available
    FROM pois
    WHERE type = $1
    ORDER BY id;
";

const INSERT: &str = "
    INSERT INTO pois (name, type, latitude, longitude, address, available)
    VALUES ($1, $2, $3, $4, $5, $6)
    RETURNING id, name, type, latitude, longitude, address, available;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Poi>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<PoiRow<bool>>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn get_by_kind<'c, E>(executor: E, kind: &str) -> Result<Vec<WithId<Poi>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_KIND)
            .bind(kind)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<PoiRow<bool>>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, poi: Poi) -> Result<WithId<Poi>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(poi.name)
            .bind(poi.kind)
            .bind(poi.latitude)
            .bind(poi.longitude)
            .bind(poi.address)
            .bind(Hosted::encode_flag(poi.available))
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: PoiRow<bool>| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Poi>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<PoiRow<i64>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn get_by_kind<'c, E>(executor: E, kind: &str) -> Result<Vec<WithId<Poi>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_KIND)
            .bind(kind)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<PoiRow<i64>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, poi: Poi) -> Result<WithId<Poi>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(poi.name)
            .bind(poi.kind)
            .bind(poi.latitude)
            .bind(poi.longitude)
            .bind(poi.address)
            .bind(Embedded::encode_flag(poi.available))
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: PoiRow<i64>| with_id::<Embedded, _>(row))
    }
}
