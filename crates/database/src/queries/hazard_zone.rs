use model::{hazard_zone::HazardZone, WithId};
use preparedness::database::Result;
use utility::let_also::LetAlso;

use crate::codec::Codec;
use crate::data_model::{hazard_zone::HazardZoneRow, with_id, with_ids};

use super::convert_error;

const SELECT_ALL: &str = "
    SELECT id, name, type, coordinates, severity
    FROM hazard_zones
    ORDER BY id;
";

const INSERT: &str = "
    INSERT INTO hazard_zones (name, type, coordinates, severity)
    VALUES ($1, $2, $3, $4)
    RETURNING id, name, type, coordinates, severity;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<HazardZone>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<HazardZoneRow<Vec<String>>>| {
                Ok(with_ids::<Hosted, _>(rows))
            })
    }

    pub async fn insert<'c, E>(executor: E, zone: HazardZone) -> Result<WithId<HazardZone>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(zone.name)
            .bind(zone.kind)
            .bind(Hosted::encode_sequence(&zone.coordinates))
            .bind(zone.severity)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: HazardZoneRow<Vec<String>>| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<HazardZone>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<HazardZoneRow<String>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, zone: HazardZone) -> Result<WithId<HazardZone>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(zone.name)
            .bind(zone.kind)
            .bind(Embedded::encode_sequence(&zone.coordinates))
            .bind(zone.severity)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: HazardZoneRow<String>| with_id::<Embedded, _>(row))
    }
}
