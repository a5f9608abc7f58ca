use model::{
    incident::{Incident, NewIncident},
    WithId,
};
use preparedness::database::Result;
use utility::let_also::LetAlso;

use crate::codec::Codec;
use crate::data_model::{incident::IncidentRow, with_id, with_ids};

use super::{convert_error, now};

const SELECT_ALL: &str = "
    SELECT id, type, description, location, latitude, longitude, is_anonymous, reported_at
    FROM incidents
    ORDER BY reported_at, id;
";

const INSERT: &str = "
    INSERT INTO incidents (
        type,
        description,
        location,
        latitude,
        longitude,
        is_anonymous,
        reported_at
    )
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    RETURNING id, type, description, location, latitude, longitude, is_anonymous, reported_at;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Incident>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<IncidentRow<bool>>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, incident: NewIncident) -> Result<WithId<Incident>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let incident = incident.reported_at(now());
        sqlx::query_as(INSERT)
            .bind(incident.kind)
            .bind(incident.description)
            .bind(incident.location)
            .bind(incident.latitude)
            .bind(incident.longitude)
            .bind(Hosted::encode_flag(incident.is_anonymous))
            .bind(incident.reported_at)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: IncidentRow<bool>| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<Incident>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<IncidentRow<i64>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, incident: NewIncident) -> Result<WithId<Incident>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let incident = incident.reported_at(now());
        sqlx::query_as(INSERT)
            .bind(incident.kind)
            .bind(incident.description)
            .bind(incident.location)
            .bind(incident.latitude)
            .bind(incident.longitude)
            .bind(Embedded::encode_flag(incident.is_anonymous))
            .bind(incident.reported_at)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: IncidentRow<i64>| with_id::<Embedded, _>(row))
    }
}
