use chrono::{NaiveDateTime, SubsecRound, Utc};
use preparedness::StorageError;

pub mod check_in;
pub mod evacuation_center;
pub mod go_bag;
pub mod hazard_zone;
pub mod household;
pub mod incident;
pub mod member;
pub mod poi;
pub mod user;

pub(crate) fn convert_error(why: sqlx::Error) -> StorageError {
    match why {
        sqlx::Error::RowNotFound => StorageError::NotFound,
        _ => StorageError::Other(Box::new(why)),
    }
}

/// The current time as stored by both backends. Postgres keeps microseconds,
/// so anything finer is dropped to read back exactly what was written.
pub(crate) fn now() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}
