use model::{
    check_in::{CheckIn, NewCheckIn},
    member::Member,
    WithId,
};
use preparedness::database::Result;
use utility::{id::Id, let_also::LetAlso};

use crate::codec::Codec;
use crate::data_model::{check_in::CheckInRow, with_id, with_ids};

use super::{convert_error, now};

const SELECT_BY_MEMBER: &str = "
    SELECT id, member_id, location, is_safe, \"timestamp\"
    FROM check_ins
    WHERE member_id = $1
    ORDER BY \"timestamp\", id;
";

const INSERT: &str = "
    INSERT INTO check_ins (member_id, location, is_safe, \"timestamp\")
    VALUES ($1, $2, $3, $4)
    RETURNING id, member_id, location, is_safe, \"timestamp\";
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_by_member<'c, E>(
        executor: E,
        member_id: &Id<Member>,
    ) -> Result<Vec<WithId<CheckIn>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_BY_MEMBER)
            .bind(member_id.raw())
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<CheckInRow<bool>>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, check_in: NewCheckIn) -> Result<WithId<CheckIn>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        let check_in = check_in.checked_in_at(now());
        sqlx::query_as(INSERT)
            .bind(check_in.member_id.raw())
            .bind(check_in.location)
            .bind(Hosted::encode_flag(check_in.is_safe))
            .bind(check_in.timestamp)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: CheckInRow<bool>| with_id::<Hosted, _>(row))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_by_member<'c, E>(
        executor: E,
        member_id: &Id<Member>,
    ) -> Result<Vec<WithId<CheckIn>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_BY_MEMBER)
            .bind(member_id.raw())
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<CheckInRow<i64>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, check_in: NewCheckIn) -> Result<WithId<CheckIn>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        let check_in = check_in.checked_in_at(now());
        sqlx::query_as(INSERT)
            .bind(check_in.member_id.raw())
            .bind(check_in.location)
            .bind(Embedded::encode_flag(check_in.is_safe))
            .bind(check_in.timestamp)
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: CheckInRow<i64>| with_id::<Embedded, _>(row))
    }
}
