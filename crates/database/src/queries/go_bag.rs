use model::{go_bag::GoBagItem, WithId};
use preparedness::database::Result;
use utility::{id::Id, let_also::LetAlso};

use crate::codec::Codec;
use crate::data_model::{go_bag::GoBagItemRow, with_id, with_ids};

use super::convert_error;

const SELECT_ALL: &str = "
    SELECT id, category, name, checked
    FROM go_bag_items
    ORDER BY id;
";

const INSERT: &str = "
    INSERT INTO go_bag_items (category, name, checked)
    VALUES ($1, $2, $3)
    RETURNING id, category, name, checked;
";

const UPDATE_CHECKED: &str = "
    UPDATE go_bag_items
    SET checked = $1
    WHERE id = $2
    RETURNING id, category, name, checked;
";

pub mod hosted {
    use sqlx::{Executor, Postgres};

    use crate::codec::Hosted;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<GoBagItem>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<GoBagItemRow<bool>>| Ok(with_ids::<Hosted, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, item: GoBagItem) -> Result<WithId<GoBagItem>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(INSERT)
            .bind(item.category)
            .bind(item.name)
            .bind(Hosted::encode_flag(item.checked))
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: GoBagItemRow<bool>| with_id::<Hosted, _>(row))
    }

    pub async fn update_checked<'c, E>(
        executor: E,
        id: &Id<GoBagItem>,
        checked: bool,
    ) -> Result<Option<WithId<GoBagItem>>>
    where
        E: Executor<'c, Database = Postgres>,
    {
        sqlx::query_as(UPDATE_CHECKED)
            .bind(Hosted::encode_flag(checked))
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<GoBagItemRow<bool>>| row.map(with_id::<Hosted, _>))
    }
}

pub mod embedded {
    use sqlx::{Executor, Sqlite};

    use crate::codec::Embedded;

    use super::*;

    pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<GoBagItem>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(SELECT_ALL)
            .fetch_all(executor)
            .await
            .map_err(convert_error)?
            .let_owned(|rows: Vec<GoBagItemRow<i64>>| Ok(with_ids::<Embedded, _>(rows)))
    }

    pub async fn insert<'c, E>(executor: E, item: GoBagItem) -> Result<WithId<GoBagItem>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(INSERT)
            .bind(item.category)
            .bind(item.name)
            .bind(Embedded::encode_flag(item.checked))
            .fetch_one(executor)
            .await
            .map_err(convert_error)
            .map(|row: GoBagItemRow<i64>| with_id::<Embedded, _>(row))
    }

    pub async fn update_checked<'c, E>(
        executor: E,
        id: &Id<GoBagItem>,
        checked: bool,
    ) -> Result<Option<WithId<GoBagItem>>>
    where
        E: Executor<'c, Database = Sqlite>,
    {
        sqlx::query_as(UPDATE_CHECKED)
            .bind(Embedded::encode_flag(checked))
            .bind(id.raw())
            .fetch_optional(executor)
            .await
            .map_err(convert_error)
            .map(|row: Option<GoBagItemRow<i64>>| row.map(with_id::<Embedded, _>))
    }
}
