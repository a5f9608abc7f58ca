use std::fmt::Debug;

use model::WithId;
use schemars::JsonSchema;
use serde::Serialize;
use utility::id::{HasId, Id};

use crate::codec::Codec;

pub mod check_in;
pub mod evacuation_center;
pub mod go_bag;
pub mod hazard_zone;
pub mod household;
pub mod incident;
pub mod member;
pub mod poi;
pub mod user;

/// A row as read from the table of `Model`. Flag and sequence columns are
/// decoded with the codec `C` of the backend the row was read from.
pub trait DatabaseRow<C: Codec> {
    type Model: HasId;

    fn get_id(&self) -> Id<Self::Model>;
    fn to_model(self) -> Self::Model;
}

pub fn with_ids<C, R>(rows: Vec<R>) -> Vec<WithId<R::Model>>
where
    C: Codec,
    R: DatabaseRow<C>,
    <R::Model as HasId>::IdType: Debug + Clone + Serialize + JsonSchema,
{
    rows.into_iter().map(with_id::<C, R>).collect::<Vec<_>>()
}

pub fn with_id<C, R>(row: R) -> WithId<R::Model>
where
    C: Codec,
    R: DatabaseRow<C>,
    <R::Model as HasId>::IdType: Debug + Clone + Serialize + JsonSchema,
{
    WithId::new(row.get_id(), row.to_model())
}
