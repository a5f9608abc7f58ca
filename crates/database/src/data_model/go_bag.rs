use model::go_bag::GoBagItem;
use sqlx::prelude::FromRow;
use utility::id::Id;

use crate::codec::Codec;

use super::DatabaseRow;

/// Table: `go_bag_items`
#[derive(Debug, Clone, FromRow)]
pub struct GoBagItemRow<F> {
    pub id: i32,
    pub category: String,
    pub name: String,
    pub checked: F,
}

impl<C: Codec> DatabaseRow<C> for GoBagItemRow<C::Flag> {
    type Model = GoBagItem;

    fn get_id(&self) -> Id<GoBagItem> {
        Id::new(self.id)
    }

    fn to_model(self) -> GoBagItem {
        GoBagItem {
            category: self.category,
            name: self.name,
            checked: C::decode_flag(self.checked),
        }
    }
}
