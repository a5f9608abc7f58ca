use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utility::id::HasId;

use crate::validation::{self, Validate};
use crate::ExampleData;

/// One entry of the go-bag checklist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoBagItem {
    pub category: String,
    pub name: String,
    #[serde(default)]
    pub checked: bool,
}

impl GoBagItem {
    pub fn unchecked(category: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            checked: false,
        }
    }
}

impl HasId for GoBagItem {
    type IdType = i32;
}

impl ExampleData for GoBagItem {
    fn example_data() -> Self {
        Self::unchecked("Essentials", "Water (1 gallon/person)")
    }
}

impl Validate for GoBagItem {
    fn validate(&self) -> validation::Result {
        validation::required("category", &self.category)?;
        validation::required("name", &self.name)
    }
}
