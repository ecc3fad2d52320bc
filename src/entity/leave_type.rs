//! Leave type entity
//!
//! Table: leave_type

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{self, Required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leave_type")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub leave_type_id: i32,

    #[sea_orm(column_type = "String(Some(100))")]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::leave::Entity")]
    Leave,
}

impl Related<super::leave::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leave.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default, deserialize_with = "validation::non_blank")]
    pub name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLeaveType {
    pub name: String,
}

impl Payload {
    pub fn validate(self) -> AppResult<NewLeaveType> {
        let mut required = Required::default();
        match required.take("Name", self.name) {
            Some(name) => Ok(NewLeaveType { name }),
            None => Err(required.into_error()),
        }
    }
}
