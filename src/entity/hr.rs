//! HR entity
//!
//! Table: hr. One row per employee holding an HR role.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::employee;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "hr")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub hr_id: i32,

    /// Underlying employee row (1:1)
    #[sea_orm(unique)]
    pub emp_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmpId",
        to = "super::employee::Column::EmpId",
        on_delete = "Cascade"
    )]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// HR request body: the employee fields, flat
pub type Payload = employee::Payload;

/// HR record as returned to clients: employee fields plus `hr_id`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrRecord {
    pub hr_id: i32,
    #[serde(flatten)]
    pub employee: employee::Model,
}

impl HrRecord {
    pub fn new(hr_id: i32, employee: employee::Model) -> Self {
        Self { hr_id, employee }
    }
}
