//! Leave entity
//!
//! Table: leave. References an employee and a leave type by id.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{self, Required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leave")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub leave_id: i32,

    pub emp_id: i32,

    pub leave_type_id: i32,

    pub start_date: Option<Date>,

    pub end_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Leaves go with the employee
    #[sea_orm(
        belongs_to = "super::employee::Entity",
        from = "Column::EmpId",
        to = "super::employee::Column::EmpId",
        on_delete = "Cascade"
    )]
    Employee,
    /// A leave type in use cannot be deleted
    #[sea_orm(
        belongs_to = "super::leave_type::Entity",
        from = "Column::LeaveTypeId",
        to = "super::leave_type::Column::LeaveTypeId",
        on_delete = "Restrict"
    )]
    LeaveType,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl Related<super::leave_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LeaveType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default)]
    pub emp_id: Option<i32>,
    #[serde(default)]
    pub leave_type_id: Option<i32>,
    #[serde(default, deserialize_with = "validation::date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "validation::date")]
    pub end_date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewLeave {
    pub emp_id: i32,
    pub leave_type_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl Payload {
    pub fn validate(self) -> AppResult<NewLeave> {
        let mut required = Required::default();
        let fields = (
            required.take("EmpID", self.emp_id),
            required.take("LeaveTypeID", self.leave_type_id),
        );
        match fields {
            (Some(emp_id), Some(leave_type_id)) => Ok(NewLeave {
                emp_id,
                leave_type_id,
                start_date: self.start_date,
                end_date: self.end_date,
            }),
            _ => Err(required.into_error()),
        }
    }
}
