//! Employee entity
//!
//! Table: employee

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{self, Required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub emp_id: i32,

    #[sea_orm(column_type = "String(Some(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(Some(100))")]
    pub email: String,

    pub phone: i64,

    #[sea_orm(column_type = "String(Some(255))")]
    pub address: String,

    pub dob: Date,

    /// Owning department
    pub dept_id: Option<i32>,

    /// Reporting manager (another employee)
    pub manager_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// A department with employees cannot be deleted
    #[sea_orm(
        belongs_to = "super::department::Entity",
        from = "Column::DeptId",
        to = "super::department::Column::DeptId",
        on_delete = "Restrict"
    )]
    Department,
    /// Reporting line; reports lose their manager when the manager is deleted
    #[sea_orm(
        belongs_to = "Entity",
        from = "Column::ManagerId",
        to = "Column::EmpId",
        on_delete = "SetNull"
    )]
    Manager,
    #[sea_orm(has_one = "super::hr::Entity")]
    Hr,
    #[sea_orm(has_many = "super::leave::Entity")]
    Leave,
}

impl Related<super::department::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Department.def()
    }
}

impl Related<super::hr::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hr.def()
    }
}

impl Related<super::leave::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leave.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Employee request body
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default, deserialize_with = "validation::non_blank")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "validation::non_blank")]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<i64>,
    #[serde(default, deserialize_with = "validation::non_blank")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "validation::date")]
    pub dob: Option<NaiveDate>,
    #[serde(default)]
    pub dept_id: Option<i32>,
    #[serde(default)]
    pub manager_id: Option<i32>,
}

/// Validated employee fields
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: i64,
    pub address: String,
    pub dob: NaiveDate,
    pub dept_id: i32,
    pub manager_id: i32,
}

impl Payload {
    pub fn validate(self) -> AppResult<NewEmployee> {
        let mut required = Required::default();
        let fields = (
            required.take("Name", self.name),
            required.take("Email", self.email),
            required.take("Phone", self.phone.filter(|p| *p != 0)),
            required.take("Address", self.address),
            required.take("DOB", self.dob),
            required.take("DeptID", self.dept_id),
            required.take("ManagerID", self.manager_id),
        );

        match fields {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(address),
                Some(dob),
                Some(dept_id),
                Some(manager_id),
            ) => Ok(NewEmployee {
                name,
                email,
                phone,
                address,
                dob,
                dept_id,
                manager_id,
            }),
            _ => Err(required.into_error()),
        }
    }
}

impl NewEmployee {
    /// Active model with every column set except the generated key
    pub fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: Set(self.name),
            email: Set(self.email),
            phone: Set(self.phone),
            address: Set(self.address),
            dob: Set(self.dob),
            dept_id: Set(reference(self.dept_id)),
            manager_id: Set(reference(self.manager_id)),
            ..Default::default()
        }
    }

    pub fn into_model(self, emp_id: i32) -> Model {
        Model {
            emp_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            dob: self.dob,
            dept_id: reference(self.dept_id),
            manager_id: reference(self.manager_id),
        }
    }
}

/// `0` names no row: the employee has no department or reports to nobody
fn reference(id: i32) -> Option<i32> {
    (id != 0).then_some(id)
}
