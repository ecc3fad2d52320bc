//! Department entity
//!
//! Table: department. Response keys are `dept_id` and `Dept_Name`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{self, Required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "department")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub dept_id: i32,

    /// Department name (unique)
    #[sea_orm(column_type = "String(Some(100))", unique)]
    #[serde(rename = "Dept_Name")]
    pub dept_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::employee::Entity")]
    Employee,
}

impl Related<super::employee::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Employee.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Department request body; `name` is accepted as an alias
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(
        default,
        rename = "Dept_Name",
        alias = "name",
        deserialize_with = "validation::non_blank"
    )]
    pub dept_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewDepartment {
    pub dept_name: String,
}

impl Payload {
    pub fn validate(self) -> AppResult<NewDepartment> {
        let mut required = Required::default();
        match required.take("Department name", self.dept_name) {
            Some(dept_name) => Ok(NewDepartment { dept_name }),
            None => Err(required.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_name_alias() {
        let a: Payload = serde_json::from_str(r#"{"name": "Engineering"}"#).unwrap();
        let b: Payload = serde_json::from_str(r#"{"dept_id": 1, "Dept_Name": "Engineering"}"#).unwrap();
        assert_eq!(a.validate().unwrap(), b.validate().unwrap());
    }

    #[test]
    fn test_missing_name() {
        let payload: Payload = serde_json::from_str(r#"{"dept_id": 0, "Dept_Name": ""}"#).unwrap();
        match payload.validate() {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Invalid input: Department name is required")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_response_keys() {
        let model = Model {
            dept_id: 1,
            dept_name: "Engineering".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&model).unwrap(),
            serde_json::json!({"dept_id": 1, "Dept_Name": "Engineering"})
        );
    }
}
