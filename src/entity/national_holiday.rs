//! National holiday entity
//!
//! Table: national_holiday

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::validation::{self, Required};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "national_holiday")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub holiday_id: i32,

    #[sea_orm(column_type = "String(Some(100))")]
    pub name: String,

    pub date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Payload {
    #[serde(default, deserialize_with = "validation::non_blank")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "validation::date")]
    pub date: Option<NaiveDate>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHoliday {
    pub name: String,
    pub date: NaiveDate,
}

impl Payload {
    pub fn validate(self) -> AppResult<NewHoliday> {
        let mut required = Required::default();
        let fields = (
            required.take("Name", self.name),
            required.take("Date", self.date),
        );
        match fields {
            (Some(name), Some(date)) => Ok(NewHoliday { name, date }),
            _ => Err(required.into_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_validate() {
        let payload: Payload =
            serde_json::from_str(r#"{"name": "Republic Day", "date": "2025-01-26"}"#).unwrap();
        let holiday = payload.validate().unwrap();
        assert_eq!(holiday.date, NaiveDate::from_ymd_opt(2025, 1, 26).unwrap());

        match Payload::default().validate() {
            Err(AppError::Validation(msg)) => {
                assert_eq!(msg, "Invalid input: Name, Date are required fields")
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
