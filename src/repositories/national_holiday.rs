//! National holiday repository

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::db::Gateway;
use crate::entity::national_holiday::{self, Entity as NationalHoliday, NewHoliday};
use crate::error::{AppError, AppResult, ConflictExt, OptionExt};

const NOT_FOUND: &str = "National holiday not found";
const CONFLICT: &str = "National holiday already exists";

#[derive(Debug, Clone)]
pub struct NationalHolidayRepository {
    gateway: Gateway,
}

impl NationalHolidayRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<national_holiday::Model>> {
        let db = self.gateway.conn()?;
        let holidays = NationalHoliday::find()
            .order_by_asc(national_holiday::Column::HolidayId)
            .all(db)
            .await?;
        Ok(holidays)
    }

    pub async fn get(&self, id: i32) -> AppResult<national_holiday::Model> {
        let db = self.gateway.conn()?;
        NationalHoliday::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)
    }

    pub async fn create(&self, input: NewHoliday) -> AppResult<national_holiday::Model> {
        let db = self.gateway.conn()?;
        let new_holiday = national_holiday::ActiveModel {
            name: Set(input.name.clone()),
            date: Set(input.date),
            ..Default::default()
        };

        let result = NationalHoliday::insert(new_holiday)
            .exec(db)
            .await
            .or_conflict(CONFLICT)?;
        tracing::info!(holiday_id = result.last_insert_id, "National holiday created");

        Ok(national_holiday::Model {
            holiday_id: result.last_insert_id,
            name: input.name,
            date: input.date,
        })
    }

    pub async fn update(&self, id: i32, input: NewHoliday) -> AppResult<national_holiday::Model> {
        self.get(id).await?;

        let db = self.gateway.conn()?;
        let update_model = national_holiday::ActiveModel {
            holiday_id: Set(id),
            name: Set(input.name),
            date: Set(input.date),
        };
        let holiday = update_model.update(db).await.or_conflict(CONFLICT)?;
        tracing::info!(holiday_id = id, "National holiday updated");
        Ok(holiday)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let db = self.gateway.conn()?;
        let result = NationalHoliday::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(holiday_id = id, "National holiday deleted");
        Ok(())
    }
}
