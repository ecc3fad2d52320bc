//! Leave type repository

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::db::Gateway;
use crate::entity::leave_type::{self, Entity as LeaveType, NewLeaveType};
use crate::error::{AppError, AppResult, ConflictExt, OptionExt};

const NOT_FOUND: &str = "Leave type not found";
const CONFLICT: &str = "Leave type already exists";

#[derive(Debug, Clone)]
pub struct LeaveTypeRepository {
    gateway: Gateway,
}

impl LeaveTypeRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<leave_type::Model>> {
        let db = self.gateway.conn()?;
        let leave_types = LeaveType::find()
            .order_by_asc(leave_type::Column::LeaveTypeId)
            .all(db)
            .await?;
        Ok(leave_types)
    }

    pub async fn get(&self, id: i32) -> AppResult<leave_type::Model> {
        let db = self.gateway.conn()?;
        LeaveType::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)
    }

    pub async fn create(&self, input: NewLeaveType) -> AppResult<leave_type::Model> {
        let db = self.gateway.conn()?;
        let new_type = leave_type::ActiveModel {
            name: Set(input.name.clone()),
            ..Default::default()
        };

        let result = LeaveType::insert(new_type).exec(db).await.or_conflict(CONFLICT)?;
        tracing::info!(leave_type_id = result.last_insert_id, "Leave type created");

        Ok(leave_type::Model {
            leave_type_id: result.last_insert_id,
            name: input.name,
        })
    }

    pub async fn update(&self, id: i32, input: NewLeaveType) -> AppResult<leave_type::Model> {
        self.get(id).await?;

        let db = self.gateway.conn()?;
        let update_model = leave_type::ActiveModel {
            leave_type_id: Set(id),
            name: Set(input.name),
        };
        let leave_type = update_model.update(db).await.or_conflict(CONFLICT)?;
        tracing::info!(leave_type_id = id, "Leave type updated");
        Ok(leave_type)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let db = self.gateway.conn()?;
        let result = LeaveType::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(leave_type_id = id, "Leave type deleted");
        Ok(())
    }
}
