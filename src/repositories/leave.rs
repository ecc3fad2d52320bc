//! Leave repository
//!
//! Leaves are only listed and created. The employee and leave type references
//! are stored as given; a single insert, no transaction.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::db::Gateway;
use crate::entity::leave::{self, Entity as Leave, NewLeave};
use crate::error::{AppResult, ConflictExt};

const CONFLICT: &str = "Leave already exists";

#[derive(Debug, Clone)]
pub struct LeaveRepository {
    gateway: Gateway,
}

impl LeaveRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<leave::Model>> {
        let db = self.gateway.conn()?;
        let leaves = Leave::find()
            .order_by_asc(leave::Column::LeaveId)
            .all(db)
            .await?;
        Ok(leaves)
    }

    /// Leaves recorded for one employee, possibly none
    pub async fn list_by_employee(&self, emp_id: i32) -> AppResult<Vec<leave::Model>> {
        let db = self.gateway.conn()?;
        let leaves = Leave::find()
            .filter(leave::Column::EmpId.eq(emp_id))
            .order_by_asc(leave::Column::LeaveId)
            .all(db)
            .await?;
        Ok(leaves)
    }

    pub async fn create(&self, input: NewLeave) -> AppResult<leave::Model> {
        let db = self.gateway.conn()?;
        let new_leave = leave::ActiveModel {
            emp_id: Set(input.emp_id),
            leave_type_id: Set(input.leave_type_id),
            start_date: Set(input.start_date),
            end_date: Set(input.end_date),
            ..Default::default()
        };

        let result = Leave::insert(new_leave).exec(db).await.or_conflict(CONFLICT)?;
        tracing::info!(
            leave_id = result.last_insert_id,
            emp_id = input.emp_id,
            "Leave created"
        );

        Ok(leave::Model {
            leave_id: result.last_insert_id,
            emp_id: input.emp_id,
            leave_type_id: input.leave_type_id,
            start_date: input.start_date,
            end_date: input.end_date,
        })
    }
}
