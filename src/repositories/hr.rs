//! HR repository
//!
//! An HR record is an `hr` row pointing at an `employee` row. Creating one
//! inserts both inside a single transaction so neither is ever visible alone.

use sea_orm::{
    ActiveModelTrait, DatabaseTransaction, DbErr, EntityTrait, QueryOrder, Set,
};

use crate::db::{Gateway, StorageError};
use crate::entity::employee::{self, Entity as Employee, NewEmployee};
use crate::entity::hr::{self, Entity as Hr, HrRecord};
use crate::error::{AppError, AppResult, ConflictExt, OptionExt};

const NOT_FOUND: &str = "HR not found";
const CONFLICT: &str = "HR record already exists";
const EMPLOYEE_CONFLICT: &str = "Employee already exists";

#[derive(Debug, Clone)]
pub struct HrRepository {
    gateway: Gateway,
}

impl HrRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<HrRecord>> {
        let db = self.gateway.conn()?;
        let rows = Hr::find()
            .find_also_related(Employee)
            .order_by_asc(hr::Column::HrId)
            .all(db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(hr, employee)| employee.map(|e| HrRecord::new(hr.hr_id, e)))
            .collect())
    }

    pub async fn get(&self, hr_id: i32) -> AppResult<HrRecord> {
        let db = self.gateway.conn()?;
        Hr::find_by_id(hr_id)
            .find_also_related(Employee)
            .one(db)
            .await?
            .and_then(|(hr, employee)| employee.map(|e| HrRecord::new(hr.hr_id, e)))
            .ok_or_not_found(NOT_FOUND)
    }

    /// Insert the employee row, then the HR row, and commit both together
    pub async fn create(&self, input: NewEmployee) -> AppResult<HrRecord> {
        let txn = match self.gateway.begin().await {
            Ok(txn) => txn,
            Err(StorageError::Unavailable) => return Err(AppError::NoConnection),
            Err(err) => {
                return Err(AppError::Transaction(format!(
                    "Failed to start transaction: {}",
                    err
                )))
            }
        };

        let employee = match Employee::insert(input.clone().into_active_model())
            .exec(&txn)
            .await
        {
            Ok(result) => input.into_model(result.last_insert_id),
            Err(err) => return Err(abort(txn, err, EMPLOYEE_CONFLICT).await),
        };

        let hr_row = hr::ActiveModel {
            emp_id: Set(employee.emp_id),
            ..Default::default()
        };
        let hr_id = match Hr::insert(hr_row).exec(&txn).await {
            Ok(result) => result.last_insert_id,
            Err(err) => return Err(abort(txn, err, CONFLICT).await),
        };

        txn.commit().await.map_err(|err| {
            AppError::Transaction(format!("Failed to commit transaction: {}", err))
        })?;

        tracing::info!(hr_id, emp_id = employee.emp_id, "HR record created");
        Ok(HrRecord::new(hr_id, employee))
    }

    /// Replace the employee fields behind an HR record
    pub async fn update(&self, hr_id: i32, input: NewEmployee) -> AppResult<HrRecord> {
        let db = self.gateway.conn()?;
        let hr = Hr::find_by_id(hr_id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)?;

        let mut update_model = input.into_active_model();
        update_model.emp_id = Set(hr.emp_id);
        let employee: employee::Model = update_model
            .update(db)
            .await
            .or_conflict(EMPLOYEE_CONFLICT)?;

        tracing::info!(hr_id, emp_id = hr.emp_id, "HR record updated");
        Ok(HrRecord::new(hr.hr_id, employee))
    }

    /// Remove the HR designation; the employee row stays
    pub async fn delete(&self, hr_id: i32) -> AppResult<()> {
        let db = self.gateway.conn()?;
        let result = Hr::delete_by_id(hr_id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(hr_id, "HR record deleted");
        Ok(())
    }
}

/// Roll back after a failed insert and classify the insert error
async fn abort(txn: DatabaseTransaction, err: DbErr, conflict: &str) -> AppError {
    if let Err(rollback_err) = txn.rollback().await {
        tracing::warn!("Rollback failed: {}", rollback_err);
    }
    AppError::storage(err, conflict)
}
