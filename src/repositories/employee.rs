//! Employee repository

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::db::Gateway;
use crate::entity::employee::{self, Entity as Employee, NewEmployee};
use crate::error::{AppError, AppResult, ConflictExt, OptionExt};

const NOT_FOUND: &str = "Employee not found";
const CONFLICT: &str = "Employee already exists";

#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    gateway: Gateway,
}

impl EmployeeRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<employee::Model>> {
        let db = self.gateway.conn()?;
        let employees = Employee::find()
            .order_by_asc(employee::Column::EmpId)
            .all(db)
            .await?;
        Ok(employees)
    }

    pub async fn get(&self, id: i32) -> AppResult<employee::Model> {
        let db = self.gateway.conn()?;
        Employee::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)
    }

    pub async fn create(&self, input: NewEmployee) -> AppResult<employee::Model> {
        let db = self.gateway.conn()?;
        let result = Employee::insert(input.clone().into_active_model())
            .exec(db)
            .await
            .or_conflict(CONFLICT)?;
        tracing::info!(emp_id = result.last_insert_id, "Employee created");
        Ok(input.into_model(result.last_insert_id))
    }

    pub async fn update(&self, id: i32, input: NewEmployee) -> AppResult<employee::Model> {
        self.get(id).await?;

        let db = self.gateway.conn()?;
        let mut update_model = input.into_active_model();
        update_model.emp_id = Set(id);
        let updated = update_model.update(db).await.or_conflict(CONFLICT)?;
        tracing::info!(emp_id = id, "Employee updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let db = self.gateway.conn()?;
        let result = Employee::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(emp_id = id, "Employee deleted");
        Ok(())
    }
}
