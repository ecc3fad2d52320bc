//! Department repository

use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set};

use crate::db::Gateway;
use crate::entity::department::{self, Entity as Department, NewDepartment};
use crate::error::{AppError, AppResult, ConflictExt, OptionExt};

const NOT_FOUND: &str = "Department not found";
const CONFLICT: &str = "Department name already exists";

#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    gateway: Gateway,
}

impl DepartmentRepository {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    pub async fn list(&self) -> AppResult<Vec<department::Model>> {
        let db = self.gateway.conn()?;
        let departments = Department::find()
            .order_by_asc(department::Column::DeptId)
            .all(db)
            .await?;
        Ok(departments)
    }

    pub async fn get(&self, id: i32) -> AppResult<department::Model> {
        let db = self.gateway.conn()?;
        Department::find_by_id(id)
            .one(db)
            .await?
            .ok_or_not_found(NOT_FOUND)
    }

    pub async fn create(&self, input: NewDepartment) -> AppResult<department::Model> {
        let db = self.gateway.conn()?;
        let new_dept = department::ActiveModel {
            dept_name: Set(input.dept_name.clone()),
            ..Default::default()
        };

        let result = Department::insert(new_dept).exec(db).await.or_conflict(CONFLICT)?;
        tracing::info!(dept_id = result.last_insert_id, "Department created");

        Ok(department::Model {
            dept_id: result.last_insert_id,
            dept_name: input.dept_name,
        })
    }

    pub async fn update(&self, id: i32, input: NewDepartment) -> AppResult<department::Model> {
        self.get(id).await?;

        let db = self.gateway.conn()?;
        let update_model = department::ActiveModel {
            dept_id: Set(id),
            dept_name: Set(input.dept_name),
        };
        let dept = update_model.update(db).await.or_conflict(CONFLICT)?;
        tracing::info!(dept_id = id, "Department updated");
        Ok(dept)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let db = self.gateway.conn()?;
        let result = Department::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(NOT_FOUND.to_string()));
        }
        tracing::info!(dept_id = id, "Department deleted");
        Ok(())
    }
}
