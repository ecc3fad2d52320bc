use std::sync::Arc;

use crate::config::Config;
use crate::db::Gateway;
use crate::repositories::{
    DepartmentRepository, EmployeeRepository, HrRepository, LeaveRepository, LeaveTypeRepository,
    NationalHolidayRepository,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence gateway (may be disconnected)
    pub gateway: Gateway,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Create new application state
    pub fn new(gateway: Gateway, config: Config) -> Self {
        Self {
            gateway,
            config: Arc::new(config),
        }
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.gateway.clone())
    }

    pub fn hrs(&self) -> HrRepository {
        HrRepository::new(self.gateway.clone())
    }

    pub fn departments(&self) -> DepartmentRepository {
        DepartmentRepository::new(self.gateway.clone())
    }

    pub fn holidays(&self) -> NationalHolidayRepository {
        NationalHolidayRepository::new(self.gateway.clone())
    }

    pub fn leave_types(&self) -> LeaveTypeRepository {
        LeaveTypeRepository::new(self.gateway.clone())
    }

    pub fn leaves(&self) -> LeaveRepository {
        LeaveRepository::new(self.gateway.clone())
    }
}
