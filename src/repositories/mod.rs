//! Repository layer
//!
//! One repository per entity. Each holds a clone of the shared gateway and
//! translates between the entity types and SQL through SeaORM.

pub mod department;
pub mod employee;
pub mod hr;
pub mod leave;
pub mod leave_type;
pub mod national_holiday;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use hr::HrRepository;
pub use leave::LeaveRepository;
pub use leave_type::LeaveTypeRepository;
pub use national_holiday::NationalHolidayRepository;
