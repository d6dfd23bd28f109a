//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::entities::{DepartmentId, EmployeeId, UnitId};

/// Domain errors represent invalid organization data.
/// The hierarchy builder itself never fails; these come from validation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    #[error("duplicate employee id: {0}")]
    DuplicateEmployeeId(EmployeeId),

    #[error("duplicate unit id: {0}")]
    DuplicateUnitId(UnitId),

    #[error("duplicate department id: {0}")]
    DuplicateDepartmentId(DepartmentId),
}
