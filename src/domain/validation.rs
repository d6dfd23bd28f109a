//! Input checks run by callers before building a chart.

use std::collections::HashSet;

use crate::domain::entities::OrgDirectory;
use crate::domain::error::DomainError;

/// Reject duplicate ids in the employee, unit and department collections.
pub fn validate_directory(directory: &OrgDirectory) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for employee in &directory.employees {
        if !seen.insert(employee.id) {
            return Err(DomainError::DuplicateEmployeeId(employee.id));
        }
    }

    let mut seen = HashSet::new();
    for unit in &directory.units {
        if !seen.insert(unit.id) {
            return Err(DomainError::DuplicateUnitId(unit.id));
        }
    }

    let mut seen = HashSet::new();
    for department in &directory.departments {
        if !seen.insert(department.id) {
            return Err(DomainError::DuplicateDepartmentId(department.id));
        }
    }

    Ok(())
}
