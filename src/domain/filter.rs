//! Department/unit scoping applied before the hierarchy is built.

use crate::domain::entities::{DepartmentId, EmployeeRecord, OrgDirectory, UnitId, UnitRef};

pub const ALL_TITLE: &str = "Entire organization";

/// Which part of the organization the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrgFilter {
    #[default]
    All,
    Department(DepartmentId),
    Unit(UnitId),
}

impl OrgFilter {
    /// A unit selection wins over a department selection.
    pub fn new(department: Option<DepartmentId>, unit: Option<UnitId>) -> Self {
        match (department, unit) {
            (_, Some(unit)) => Self::Unit(unit),
            (Some(department), None) => Self::Department(department),
            (None, None) => Self::All,
        }
    }

    /// Missing unit or department references never match a scoped filter.
    pub fn matches(&self, employee: &EmployeeRecord) -> bool {
        match self {
            Self::All => true,
            Self::Unit(unit) => employee.unit_id() == Some(*unit),
            Self::Department(department) => employee.department_id() == Some(*department),
        }
    }

    pub fn apply<'a>(&self, employees: &'a [EmployeeRecord]) -> Vec<&'a EmployeeRecord> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }

    /// Units offered for selection under this filter.
    pub fn units_in_scope<'a>(&self, units: &'a [UnitRef]) -> Vec<&'a UnitRef> {
        units
            .iter()
            .filter(|u| match self {
                Self::All => true,
                Self::Department(department) => u.department_id() == Some(*department),
                Self::Unit(unit) => u.id == *unit,
            })
            .collect()
    }

    pub fn title(&self, directory: &OrgDirectory) -> String {
        match self {
            Self::All => ALL_TITLE.to_string(),
            Self::Unit(id) => directory
                .find_unit(*id)
                .and_then(|u| u.name.clone())
                .unwrap_or_else(|| format!("unit #{id}")),
            Self::Department(id) => directory
                .find_department(*id)
                .and_then(|d| d.name.clone())
                .unwrap_or_else(|| format!("department #{id}")),
        }
    }
}
