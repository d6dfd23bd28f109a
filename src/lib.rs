//! orgtree: organization charts inferred from flat HR employee records.
//!
//! Employees are grouped per unit, ranked by seniority level and distributed
//! round-robin under the next more senior level. See [`domain::HierarchyBuilder`].

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{build_tree, EmployeeRecord, HierarchyBuilder, OrganizationNode};
