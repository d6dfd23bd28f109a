//! Organization chart service
//!
//! Loads the HR export, scopes it with a department/unit filter and builds the
//! chart. Every call builds a fresh forest; nothing is cached between calls.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, PathContextExt};
use crate::domain::{
    forest_size, validate_directory, HierarchyBuilder, OrgDirectory, OrgFilter, OrganizationNode,
    RoleCollator, UnitRef,
};
use crate::infrastructure::traits::FileSystem;

/// A built chart, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrgChart<'a> {
    pub title: String,
    pub employee_count: usize,
    pub roots: Vec<OrganizationNode<'a>>,
}

impl OrgChart<'_> {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}

/// Service for loading organization data and building charts.
pub struct OrgChartService {
    fs: Arc<dyn FileSystem>,
    builder: HierarchyBuilder,
}

impl OrgChartService {
    pub fn new(fs: Arc<dyn FileSystem>, collator: RoleCollator) -> Self {
        Self {
            fs,
            builder: HierarchyBuilder::new(collator),
        }
    }

    /// Read, parse and validate a JSON export.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<OrgDirectory> {
        if !self.fs.exists(path) {
            return Err(ApplicationError::DataFileMissing {
                path: path.to_path_buf(),
            });
        }

        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read data file", path)?;
        let directory: OrgDirectory =
            serde_json::from_str(&content).map_err(|source| ApplicationError::DataParse {
                path: path.to_path_buf(),
                source,
            })?;
        validate_directory(&directory)?;

        debug!(
            "load: {} employees, {} units, {} departments",
            directory.employees.len(),
            directory.units.len(),
            directory.departments.len()
        );
        Ok(directory)
    }

    /// Scope the directory with `filter` and build the chart.
    #[instrument(level = "debug", skip(self, directory))]
    pub fn chart<'a>(&self, directory: &'a OrgDirectory, filter: &OrgFilter) -> OrgChart<'a> {
        let scoped = filter.apply(&directory.employees);
        let roots = self.builder.build_tree(scoped);
        let chart = OrgChart {
            title: filter.title(directory),
            employee_count: forest_size(&roots),
            roots,
        };
        debug!("chart: '{}' with {} employees", chart.title, chart.employee_count);
        chart
    }

    /// Units available for selection under `filter`.
    pub fn units<'a>(&self, directory: &'a OrgDirectory, filter: &OrgFilter) -> Vec<&'a UnitRef> {
        filter.units_in_scope(&directory.units)
    }
}
