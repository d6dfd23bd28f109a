//! Tests for OrgChartService

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use rstest::rstest;
use tempfile::TempDir;

use orgtree::application::services::OrgChartService;
use orgtree::application::ApplicationError;
use orgtree::domain::{forest_ids, DomainError, OrgFilter, OrganizationNode, RoleCollator};
use orgtree::infrastructure::traits::{FileSystem, RealFileSystem};
use orgtree::util::testing::{init_test_setup, resource_path};

fn fixture() -> PathBuf {
    resource_path("organization.json")
}

fn service() -> OrgChartService {
    OrgChartService::new(Arc::new(RealFileSystem), RoleCollator::new("tr"))
}

fn write_data(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("data.json");
    std::fs::write(&path, content).expect("write data file");
    path
}

/// Files held in memory, keyed by path.
#[derive(Default)]
struct MemoryFileSystem {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    fn with_file(path: &str, content: &str) -> Self {
        let fs = Self::default();
        fs.write(Path::new(path), content).unwrap();
        fs
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

fn root_ids(roots: &[OrganizationNode<'_>]) -> Vec<i64> {
    roots.iter().map(|n| n.employee.id).collect()
}

// ============================================================
// load()
// ============================================================

#[test]
fn given_full_document_when_loading_then_reads_all_catalogs() {
    init_test_setup();
    let directory = service().load(&fixture()).unwrap();

    assert_eq!(directory.employees.len(), 7);
    assert_eq!(directory.units.len(), 3);
    assert_eq!(directory.departments.len(), 2);
    assert_eq!(directory.employees[0].first_name, "Ayşe");
    assert_eq!(directory.employees[6].unit, None);
}

#[test]
fn given_bare_employee_array_when_loading_then_catalogs_are_empty() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_data(
        &temp,
        r#"[
            {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "level": 1},
            {"id": 2, "firstName": "Can", "lastName": "Demir", "level": 2}
        ]"#,
    );

    // Act
    let directory = service().load(&path).unwrap();

    // Assert
    assert_eq!(directory.employees.len(), 2);
    assert!(directory.units.is_empty());
    assert!(directory.departments.is_empty());
}

#[test]
fn given_in_memory_filesystem_when_loading_then_reads_through_trait() {
    let fs = MemoryFileSystem::with_file(
        "/hr/export.json",
        r#"{"employees": [{"id": 1, "level": 1}], "units": [{"id": 10, "name": "Payroll"}]}"#,
    );
    let service = OrgChartService::new(Arc::new(fs), RoleCollator::default());

    let directory = service.load(Path::new("/hr/export.json")).unwrap();

    assert_eq!(directory.employees.len(), 1);
    assert_eq!(directory.units[0].name.as_deref(), Some("Payroll"));
}

#[test]
fn given_duplicate_employee_id_when_loading_then_returns_domain_error() {
    let temp = TempDir::new().unwrap();
    let path = write_data(&temp, r#"[{"id": 4}, {"id": 4}]"#);

    let result = service().load(&path);

    match result {
        Err(ApplicationError::Domain(DomainError::DuplicateEmployeeId(id))) => assert_eq!(id, 4),
        other => panic!("expected duplicate id error, got {other:?}"),
    }
}

#[test]
fn given_missing_file_when_loading_then_returns_data_file_missing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("missing.json");

    let result = service().load(&path);

    match result {
        Err(ApplicationError::DataFileMissing { path: missing }) => assert_eq!(missing, path),
        other => panic!("expected missing data file, got {other:?}"),
    }
}

#[test]
fn given_malformed_json_when_loading_then_names_the_file_and_position() {
    let temp = TempDir::new().unwrap();
    let path = write_data(&temp, "{ not json");

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::DataParse { .. }), "got: {err:?}");
    let message = err.to_string();
    assert!(message.contains("data.json"), "got: {message}");
    assert!(message.contains("line 1"), "got: {message}");
}

#[test]
fn given_misspelled_top_level_key_when_loading_then_rejects_file() {
    let temp = TempDir::new().unwrap();
    let path = write_data(&temp, r#"{"employes": [{"id": 1, "level": 1}]}"#);

    let err = service().load(&path).unwrap_err();

    assert!(matches!(err, ApplicationError::DataParse { .. }), "got: {err:?}");
    assert!(err.to_string().contains("unknown field `employes`"), "got: {err}");
}

#[test]
fn given_employee_without_id_when_loading_then_reports_missing_field_and_line() {
    let temp = TempDir::new().unwrap();
    let path = write_data(
        &temp,
        "{\n  \"employees\": [\n    {\"id\": 1},\n    {\"firstName\": \"Can\"}\n  ]\n}",
    );

    let err = service().load(&path).unwrap_err();

    let message = err.to_string();
    assert!(message.contains("missing field `id`"), "got: {message}");
    assert!(message.contains("line 4"), "got: {message}");
}

// ============================================================
// chart()
// ============================================================

#[test]
fn given_whole_organization_when_charting_then_builds_every_bucket() {
    let directory = service().load(&fixture()).unwrap();

    let chart = service().chart(&directory, &OrgFilter::All);

    assert_eq!(chart.title, "Entire organization");
    assert_eq!(chart.employee_count, 7);
    assert_eq!(root_ids(&chart.roots), vec![1, 4, 5, 7]);
    // Turkish collation: "Analist" before "Uzman"
    assert_eq!(root_ids(&chart.roots[0].children), vec![3, 2]);
    // unleveled engineer hangs under the CTO
    assert_eq!(root_ids(&chart.roots[2].children), vec![6]);
}

#[rstest]
#[case::department(OrgFilter::Department(1), "Finance", vec![1, 2, 3, 4])]
#[case::unit(OrgFilter::Unit(20), "Platform", vec![5, 6])]
#[case::unknown_department(OrgFilter::Department(99), "department #99", vec![])]
#[case::unknown_unit(OrgFilter::Unit(42), "unit #42", vec![])]
fn given_filter_when_charting_then_scopes_and_titles_chart(
    #[case] filter: OrgFilter,
    #[case] title: &str,
    #[case] expected_ids: Vec<i64>,
) {
    let directory = service().load(&fixture()).unwrap();

    let chart = service().chart(&directory, &filter);

    let mut ids = forest_ids(&chart.roots);
    ids.sort();
    assert_eq!(chart.title, title);
    assert_eq!(ids, expected_ids);
    assert_eq!(chart.is_empty(), expected_ids.is_empty());
}

#[test]
fn given_unit_and_department_when_filtering_then_unit_wins() {
    let directory = service().load(&fixture()).unwrap();

    let chart = service().chart(&directory, &OrgFilter::new(Some(2), Some(11)));

    assert_eq!(chart.title, "Tax");
    assert_eq!(forest_ids(&chart.roots), vec![4]);
}

#[test]
fn given_same_directory_when_charting_twice_then_results_match() {
    let directory = service().load(&fixture()).unwrap();

    let first = service().chart(&directory, &OrgFilter::All);
    let second = service().chart(&directory, &OrgFilter::All);

    assert_eq!(first, second);
}

// ============================================================
// units()
// ============================================================

#[rstest]
#[case::all(OrgFilter::All, vec![10, 11, 20])]
#[case::department(OrgFilter::Department(1), vec![10, 11])]
#[case::unit(OrgFilter::Unit(20), vec![20])]
fn given_filter_when_listing_units_then_returns_units_in_scope(
    #[case] filter: OrgFilter,
    #[case] expected: Vec<i64>,
) {
    let directory = service().load(&fixture()).unwrap();

    let units = service().units(&directory, &filter);

    assert_eq!(units.iter().map(|u| u.id).collect::<Vec<_>>(), expected);
}
