//! Domain entities: core data structures

use std::fmt;

use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

pub type EmployeeId = i64;
pub type UnitId = i64;
pub type DepartmentId = i64;

/// Department as referenced from a unit or listed in the department catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRef {
    pub id: DepartmentId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Organizational unit. The department link is optional: backend payloads
/// are not guaranteed to embed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRef {
    pub id: UnitId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<DepartmentRef>,
}

impl UnitRef {
    pub fn department_id(&self) -> Option<DepartmentId> {
        self.department.as_ref().map(|d| d.id)
    }
}

/// Employee as delivered by the HR backend.
///
/// Only the fields the hierarchy needs are modelled; anything else in the
/// payload (salary, email, manager, ...) is ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub id: EmployeeId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    /// Free-form category label, only used for ordering within a level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Seniority rank, lower is more senior
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitRef>,
}

impl EmployeeRecord {
    /// Create a record with only an id; the remaining fields are filled via
    /// the `with_*` builders.
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            first_name: String::new(),
            last_name: String::new(),
            position: None,
            role: None,
            level: None,
            unit: None,
        }
    }

    pub fn with_name(mut self, first_name: &str, last_name: &str) -> Self {
        self.first_name = first_name.to_string();
        self.last_name = last_name.to_string();
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }

    pub fn with_level(mut self, level: i64) -> Self {
        self.level = Some(level);
        self
    }

    pub fn with_unit(mut self, unit: UnitRef) -> Self {
        self.unit = Some(unit);
        self
    }

    /// Display name, `#<id>` when the record carries no name at all.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let name = name.trim();
        if name.is_empty() {
            format!("#{}", self.id)
        } else {
            name.to_string()
        }
    }

    pub fn unit_key(&self) -> UnitKey {
        match &self.unit {
            Some(unit) => UnitKey::Unit(unit.id),
            None => UnitKey::NoUnit,
        }
    }

    pub fn level_key(&self) -> LevelKey {
        match self.level {
            Some(level) => LevelKey::Ranked(level),
            None => LevelKey::Unranked,
        }
    }

    pub fn unit_id(&self) -> Option<UnitId> {
        self.unit.as_ref().map(|u| u.id)
    }

    pub fn department_id(&self) -> Option<DepartmentId> {
        self.unit.as_ref().and_then(UnitRef::department_id)
    }
}

/// Bucket key: employees are grouped per unit, unit-less employees share one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitKey {
    Unit(UnitId),
    NoUnit,
}

/// Seniority key within a unit bucket.
///
/// Variant order matters: the derived `Ord` places every `Ranked` level,
/// whatever its value, before `Unranked`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LevelKey {
    Ranked(i64),
    Unranked,
}

/// Everything the data-fetch side delivers: employees plus the department
/// and unit catalogs used for filter population and titles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrgDirectory {
    pub employees: Vec<EmployeeRecord>,
    pub departments: Vec<DepartmentRef>,
    pub units: Vec<UnitRef>,
}

/// Object form of the export. Unknown top-level keys are rejected so that a
/// misspelled `employees` cannot pass as an empty organization.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DirectoryDocument {
    #[serde(default)]
    employees: Vec<EmployeeRecord>,
    #[serde(default)]
    departments: Vec<DepartmentRef>,
    #[serde(default)]
    units: Vec<UnitRef>,
}

struct DirectoryVisitor;

impl<'de> Visitor<'de> for DirectoryVisitor {
    type Value = OrgDirectory;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an object with employees/departments/units or an array of employees")
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let doc = DirectoryDocument::deserialize(MapAccessDeserializer::new(map))?;
        Ok(OrgDirectory {
            employees: doc.employees,
            departments: doc.departments,
            units: doc.units,
        })
    }

    fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let employees = Vec::<EmployeeRecord>::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(OrgDirectory::from_employees(employees))
    }
}

impl<'de> Deserialize<'de> for OrgDirectory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(DirectoryVisitor)
    }
}

impl OrgDirectory {
    pub fn from_employees(employees: Vec<EmployeeRecord>) -> Self {
        Self {
            employees,
            ..Self::default()
        }
    }

    /// Look up a unit, first in the catalog, then in embedded employee references.
    pub fn find_unit(&self, id: UnitId) -> Option<&UnitRef> {
        self.units.iter().find(|u| u.id == id).or_else(|| {
            self.employees
                .iter()
                .filter_map(|e| e.unit.as_ref())
                .find(|u| u.id == id)
        })
    }

    /// Look up a department in the catalog, then via units and employees.
    pub fn find_department(&self, id: DepartmentId) -> Option<&DepartmentRef> {
        self.departments.iter().find(|d| d.id == id).or_else(|| {
            self.units
                .iter()
                .chain(self.employees.iter().filter_map(|e| e.unit.as_ref()))
                .filter_map(|u| u.department.as_ref())
                .find(|d| d.id == id)
        })
    }
}
