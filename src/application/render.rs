//! Chart rendering: termtree text and JSON.

use itertools::Itertools;
use termtree::Tree;

use crate::application::services::OrgChart;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::DisplayConfig;
use crate::domain::{EmployeeRecord, OrganizationNode};

/// "First Last - Position (Role, level N) [Unit / Department]"
pub fn node_label(employee: &EmployeeRecord, display: &DisplayConfig) -> String {
    let mut parts = vec![employee.full_name()];

    if display.show_position {
        if let Some(position) = non_empty(employee.position.as_deref()) {
            parts.push(format!("- {position}"));
        }
    }

    let mut tags = Vec::new();
    if let Some(role) = non_empty(employee.role.as_deref()) {
        tags.push(role.to_string());
    }
    if display.show_level {
        if let Some(level) = employee.level {
            tags.push(format!("level {level}"));
        }
    }
    if !tags.is_empty() {
        parts.push(format!("({})", tags.iter().join(", ")));
    }

    if display.show_unit {
        parts.push(format!("[{}]", unit_label(employee)));
    }

    parts.join(" ")
}

fn unit_label(employee: &EmployeeRecord) -> String {
    let Some(unit) = &employee.unit else {
        return "no unit".to_string();
    };
    let unit_name = non_empty(unit.name.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| format!("unit #{}", unit.id));
    let department_name = unit
        .department
        .as_ref()
        .map(|d| {
            non_empty(d.name.as_deref())
                .map(str::to_string)
                .unwrap_or_else(|| format!("department #{}", d.id))
        })
        .unwrap_or_else(|| "no department".to_string());
    format!("{unit_name} / {department_name}")
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

pub trait OrgNodeConvert {
    fn to_tree_string(&self, display: &DisplayConfig) -> Tree<String>;
}

impl OrgNodeConvert for OrganizationNode<'_> {
    fn to_tree_string(&self, display: &DisplayConfig) -> Tree<String> {
        let leaves: Vec<_> = self
            .children
            .iter()
            .map(|c| c.to_tree_string(display))
            .collect();

        Tree::new(node_label(self.employee, display)).with_leaves(leaves)
    }
}

/// Render the chart as a text tree rooted at the chart title.
pub fn render_tree(chart: &OrgChart<'_>, display: &DisplayConfig) -> String {
    let leaves: Vec<_> = chart
        .roots
        .iter()
        .map(|root| root.to_tree_string(display))
        .collect();
    Tree::new(chart.title.clone())
        .with_leaves(leaves)
        .to_string()
}

pub fn render_json(chart: &OrgChart<'_>) -> ApplicationResult<String> {
    serde_json::to_string_pretty(chart).map_err(|e| ApplicationError::OperationFailed {
        context: "serialize chart".to_string(),
        source: Box::new(e),
    })
}
