//! Output forest of the hierarchy builder.

use serde::Serialize;

use crate::domain::entities::{EmployeeId, EmployeeRecord};

/// One employee in the chart, with the less senior employees placed under it.
///
/// Borrows the record: the builder never copies or mutates its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationNode<'a> {
    pub employee: &'a EmployeeRecord,
    pub children: Vec<OrganizationNode<'a>>,
}

impl<'a> OrganizationNode<'a> {
    pub fn leaf(employee: &'a EmployeeRecord) -> Self {
        Self {
            employee,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(OrganizationNode::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(OrganizationNode::size).sum::<usize>()
    }

    /// Pre-order traversal, children left to right.
    pub fn iter(&self) -> NodeIter<'_, 'a> {
        NodeIter { stack: vec![self] }
    }
}

pub struct NodeIter<'n, 'a> {
    stack: Vec<&'n OrganizationNode<'a>>,
}

impl<'n, 'a> Iterator for NodeIter<'n, 'a> {
    type Item = &'n OrganizationNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        self.stack.extend(current.children.iter().rev());
        Some(current)
    }
}

/// Employee ids of the whole forest in pre-order.
pub fn forest_ids(roots: &[OrganizationNode<'_>]) -> Vec<EmployeeId> {
    roots
        .iter()
        .flat_map(OrganizationNode::iter)
        .map(|node| node.employee.id)
        .collect()
}

pub fn forest_size(roots: &[OrganizationNode<'_>]) -> usize {
    roots.iter().map(OrganizationNode::size).sum()
}

pub fn forest_depth(roots: &[OrganizationNode<'_>]) -> usize {
    roots.iter().map(OrganizationNode::depth).max().unwrap_or(0)
}
