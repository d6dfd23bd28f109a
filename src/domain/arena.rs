use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::entities::EmployeeRecord;
use crate::domain::node::OrganizationNode;

/// Node while the hierarchy is under construction.
#[derive(Debug)]
pub struct ArenaNode<'a> {
    pub employee: &'a EmployeeRecord,
    /// Index of parent node in the arena, None for root nodes
    pub parent: Option<Index>,
    /// Indices of child nodes in the arena, in attach order
    pub children: Vec<Index>,
}

/// Arena-based scratch tree for the hierarchy builder.
///
/// Parents of level N+1 are the nodes of level N, which are already attached
/// below level N-1; indices keep all of them addressable until the forest is
/// materialized.
#[derive(Debug)]
pub struct OrgArena<'a> {
    arena: Arena<ArenaNode<'a>>,
}

impl Default for OrgArena<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> OrgArena<'a> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn insert(&mut self, employee: &'a EmployeeRecord) -> Index {
        self.arena.insert(ArenaNode {
            employee,
            parent: None,
            children: Vec::new(),
        })
    }

    /// Append `child` to the children of `parent`. Unknown indices are ignored.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, parent: Index, child: Index) {
        if !self.arena.contains(child) {
            return;
        }
        let Some(parent_node) = self.arena.get_mut(parent) else {
            return;
        };
        parent_node.children.push(child);
        if let Some(child_node) = self.arena.get_mut(child) {
            child_node.parent = Some(parent);
        }
    }

    pub fn node(&self, idx: Index) -> Option<&ArenaNode<'a>> {
        self.arena.get(idx)
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Move the subtrees below `roots` out of the arena.
    pub fn into_forest(mut self, roots: &[Index]) -> Vec<OrganizationNode<'a>> {
        roots
            .iter()
            .filter_map(|&root| self.take_subtree(root))
            .collect()
    }

    fn take_subtree(&mut self, idx: Index) -> Option<OrganizationNode<'a>> {
        let node = self.arena.remove(idx)?;
        let children = node
            .children
            .iter()
            .filter_map(|&child| self.take_subtree(child))
            .collect();
        Some(OrganizationNode {
            employee: node.employee,
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_attached_nodes_when_materializing_then_keeps_attach_order() {
        let records: Vec<_> = (1..=4).map(EmployeeRecord::new).collect();
        let mut arena = OrgArena::new();
        let root = arena.insert(&records[0]);
        let a = arena.insert(&records[1]);
        let b = arena.insert(&records[2]);
        let c = arena.insert(&records[3]);
        arena.attach(root, b);
        arena.attach(root, a);
        arena.attach(a, c);

        assert_eq!(arena.len(), 4);
        assert_eq!(arena.node(c).unwrap().parent, Some(a));

        let forest = arena.into_forest(&[root]);
        assert_eq!(forest.len(), 1);
        let child_ids: Vec<_> = forest[0].children.iter().map(|n| n.employee.id).collect();
        assert_eq!(child_ids, vec![3, 2]);
        assert_eq!(forest[0].children[1].children[0].employee.id, 4);
    }

    #[test]
    fn given_foreign_parent_index_when_attaching_then_child_stays_unattached() {
        let records: Vec<_> = (1..=2).map(EmployeeRecord::new).collect();
        let mut arena = OrgArena::new();
        let child = arena.insert(&records[1]);
        // valid index in another arena, vacant slot in this one
        let stale = {
            let mut other = OrgArena::new();
            other.insert(&records[0]);
            other.insert(&records[0])
        };
        arena.attach(stale, child);

        assert_eq!(arena.node(child).unwrap().parent, None);
    }
}
