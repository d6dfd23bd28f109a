//! Hierarchy builder: infers an organization chart from unit membership and
//! seniority level.
//!
//! The data has no reports-to relation, so the hierarchy is approximated:
//!
//! 1. employees are bucketed per unit (first-seen order, unit-less employees share a bucket)
//! 2. each bucket is split into seniority levels, absent levels last
//! 3. each level is ordered by role using the configured collation
//! 4. the most senior level becomes the bucket's roots; every following level
//!    is distributed round-robin over the nodes of the level above it

use std::collections::{BTreeMap, HashMap};

use generational_arena::Index;
use tracing::{debug, trace, warn};

use crate::domain::arena::OrgArena;
use crate::domain::collation::RoleCollator;
use crate::domain::entities::{EmployeeRecord, LevelKey, UnitKey};
use crate::domain::node::OrganizationNode;

type LevelGroups<'a> = BTreeMap<LevelKey, Vec<&'a EmployeeRecord>>;

/// Builds the organization forest. Pure: no I/O, no shared state.
#[derive(Debug, Clone, Default)]
pub struct HierarchyBuilder {
    collator: RoleCollator,
}

impl HierarchyBuilder {
    pub fn new(collator: RoleCollator) -> Self {
        Self { collator }
    }

    pub fn collator(&self) -> &RoleCollator {
        &self.collator
    }

    /// Build the forest for an already filtered set of employees.
    ///
    /// Roots are returned bucket by bucket in first-seen unit order. Every
    /// input record appears exactly once in the result; an empty input
    /// yields an empty forest.
    pub fn build_tree<'a, I>(&self, employees: I) -> Vec<OrganizationNode<'a>>
    where
        I: IntoIterator<Item = &'a EmployeeRecord>,
    {
        let buckets = bucket_by_unit(employees);
        debug!("build_tree: {} unit buckets", buckets.len());

        let mut arena = OrgArena::new();
        let mut roots: Vec<Index> = Vec::new();

        for (unit, members) in buckets {
            let levels = self.group_by_level(members);
            trace!(?unit, levels = levels.len(), "building bucket");

            let mut previous: Option<Vec<Index>> = None;
            for (level, level_employees) in levels {
                let nodes: Vec<Index> = level_employees
                    .into_iter()
                    .map(|employee| arena.insert(employee))
                    .collect();

                match previous.as_deref() {
                    None => roots.extend_from_slice(&nodes),
                    Some([]) => {
                        warn!(?unit, ?level, dropped = nodes.len(), "no parent level, dropping employees");
                        continue;
                    }
                    Some(parents) => distribute_round_robin(&mut arena, parents, &nodes),
                }
                previous = Some(nodes);
            }
        }

        debug!("build_tree: {} nodes, {} roots", arena.len(), roots.len());
        arena.into_forest(&roots)
    }

    /// Split a bucket into seniority levels, most senior first, each level
    /// ordered by role. Ties keep input order.
    fn group_by_level<'a>(&self, members: Vec<&'a EmployeeRecord>) -> LevelGroups<'a> {
        let mut levels: LevelGroups<'a> = BTreeMap::new();
        for employee in members {
            levels.entry(employee.level_key()).or_default().push(employee);
        }
        for level_employees in levels.values_mut() {
            level_employees
                .sort_by_cached_key(|e| self.collator.sort_key(e.role.as_deref().unwrap_or_default()));
        }
        levels
    }
}

/// Build the forest with the default (Turkish) role collation.
pub fn build_tree(employees: &[EmployeeRecord]) -> Vec<OrganizationNode<'_>> {
    HierarchyBuilder::default().build_tree(employees)
}

/// Partition by unit, keeping the order in which units are first seen.
fn bucket_by_unit<'a, I>(employees: I) -> Vec<(UnitKey, Vec<&'a EmployeeRecord>)>
where
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    let mut positions: HashMap<UnitKey, usize> = HashMap::new();
    let mut buckets: Vec<(UnitKey, Vec<&'a EmployeeRecord>)> = Vec::new();
    for employee in employees {
        let key = employee.unit_key();
        let pos = *positions.entry(key).or_insert_with(|| {
            buckets.push((key, Vec::new()));
            buckets.len() - 1
        });
        buckets[pos].1.push(employee);
    }
    buckets
}

/// `children[i]` goes under `parents[i % parents.len()]`.
fn distribute_round_robin(arena: &mut OrgArena<'_>, parents: &[Index], children: &[Index]) {
    for (i, &child) in children.iter().enumerate() {
        arena.attach(parents[i % parents.len()], child);
    }
}
