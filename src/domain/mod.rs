//! Domain layer: entities and the hierarchy algorithm
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod builder;
pub mod collation;
pub mod entities;
pub mod error;
pub mod filter;
pub mod node;
pub mod validation;

pub use arena::OrgArena;
pub use builder::{build_tree, HierarchyBuilder};
pub use collation::{CollationLocale, RoleCollator};
pub use entities::*;
pub use error::DomainError;
pub use filter::OrgFilter;
pub use node::{forest_depth, forest_ids, forest_size, OrganizationNode};
pub use validation::validate_directory;
