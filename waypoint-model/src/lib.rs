//! Coordinate identity and definition contracts for Waypoint.
//!
//! This crate defines what it means to *describe* a registered instance,
//! without any registry or backend machinery:
//! - [`Coordinate`] — immutable identity: an ordered [`TypeHierarchy`] of
//!   1–6 type names plus an unordered set of scope labels
//! - [`ItemHooks`] / [`ItemValidators`] — lifecycle contracts bracketing
//!   mutations, every slot defaulted to a pass-through
//! - [`Definition`] — a coordinate bound to its hooks, validators, and
//!   named finder/action/facet maps
//!
//! These types are consumed by `waypoint-registry`, which wires them around
//! concrete CRUD backends.

mod coordinate;
mod definition;
mod error;
mod hooks;

pub use coordinate::{Coordinate, TypeHierarchy, MAX_HIERARCHY_DEPTH};
pub use definition::{ActionFn, AllFacetFn, Definition, FacetFn, FinderFn};
pub use error::CoordinateError;
pub use hooks::{AcceptAll, ItemHooks, ItemValidators, NoopHooks};
