//! Core data model: component records, reference designators, groups.

mod component;
mod group;
pub mod refdes;

pub use component::ComponentRecord;
pub use group::{BomGroup, FieldCollision};
pub use refdes::RefDes;
