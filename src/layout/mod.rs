//! Layout algorithms kept behind documented capability contracts:
//! hierarchical rectangle packing and planar boundary path emission.

pub mod geo;
pub mod treemap;

pub use geo::path_data;
pub use treemap::{TreemapTile, treemap_layout};
