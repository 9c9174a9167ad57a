mod contour;
mod core;
mod mesh;
mod triangulation;

pub use contour::{ContourSet, evenly_spaced_levels};
pub use core::{Point3, Vec2, Vec3};
pub use mesh::{LineSet, TriangleMesh};
pub use triangulation::triangulate_grid;
