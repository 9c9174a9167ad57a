//! Read-only data model consumed by the plotting helpers.
//!
//! Everything here is produced by an external model-construction process;
//! the plotting code only reads it and derives transient arrays.

mod frame;
mod grid;
mod points;
mod section;
mod solution;
mod topography;

use serde::{Deserialize, Serialize};

pub use frame::{ModelTransform, StructuralFrame};
pub use grid::{Axis, RegularGrid};
pub use points::{Orientation, Orientations, SurfacePoint, SurfacePoints};
pub use section::{Section, Sections, TOPOGRAPHY_SECTION_NAME};
pub use solution::{GeologicalMap, RawArraysSolution};
pub use topography::Topography;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("extent along {axis:?} is degenerate or non-finite ({lo}..{hi})")]
    InvalidExtent { axis: Axis, lo: f64, hi: f64 },
    #[error("resolution along {axis:?} is zero")]
    ZeroResolution { axis: Axis },
    #[error("section name {name:?} already exists")]
    DuplicateSection { name: String },
    #[error("section name {name:?} is reserved for topography projection")]
    ReservedSectionName { name: String },
    #[error("topography heights have length {got}, expected {expected} (columns x rows)")]
    TopographyShapeMismatch { expected: usize, got: usize },
}

/// The assembled geological model, as handed to the plotting entry points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoModel {
    pub surface_points: SurfacePoints,
    pub orientations: Orientations,
    pub grid: RegularGrid,
    pub sections: Sections,
    pub topography: Option<Topography>,
    pub structural_frame: StructuralFrame,
    pub transform: ModelTransform,
}

impl GeoModel {
    #[must_use]
    pub fn new(grid: RegularGrid) -> Self {
        Self {
            surface_points: SurfacePoints::default(),
            orientations: Orientations::default(),
            grid,
            sections: Sections::default(),
            topography: None,
            structural_frame: StructuralFrame::default(),
            transform: ModelTransform::default(),
        }
    }
}
