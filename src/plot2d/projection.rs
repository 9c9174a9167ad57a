use log::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::geom::{Point3, Vec2};
use crate::model::{Axis, GeoModel, Section, TOPOGRAPHY_SECTION_NAME, Topography};

/// Vertex budget for the decimated topography surface. The flat vertex
/// list is strided so at most roughly this many vertices enter the
/// pairwise-distance reduction.
pub const TOPOGRAPHY_COMPRESSION: usize = 5000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    #[error("direction must be x, y or z, got {got:?}")]
    InvalidDirection { got: String },
    #[error("no section named {name:?}")]
    UnknownSection { name: String },
    #[error("section {name:?} has degenerate length {dist}")]
    DegenerateSection { name: String, dist: f64 },
    #[error("topography projection requested but the model has no topography")]
    MissingTopography,
}

/// Cell index along the sliced axis; `Mid` resolves to the middle cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellIndex {
    #[default]
    Mid,
    At(usize),
}

/// The active 2D view, resolved from caller-supplied parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionView {
    /// Slice of the regular grid perpendicular to a principal axis.
    Slice { direction: Axis, cell: CellIndex },
    /// Named vertical cross-section.
    Section { name: String },
    /// Projection onto the topography surface.
    Topography,
}

impl SectionView {
    /// Resolve the view the way the 2D drawer does: a section name wins
    /// over slice parameters, the name `"topography"` selects the
    /// topography mode, and no parameters at all mean the middle y-slice.
    pub fn resolve(
        section_name: Option<&str>,
        cell_number: Option<CellIndex>,
        direction: &str,
    ) -> Result<Self, ProjectionError> {
        match section_name {
            Some(TOPOGRAPHY_SECTION_NAME) => Ok(Self::Topography),
            Some(name) => Ok(Self::Section {
                name: name.to_owned(),
            }),
            None => {
                let direction = Axis::parse(direction).ok_or_else(|| {
                    ProjectionError::InvalidDirection {
                        got: direction.to_owned(),
                    }
                })?;
                Ok(Self::Slice {
                    direction,
                    cell: cell_number.unwrap_or_default(),
                })
            }
        }
    }
}

/// Which record fields the drawer reads as the display x, y and gradient
/// components for the current view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordField {
    X,
    Y,
    Z,
    /// Distance along the section line; values live in [`AlongSection`],
    /// not in the input records.
    AlongSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradientField {
    Gx,
    Gy,
    Gz,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayAxes {
    pub x: CoordField,
    pub y: CoordField,
    pub gx: GradientField,
    pub gy: GradientField,
}

impl DisplayAxes {
    /// Display axes for a regular-grid slice: the two axes orthogonal to
    /// the slicing direction.
    #[must_use]
    pub fn for_slice(direction: Axis) -> Self {
        match direction {
            Axis::X => Self {
                x: CoordField::Y,
                y: CoordField::Z,
                gx: GradientField::Gy,
                gy: GradientField::Gz,
            },
            Axis::Y => Self {
                x: CoordField::X,
                y: CoordField::Z,
                gx: GradientField::Gx,
                gy: GradientField::Gz,
            },
            Axis::Z => Self {
                x: CoordField::X,
                y: CoordField::Y,
                gx: GradientField::Gx,
                gy: GradientField::Gy,
            },
        }
    }

    #[must_use]
    pub fn for_section() -> Self {
        Self {
            x: CoordField::AlongSection,
            y: CoordField::Z,
            gx: GradientField::Gx,
            gy: GradientField::Gz,
        }
    }

    #[must_use]
    pub fn for_topography() -> Self {
        Self {
            x: CoordField::X,
            y: CoordField::Y,
            gx: GradientField::Gx,
            gy: GradientField::Gy,
        }
    }
}

/// Per-record proximity to the active view. The tag keeps the three
/// modes' numeric semantics apart: slice offsets are signed, section
/// distances are magnitudes, topography is already a mask.
#[derive(Debug, Clone, PartialEq)]
pub enum Proximity {
    /// Signed offset from the slicing plane (can be negative).
    SignedOffset(Vec<f64>),
    /// Non-negative perpendicular distance to the section line.
    Distance(Vec<f64>),
    /// Whether any decimated topography vertex is within the threshold.
    Within(Vec<bool>),
}

impl Proximity {
    /// Selection mask against a threshold.
    ///
    /// Signed offsets compare `value < threshold` without taking the
    /// magnitude, so every point on the far negative side passes too.
    /// That is the behavior the drawers have always had; see DESIGN.md
    /// before changing it.
    #[must_use]
    pub fn select(&self, threshold: f64) -> Vec<bool> {
        match self {
            Self::SignedOffset(values) | Self::Distance(values) => {
                values.iter().map(|&v| v < threshold).collect()
            }
            Self::Within(mask) => mask.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::SignedOffset(values) | Self::Distance(values) => values.len(),
            Self::Within(mask) => mask.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Along-section display coordinates for points and orientations.
///
/// Returned as fresh arrays; the input records are left untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlongSection {
    pub points: Vec<f64>,
    pub orientations: Vec<f64>,
}

/// Everything the 2D drawer needs from the projection selector.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionParams {
    pub points: Proximity,
    pub orientations: Proximity,
    pub axes: DisplayAxes,
    /// Present only for the cross-section mode.
    pub along_section: Option<AlongSection>,
}

/// Compute, for every surface point and orientation, how close it is to
/// the active 2D view, plus the display axes for the subsequent draw.
pub fn project_input(
    model: &GeoModel,
    view: &SectionView,
    projection_distance: f64,
) -> Result<ProjectionParams, ProjectionError> {
    match view {
        SectionView::Slice { direction, cell } => project_slice(model, *direction, *cell),
        SectionView::Section { name } => project_section(model, name),
        SectionView::Topography => project_topography(model, projection_distance),
    }
}

fn project_slice(
    model: &GeoModel,
    direction: Axis,
    cell: CellIndex,
) -> Result<ProjectionParams, ProjectionError> {
    let cell_number = match cell {
        CellIndex::Mid => model.grid.mid_cell(direction),
        CellIndex::At(n) => n,
    };
    let offset = model.grid.plane_offset(direction, cell_number);
    debug!("slice view along {direction:?} at cell {cell_number} (offset {offset})");

    let coord = |p: Point3| match direction {
        Axis::X => p.x,
        Axis::Y => p.y,
        Axis::Z => p.z,
    };

    let points = model
        .surface_points
        .positions()
        .map(|p| coord(p) - offset)
        .collect();
    let orientations = model
        .orientations
        .positions()
        .map(|p| coord(p) - offset)
        .collect();

    Ok(ProjectionParams {
        points: Proximity::SignedOffset(points),
        orientations: Proximity::SignedOffset(orientations),
        axes: DisplayAxes::for_slice(direction),
        along_section: None,
    })
}

/// 2x2 projection matrix `d * d^T / dist^2` for a section direction `d`:
/// multiplying a map-view point by it projects the point onto the line
/// through the origin parallel to the section.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SectionProjector {
    m00: f64,
    m01: f64,
    m11: f64,
}

impl SectionProjector {
    fn build(name: &str, section: &Section) -> Result<Self, ProjectionError> {
        let dist_sq = section.dist * section.dist;
        if !dist_sq.is_finite() || dist_sq == 0.0 {
            return Err(ProjectionError::DegenerateSection {
                name: name.to_owned(),
                dist: section.dist,
            });
        }
        let d = section.direction();
        Ok(Self {
            m00: d.x * d.x / dist_sq,
            m01: d.x * d.y / dist_sq,
            m11: d.y * d.y / dist_sq,
        })
    }

    fn apply(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.m00 * p.x + self.m01 * p.y,
            self.m01 * p.x + self.m11 * p.y,
        )
    }

    /// Perpendicular distance of `p` to the projection line.
    fn perpendicular_distance(&self, p: Vec2) -> f64 {
        (self.apply(p) - p).length()
    }

    /// Along-section display coordinate of `p`, relative to `start`.
    fn along_coordinate(&self, p: Vec2, start: Vec2) -> f64 {
        self.apply(p - start).length()
    }
}

fn project_section(model: &GeoModel, name: &str) -> Result<ProjectionParams, ProjectionError> {
    let section = model
        .sections
        .get(name)
        .ok_or_else(|| ProjectionError::UnknownSection {
            name: name.to_owned(),
        })?;
    let projector = SectionProjector::build(name, section)?;
    let start = section.start;

    let mut point_dist = Vec::with_capacity(model.surface_points.len());
    let mut point_along = Vec::with_capacity(model.surface_points.len());
    for p in model.surface_points.positions() {
        point_dist.push(projector.perpendicular_distance(p.xy()));
        point_along.push(projector.along_coordinate(p.xy(), start));
    }

    let mut ori_dist = Vec::with_capacity(model.orientations.len());
    let mut ori_along = Vec::with_capacity(model.orientations.len());
    for p in model.orientations.positions() {
        ori_dist.push(projector.perpendicular_distance(p.xy()));
        ori_along.push(projector.along_coordinate(p.xy(), start));
    }

    Ok(ProjectionParams {
        points: Proximity::Distance(point_dist),
        orientations: Proximity::Distance(ori_dist),
        axes: DisplayAxes::for_section(),
        along_section: Some(AlongSection {
            points: point_along,
            orientations: ori_along,
        }),
    })
}

/// Decimation stride bounding the pairwise-distance cost: 1 for up to
/// [`TOPOGRAPHY_COMPRESSION`] vertices, growing linearly above that.
#[must_use]
pub fn decimation_stride(vertex_count: usize) -> usize {
    vertex_count.saturating_sub(1) / TOPOGRAPHY_COMPRESSION + 1
}

fn decimate(topography: &Topography) -> Vec<Point3> {
    let stride = decimation_stride(topography.vertex_count());
    topography.vertices().step_by(stride).collect()
}

#[cfg(not(feature = "parallel"))]
fn within_any(surface: &[Point3], targets: &[Point3], threshold: f64) -> Vec<bool> {
    targets
        .iter()
        .map(|&t| surface.iter().any(|&v| v.distance_to(t) < threshold))
        .collect()
}

#[cfg(feature = "parallel")]
fn within_any(surface: &[Point3], targets: &[Point3], threshold: f64) -> Vec<bool> {
    targets
        .par_iter()
        .map(|&t| surface.iter().any(|&v| v.distance_to(t) < threshold))
        .collect()
}

fn project_topography(
    model: &GeoModel,
    projection_distance: f64,
) -> Result<ProjectionParams, ProjectionError> {
    let topography = model
        .topography
        .as_ref()
        .ok_or(ProjectionError::MissingTopography)?;

    let decimated = decimate(topography);
    debug!(
        "topography view: {} of {} vertices after decimation",
        decimated.len(),
        topography.vertex_count()
    );

    let point_targets: Vec<Point3> = model.surface_points.positions().collect();
    let ori_targets: Vec<Point3> = model.orientations.positions().collect();

    Ok(ProjectionParams {
        points: Proximity::Within(within_any(&decimated, &point_targets, projection_distance)),
        orientations: Proximity::Within(within_any(&decimated, &ori_targets, projection_distance)),
        axes: DisplayAxes::for_topography(),
        along_section: None,
    })
}
