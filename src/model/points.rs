use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::geom::{Point3, Vec3};

/// One interface point of the structural model, with its display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoint {
    pub pos: Point3,
    pub color: Color,
}

impl SurfacePoint {
    #[must_use]
    pub const fn new(pos: Point3, color: Color) -> Self {
        Self { pos, color }
    }
}

/// One orientation measurement: a position plus a gradient (pole) vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation {
    pub pos: Point3,
    pub gradient: Vec3,
    pub color: Color,
}

impl Orientation {
    #[must_use]
    pub const fn new(pos: Point3, gradient: Vec3, color: Color) -> Self {
        Self {
            pos,
            gradient,
            color,
        }
    }
}

/// Ordered surface-point collection. Order is irrelevant for projection
/// filtering but carries through to legends.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfacePoints {
    pub records: Vec<SurfacePoint>,
}

impl SurfacePoints {
    #[must_use]
    pub fn new(records: Vec<SurfacePoint>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.records.iter().map(|r| r.pos)
    }
}

/// Ordered orientation collection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Orientations {
    pub records: Vec<Orientation>,
}

impl Orientations {
    #[must_use]
    pub fn new(records: Vec<Orientation>) -> Self {
        Self { records }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.records.iter().map(|r| r.pos)
    }
}
