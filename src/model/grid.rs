use serde::{Deserialize, Serialize};

use super::ModelError;

/// Principal axis of the regular grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Case-insensitive parse of a direction letter. Anything that is not
    /// x, y or z is rejected (callers turn `None` into an
    /// invalid-argument error).
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "x" | "X" => Some(Self::X),
            "y" | "Y" => Some(Self::Y),
            "z" | "Z" => Some(Self::Z),
            _ => None,
        }
    }

    /// Index into `[x, y, z]`-ordered arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }
}

/// Axis-aligned regular grid: extent as `[x0, x1, y0, y1, z0, z1]` plus a
/// cell count per axis. Cell sizes are derived, so
/// `extent_max = extent_min + cell_size * count` holds by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegularGrid {
    extent: [f64; 6],
    resolution: [usize; 3],
}

impl RegularGrid {
    pub fn new(extent: [f64; 6], resolution: [usize; 3]) -> Result<Self, ModelError> {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let lo = extent[2 * axis.index()];
            let hi = extent[2 * axis.index() + 1];
            if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
                return Err(ModelError::InvalidExtent { axis, lo, hi });
            }
            if resolution[axis.index()] == 0 {
                return Err(ModelError::ZeroResolution { axis });
            }
        }
        Ok(Self { extent, resolution })
    }

    #[must_use]
    pub const fn extent(&self) -> [f64; 6] {
        self.extent
    }

    #[must_use]
    pub const fn resolution(&self) -> [usize; 3] {
        self.resolution
    }

    #[must_use]
    pub fn extent_min(&self, axis: Axis) -> f64 {
        self.extent[2 * axis.index()]
    }

    #[must_use]
    pub fn extent_max(&self, axis: Axis) -> f64 {
        self.extent[2 * axis.index() + 1]
    }

    /// Cell size along one axis (dx, dy or dz).
    #[must_use]
    pub fn cell_size(&self, axis: Axis) -> f64 {
        let span = self.extent_max(axis) - self.extent_min(axis);
        span / self.resolution[axis.index()] as f64
    }

    /// Middle cell index along one axis.
    #[must_use]
    pub fn mid_cell(&self, axis: Axis) -> usize {
        self.resolution[axis.index()] / 2
    }

    /// World-space offset of the slicing plane for `cell_number` cells
    /// along `axis`.
    #[must_use]
    pub fn plane_offset(&self, axis: Axis, cell_number: usize) -> f64 {
        self.extent_min(axis) + self.cell_size(axis) * cell_number as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn grid() -> RegularGrid {
        RegularGrid::new([0.0, 10.0, -5.0, 5.0, 0.0, 2.0], [10, 20, 4]).unwrap()
    }

    #[test]
    fn axis_parse_is_case_insensitive() {
        assert_eq!(Axis::parse("x"), Some(Axis::X));
        assert_eq!(Axis::parse("Y"), Some(Axis::Y));
        assert_eq!(Axis::parse(" z "), Some(Axis::Z));
        assert_eq!(Axis::parse("w"), None);
        assert_eq!(Axis::parse(""), None);
    }

    #[test]
    fn cell_sizes_follow_extent_and_resolution() {
        let g = grid();
        assert!((g.cell_size(Axis::X) - 1.0).abs() < EPS);
        assert!((g.cell_size(Axis::Y) - 0.5).abs() < EPS);
        assert!((g.cell_size(Axis::Z) - 0.5).abs() < EPS);
    }

    #[test]
    fn plane_offset_per_axis() {
        let g = grid();
        assert!((g.plane_offset(Axis::X, 3) - 3.0).abs() < EPS);
        assert!((g.plane_offset(Axis::Y, 4) - (-3.0)).abs() < EPS);
        assert!((g.plane_offset(Axis::Z, 0) - 0.0).abs() < EPS);
    }

    #[test]
    fn mid_cell_uses_the_sliced_axis() {
        let g = grid();
        assert_eq!(g.mid_cell(Axis::X), 5);
        assert_eq!(g.mid_cell(Axis::Y), 10);
        assert_eq!(g.mid_cell(Axis::Z), 2);
    }

    #[test]
    fn rejects_inverted_extent_and_zero_resolution() {
        assert!(matches!(
            RegularGrid::new([1.0, 0.0, 0.0, 1.0, 0.0, 1.0], [2, 2, 2]),
            Err(ModelError::InvalidExtent { axis: Axis::X, .. })
        ));
        assert!(matches!(
            RegularGrid::new([0.0, 1.0, 0.0, 1.0, 0.0, 1.0], [2, 0, 2]),
            Err(ModelError::ZeroResolution { axis: Axis::Y })
        ));
    }
}
