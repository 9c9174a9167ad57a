use serde::{Deserialize, Serialize};

use super::ModelError;
use crate::geom::Point3;

/// Regular 2D height field over the model extent.
///
/// `heights` is row-major: one row per `ys` entry, `xs.len()` columns, so
/// the height at `(xs[i], ys[j])` is `heights[j * xs.len() + i]`. The flat
/// vertex view iterates in the same order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topography {
    xs: Vec<f64>,
    ys: Vec<f64>,
    heights: Vec<f64>,
}

impl Topography {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, heights: Vec<f64>) -> Result<Self, ModelError> {
        let expected = xs.len() * ys.len();
        if heights.len() != expected || expected == 0 {
            return Err(ModelError::TopographyShapeMismatch {
                expected,
                got: heights.len(),
            });
        }
        Ok(Self { xs, ys, heights })
    }

    #[must_use]
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    #[must_use]
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Raw heights in flat vertex order.
    #[must_use]
    pub fn heights(&self) -> &[f64] {
        &self.heights
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.heights.len()
    }

    /// Grid view: height at column `i`, row `j`.
    #[must_use]
    pub fn height_at(&self, i: usize, j: usize) -> f64 {
        self.heights[j * self.xs.len() + i]
    }

    /// One vertex of the flat `(X, Y, Z)` view.
    #[must_use]
    pub fn vertex(&self, k: usize) -> Point3 {
        let nx = self.xs.len();
        Point3::new(self.xs[k % nx], self.ys[k / nx], self.heights[k])
    }

    /// The flat `(X, Y, Z)` view, in grid order.
    pub fn vertices(&self) -> impl Iterator<Item = Point3> + '_ {
        (0..self.vertex_count()).map(|k| self.vertex(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topo() -> Topography {
        // 3 columns, 2 rows
        Topography::new(
            vec![0.0, 1.0, 2.0],
            vec![10.0, 11.0],
            vec![0.0, 0.1, 0.2, 1.0, 1.1, 1.2],
        )
        .unwrap()
    }

    #[test]
    fn grid_and_flat_views_agree() {
        let t = topo();
        assert_eq!(t.vertex_count(), 6);
        assert_eq!(t.height_at(2, 1), 1.2);
        assert_eq!(t.vertex(5), Point3::new(2.0, 11.0, 1.2));
        assert_eq!(t.vertex(1), Point3::new(1.0, 10.0, 0.1));
    }

    #[test]
    fn shape_mismatch_is_rejected() {
        assert!(matches!(
            Topography::new(vec![0.0, 1.0], vec![0.0], vec![0.0; 3]),
            Err(ModelError::TopographyShapeMismatch {
                expected: 2,
                got: 3
            })
        ));
        assert!(Topography::new(vec![], vec![], vec![]).is_err());
    }

    #[test]
    fn vertices_iterate_in_grid_order() {
        let t = topo();
        let verts: Vec<_> = t.vertices().collect();
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[3], Point3::new(0.0, 11.0, 1.0));
    }
}
