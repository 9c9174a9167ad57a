use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Triangle mesh handed to a renderer, with named per-vertex attributes.
///
/// Scalar attributes (keyed by name, e.g. `"height"`) drive colormap
/// rendering; the optional RGB array drives direct per-vertex coloring.
/// Both channels must match `positions` in length when present.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TriangleMesh {
    pub positions: Vec<[f64; 3]>,
    pub indices: Vec<u32>,
    /// Named per-vertex scalar arrays.
    pub point_scalars: BTreeMap<String, Vec<f64>>,
    /// Per-vertex RGB colors in [0, 255], one triple per vertex.
    pub point_colors: Option<Vec<[f64; 3]>>,
}

impl TriangleMesh {
    /// Create a new mesh with positions and indices only.
    #[must_use]
    pub fn new(positions: Vec<[f64; 3]>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            indices,
            point_scalars: BTreeMap::new(),
            point_colors: None,
        }
    }

    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Attach a named per-vertex scalar array, replacing any previous
    /// array under the same name.
    pub fn set_point_scalars(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.point_scalars.insert(name.into(), values);
    }

    #[must_use]
    pub fn point_scalars(&self, name: &str) -> Option<&[f64]> {
        self.point_scalars.get(name).map(Vec::as_slice)
    }

    /// Returns true if all vertex indices are within bounds.
    #[must_use]
    pub fn has_valid_indices(&self) -> bool {
        let n = self.positions.len() as u32;
        self.indices.iter().all(|&i| i < n)
    }

    /// Returns true if any vertex position contains NaN or Inf values.
    #[must_use]
    pub fn has_invalid_vertices(&self) -> bool {
        self.positions
            .iter()
            .any(|p| !p[0].is_finite() || !p[1].is_finite() || !p[2].is_finite())
    }

    /// Returns true if every attached attribute matches the vertex count.
    #[must_use]
    pub fn attributes_consistent(&self) -> bool {
        let n = self.positions.len();
        self.point_scalars.values().all(|v| v.len() == n)
            && self.point_colors.as_ref().is_none_or(|c| c.len() == n)
    }
}

/// Polyline bundle handed to a renderer as line segments.
///
/// Used for contour overlays; `lines` are independent open polylines in
/// world coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSet {
    pub lines: Vec<Vec<[f64; 3]>>,
}

impl LineSet {
    #[must_use]
    pub fn new(lines: Vec<Vec<[f64; 3]>>) -> Self {
        Self { lines }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total number of segments over all polylines.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.len().saturating_sub(1))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad_mesh() -> TriangleMesh {
        TriangleMesh::new(
            vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [1.0, 1.0, 0.0],
            ],
            vec![0, 1, 2, 2, 1, 3],
        )
    }

    #[test]
    fn counts() {
        let mesh = quad_mesh();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(mesh.has_valid_indices());
        assert!(!mesh.has_invalid_vertices());
    }

    #[test]
    fn scalar_attachment_and_consistency() {
        let mut mesh = quad_mesh();
        mesh.set_point_scalars("height", vec![0.0, 1.0, 2.0, 3.0]);
        assert!(mesh.attributes_consistent());
        assert_eq!(mesh.point_scalars("height").unwrap()[3], 3.0);

        mesh.set_point_scalars("height", vec![0.0]);
        assert!(!mesh.attributes_consistent());
    }

    #[test]
    fn color_length_mismatch_is_inconsistent() {
        let mut mesh = quad_mesh();
        mesh.point_colors = Some(vec![[255.0, 0.0, 0.0]; 3]);
        assert!(!mesh.attributes_consistent());
        mesh.point_colors = Some(vec![[255.0, 0.0, 0.0]; 4]);
        assert!(mesh.attributes_consistent());
    }

    #[test]
    fn line_set_segment_count() {
        let lines = LineSet::new(vec![
            vec![[0.0; 3], [1.0, 0.0, 0.0], [2.0, 0.0, 0.0]],
            vec![[0.0; 3], [0.0, 1.0, 0.0]],
        ]);
        assert_eq!(lines.segment_count(), 3);
        assert!(!lines.is_empty());
    }
}
