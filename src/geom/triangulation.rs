/// Triangle indices for a structured grid of `u_count` x `v_count` vertices
/// laid out row-major (U varies fastest). Each quad yields two triangles.
/// A grid narrower than 2 vertices in either direction has no quads and
/// yields no indices.
#[must_use]
pub fn triangulate_grid(u_count: usize, v_count: usize) -> Vec<u32> {
    if u_count < 2 || v_count < 2 {
        return Vec::new();
    }

    let quad_u = u_count - 1;
    let quad_v = v_count - 1;
    let mut indices = Vec::with_capacity(quad_u * quad_v * 6);

    let stride = u_count;
    for v in 0..quad_v {
        for u in 0..quad_u {
            let i0 = (v * stride + u) as u32;
            let i1 = (v * stride + u + 1) as u32;
            let i2 = ((v + 1) * stride + u) as u32;
            let i3 = ((v + 1) * stride + u + 1) as u32;

            indices.extend_from_slice(&[i0, i1, i2]);
            indices.extend_from_slice(&[i2, i1, i3]);
        }
    }

    indices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_quad_yields_two_triangles() {
        let indices = triangulate_grid(2, 2);
        assert_eq!(indices, vec![0, 1, 2, 2, 1, 3]);
    }

    #[test]
    fn grid_triangle_count() {
        // 4x3 vertices -> 3x2 quads -> 12 triangles
        let indices = triangulate_grid(4, 3);
        assert_eq!(indices.len(), 12 * 3);
        assert!(indices.iter().all(|&i| i < 12));
    }

    #[test]
    fn degenerate_counts_yield_no_indices() {
        assert!(triangulate_grid(1, 1).is_empty());
        assert!(triangulate_grid(1, 5).is_empty());
        assert!(triangulate_grid(5, 1).is_empty());
        assert!(triangulate_grid(0, 2).is_empty());
    }
}
