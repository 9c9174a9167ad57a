use super::mesh::LineSet;

/// Iso-lines of a scalar field sampled on a regular 2D grid.
///
/// Lines are emitted as independent segments draped at `z = level`, the way
/// a height-field contour overlay is rendered.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContourSet {
    pub levels: Vec<f64>,
    pub lines: LineSet,
}

impl ContourSet {
    /// Extract contours at explicit levels.
    ///
    /// `values` is row-major over `ys` rows of `xs` columns; the value at
    /// `(xs[i], ys[j])` is `values[j * xs.len() + i]`. Rows or columns
    /// shorter than 2, or a length mismatch, produce an empty set.
    #[must_use]
    pub fn extract(xs: &[f64], ys: &[f64], values: &[f64], levels: &[f64]) -> Self {
        let nx = xs.len();
        let ny = ys.len();
        if nx < 2 || ny < 2 || values.len() != nx * ny {
            return Self::default();
        }

        let mut lines = Vec::new();
        for &level in levels {
            if !level.is_finite() {
                continue;
            }
            extract_level(xs, ys, values, level, &mut lines);
        }

        Self {
            levels: levels.to_vec(),
            lines: LineSet::new(lines),
        }
    }

    /// Extract contours at `count` evenly spaced levels strictly between
    /// the field minimum and maximum.
    #[must_use]
    pub fn evenly_spaced(xs: &[f64], ys: &[f64], values: &[f64], count: usize) -> Self {
        let levels = evenly_spaced_levels(values, count);
        Self::extract(xs, ys, values, &levels)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// `count` levels at the interior of the value range. A flat or empty field
/// yields no levels.
#[must_use]
pub fn evenly_spaced_levels(values: &[f64], count: usize) -> Vec<f64> {
    let finite = values.iter().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if count == 0 || !(max > min) {
        return Vec::new();
    }

    let step = (max - min) / (count as f64 + 1.0);
    (1..=count).map(|i| min + step * i as f64).collect()
}

/// Marching squares over one iso-level, appending segments to `out`.
fn extract_level(xs: &[f64], ys: &[f64], values: &[f64], level: f64, out: &mut Vec<Vec<[f64; 3]>>) {
    let nx = xs.len();
    let sample = |i: usize, j: usize| values[j * nx + i];

    // Interpolated crossing of the iso-level on a cell edge.
    let cross = |a: f64, b: f64, pa: f64, pb: f64| -> f64 {
        let t = (level - a) / (b - a);
        pa + (pb - pa) * t
    };

    for j in 0..ys.len() - 1 {
        for i in 0..nx - 1 {
            let v00 = sample(i, j);
            let v10 = sample(i + 1, j);
            let v01 = sample(i, j + 1);
            let v11 = sample(i + 1, j + 1);
            if !(v00.is_finite() && v10.is_finite() && v01.is_finite() && v11.is_finite()) {
                continue;
            }

            let mut case = 0u8;
            if v00 >= level {
                case |= 1;
            }
            if v10 >= level {
                case |= 2;
            }
            if v11 >= level {
                case |= 4;
            }
            if v01 >= level {
                case |= 8;
            }
            if case == 0 || case == 15 {
                continue;
            }

            // Edge crossings: bottom, right, top, left.
            let bottom = || [cross(v00, v10, xs[i], xs[i + 1]), ys[j], level];
            let right = || [xs[i + 1], cross(v10, v11, ys[j], ys[j + 1]), level];
            let top = || [cross(v01, v11, xs[i], xs[i + 1]), ys[j + 1], level];
            let left = || [xs[i], cross(v00, v01, ys[j], ys[j + 1]), level];

            match case {
                1 | 14 => out.push(vec![left(), bottom()]),
                2 | 13 => out.push(vec![bottom(), right()]),
                4 | 11 => out.push(vec![right(), top()]),
                8 | 7 => out.push(vec![top(), left()]),
                3 | 12 => out.push(vec![left(), right()]),
                6 | 9 => out.push(vec![bottom(), top()]),
                5 | 10 => {
                    // Saddle: disambiguate with the cell-center average.
                    let center = (v00 + v10 + v01 + v11) / 4.0;
                    if (center >= level) == (case == 10) {
                        out.push(vec![left(), bottom()]);
                        out.push(vec![right(), top()]);
                    } else {
                        out.push(vec![bottom(), right()]);
                        out.push(vec![top(), left()]);
                    }
                }
                _ => unreachable!(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn evenly_spaced_levels_are_interior() {
        let values = [0.0, 10.0];
        let levels = evenly_spaced_levels(&values, 4);
        assert_eq!(levels.len(), 4);
        assert!((levels[0] - 2.0).abs() < EPS);
        assert!((levels[3] - 8.0).abs() < EPS);
    }

    #[test]
    fn flat_field_has_no_levels() {
        assert!(evenly_spaced_levels(&[3.0, 3.0, 3.0], 10).is_empty());
        assert!(evenly_spaced_levels(&[], 10).is_empty());
    }

    #[test]
    fn linear_ramp_contour_is_vertical_line() {
        // Field f(x, y) = x on a 3x3 grid; the 1.0 contour is x = 1.
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 1.0, 2.0];
        let values: Vec<f64> = ys.iter().flat_map(|_| xs.iter().copied()).collect();

        let set = ContourSet::extract(&xs, &ys, &values, &[0.5]);
        assert!(!set.is_empty());
        for line in &set.lines.lines {
            for p in line {
                assert!((p[0] - 0.5).abs() < EPS);
                assert!((p[2] - 0.5).abs() < EPS);
            }
        }
    }

    #[test]
    fn single_high_corner_produces_one_segment() {
        let xs = [0.0, 1.0];
        let ys = [0.0, 1.0];
        // Only the (0, 0) corner is above the level.
        let values = [1.0, 0.0, 0.0, 0.0];
        let set = ContourSet::extract(&xs, &ys, &values, &[0.5]);
        assert_eq!(set.lines.segment_count(), 1);
    }

    #[test]
    fn mismatched_lengths_yield_empty_set() {
        let set = ContourSet::extract(&[0.0, 1.0], &[0.0, 1.0], &[0.0; 3], &[0.5]);
        assert!(set.is_empty());
    }
}
