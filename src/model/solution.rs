use serde::{Deserialize, Serialize};

/// Categorical geological-map raster aligned with the topography vertices.
///
/// Each cell holds a 1-based category index into the structural-frame
/// palette. The solver emits the indices as floats; they are rounded to
/// the nearest integer when used. An empty raster counts as absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GeologicalMap {
    pub categories: Vec<f64>,
}

impl GeologicalMap {
    #[must_use]
    pub fn new(categories: Vec<f64>) -> Self {
        Self { categories }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Solver output consumed by the 3D drawer. Only the geological map is
/// read here; the remaining raw arrays live with the solver.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawArraysSolution {
    pub geological_map: Option<GeologicalMap>,
}

impl RawArraysSolution {
    /// The geological map, if present and non-empty.
    #[must_use]
    pub fn geological_map(&self) -> Option<&GeologicalMap> {
        self.geological_map.as_ref().filter(|map| !map.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_counts_as_absent() {
        let none = RawArraysSolution::default();
        assert!(none.geological_map().is_none());

        let empty = RawArraysSolution {
            geological_map: Some(GeologicalMap::new(vec![])),
        };
        assert!(empty.geological_map().is_none());

        let present = RawArraysSolution {
            geological_map: Some(GeologicalMap::new(vec![1.0, 2.0])),
        };
        assert_eq!(present.geological_map().unwrap().len(), 2);
    }
}
