use serde::{Deserialize, Serialize};

/// Names and hex colors of the structural elements, in legend order.
///
/// The color list doubles as the geological-map palette: category `k`
/// (1-based) maps to `element_colors[k - 1]`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuralFrame {
    pub element_names: Vec<String>,
    pub element_colors: Vec<String>,
}

impl StructuralFrame {
    #[must_use]
    pub fn new(element_names: Vec<String>, element_colors: Vec<String>) -> Self {
        Self {
            element_names,
            element_colors,
        }
    }
}

/// Spatial transform the model was built under. Only the isometric scale
/// is read here; it sets the default projection distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    pub isometric_scale: f64,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            isometric_scale: 1.0,
        }
    }
}
