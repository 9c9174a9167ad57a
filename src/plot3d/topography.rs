use log::debug;

use super::scene::{ActorId, LineRenderOptions, MeshRenderOptions, Scene};
use crate::color::{Color, ColorParseError, Colormap};
use crate::geom::{ContourSet, TriangleMesh, evenly_spaced_levels, triangulate_grid};
use crate::model::{GeologicalMap, RawArraysSolution, Topography};

/// Registry key of the topography surface.
pub const TOPOGRAPHY_KEY: &str = "topography";
/// Registry key of the topography contour lines.
pub const TOPOGRAPHY_CONTOURS_KEY: &str = "topography_cont";

/// Contour level count when the caller does not pass explicit levels.
const DEFAULT_CONTOUR_LEVELS: usize = 10;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TopographyError {
    #[error("continuous-field coloring with a geological map is not implemented")]
    NotImplemented,
    #[error("geological-map category {index} at cell {cell} is outside the palette (1..={palette_len})")]
    CategoryOutOfRange {
        index: i64,
        cell: usize,
        palette_len: usize,
    },
    #[error("geological map has {got} cells, topography has {expected} vertices")]
    RasterShapeMismatch { expected: usize, got: usize },
    #[error("bad palette color: {0}")]
    InvalidPaletteColor(#[from] ColorParseError),
}

/// Which scalar field colors the topography surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopographyDataType {
    /// Categorical geological-map coloring, when a map is available.
    #[default]
    GeologicalMap,
    /// Continuous scalar-field coloring.
    ContinuousField,
}

/// Uniform colorizer output: one scalar channel, one optional RGB
/// channel, and how the renderer should combine them.
#[derive(Debug, Clone, PartialEq)]
pub struct TopographyStyle {
    /// Raw heights, always present (the `"height"` channel).
    pub scalars: Vec<f64>,
    /// Per-vertex RGB in [0, 255]; present only for geological-map mode.
    pub colors: Option<Vec<[f64; 3]>>,
    pub use_rgb: bool,
    pub colormap: Colormap,
}

/// Decide the topography coloring from the closed set of
/// (data type, map present) combinations.
pub fn colorize_topography(
    topography: &Topography,
    geological_map: Option<&GeologicalMap>,
    data_type: TopographyDataType,
    element_colors: &[String],
) -> Result<TopographyStyle, TopographyError> {
    let heights = topography.heights().to_vec();

    match (data_type, geological_map) {
        (TopographyDataType::GeologicalMap, Some(map)) => {
            if map.len() != topography.vertex_count() {
                return Err(TopographyError::RasterShapeMismatch {
                    expected: topography.vertex_count(),
                    got: map.len(),
                });
            }
            let listed = element_colors
                .iter()
                .map(|hex| Color::from_hex(hex))
                .collect::<Result<Vec<_>, _>>()?;
            let palette: Vec<[f64; 3]> = listed.iter().map(|c| c.to_rgb255()).collect();
            let colors = map_categories_to_colors(map, &palette)?;
            Ok(TopographyStyle {
                scalars: heights,
                colors: Some(colors),
                use_rgb: true,
                colormap: Colormap::Listed(listed),
            })
        }
        (TopographyDataType::ContinuousField, Some(_)) => Err(TopographyError::NotImplemented),
        (_, None) => Ok(TopographyStyle {
            scalars: heights,
            colors: None,
            use_rgb: false,
            colormap: Colormap::Terrain,
        }),
    }
}

/// 1-based category indices, rounded to the nearest integer, index the
/// palette. Out-of-range indices fail instead of wrapping or clamping.
fn map_categories_to_colors(
    map: &GeologicalMap,
    palette: &[[f64; 3]],
) -> Result<Vec<[f64; 3]>, TopographyError> {
    map.categories
        .iter()
        .enumerate()
        .map(|(cell, &category)| {
            let index = category.round() as i64;
            if index < 1 || index as usize > palette.len() {
                return Err(TopographyError::CategoryOutOfRange {
                    index,
                    cell,
                    palette_len: palette.len(),
                });
            }
            Ok(palette[index as usize - 1])
        })
        .collect()
}

/// Structured-grid triangle mesh of the height field, vertices in the
/// topography's flat order.
#[must_use]
pub fn build_topography_mesh(topography: &Topography) -> TriangleMesh {
    let positions = topography.vertices().map(|p| p.to_array()).collect();
    let indices = triangulate_grid(topography.xs().len(), topography.ys().len());
    TriangleMesh::new(positions, indices)
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopographyPlotOptions {
    /// Add iso-contour lines of the height field.
    pub contours: bool,
    /// Explicit contour levels; evenly spaced levels when `None`.
    pub contour_levels: Option<Vec<f64>>,
}

impl Default for TopographyPlotOptions {
    fn default() -> Self {
        Self {
            contours: true,
            contour_levels: None,
        }
    }
}

/// Render the topography surface into the scene, colored by the
/// geological map when one is present, and register it (plus the optional
/// contour overlay) under the fixed registry keys.
///
/// Returns the surface actor handle.
pub fn plot_topography_3d(
    scene: &mut Scene,
    topography: &Topography,
    solution: &RawArraysSolution,
    data_type: TopographyDataType,
    element_colors: &[String],
    options: &TopographyPlotOptions,
) -> Result<ActorId, TopographyError> {
    let style = colorize_topography(
        topography,
        solution.geological_map(),
        data_type,
        element_colors,
    )?;

    let mut mesh = build_topography_mesh(topography);
    mesh.set_point_scalars("height", topography.heights().to_vec());
    match &style.colors {
        Some(colors) => mesh.point_colors = Some(colors.clone()),
        // Without a map the "id" channel duplicates the raw heights.
        None => mesh.set_point_scalars("id", style.scalars.clone()),
    }
    debug!(
        "topography mesh: {} vertices, {} triangles, rgb={}",
        mesh.vertex_count(),
        mesh.triangle_count(),
        style.use_rgb
    );

    let scalars = if style.use_rgb { "id" } else { "height" };
    let render_options = MeshRenderOptions {
        scalars: scalars.to_owned(),
        colormap: style.colormap,
        rgb: style.use_rgb,
        show_scalar_bar: false,
    };
    let surface_actor = scene.add_mesh(mesh.clone(), render_options);

    if options.contours {
        let heights = topography.heights();
        let levels = match &options.contour_levels {
            Some(levels) => levels.clone(),
            None => evenly_spaced_levels(heights, DEFAULT_CONTOUR_LEVELS),
        };
        let contours = ContourSet::extract(topography.xs(), topography.ys(), heights, &levels);
        let contour_actor = scene.add_lines(
            contours.lines.clone(),
            LineRenderOptions {
                color: Color::WHITE,
                line_width: 3.0,
            },
        );

        scene.register_surface(TOPOGRAPHY_KEY, mesh, surface_actor);
        scene.register_contours(TOPOGRAPHY_CONTOURS_KEY, contours.lines, contour_actor);
    }

    Ok(surface_actor)
}
