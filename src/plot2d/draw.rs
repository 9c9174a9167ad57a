use log::debug;

use super::axes::{Axes2, LegendEntry, QuiverCommand, ScatterCommand};
use super::projection::{
    CellIndex, CoordField, GradientField, ProjectionError, SectionView,
    project_input,
};
use crate::color::{Color, ColorParseError};
use crate::model::GeoModel;

/// Marker size for projected surface points.
const POINT_SIZE: f64 = 70.0;
/// Draw order for data on top of the section image.
const DATA_Z_ORDER: i32 = 102;
/// Quiver arrow scale against the narrower axis dimension.
const QUIVER_SCALE: f64 = 30.0;
const QUIVER_HEAD_WIDTH: f64 = 8.0;
const QUIVER_LINE_WIDTH: f64 = 1.0;
/// Legends sit above everything else.
const LEGEND_Z_ORDER: i32 = 10_000;

/// Fraction of the isometric scale used as the default projection
/// distance.
const DEFAULT_PROJECTION_FRACTION: f64 = 0.2;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlotError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error("bad element color in structural frame: {0}")]
    BadElementColor(#[from] ColorParseError),
}

/// Whether `plot_data` should add a legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendMode {
    /// Draw the legend once per figure.
    #[default]
    Auto,
    /// Draw the legend even if one was already drawn.
    Force,
    Off,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotDataOptions {
    pub section_name: Option<String>,
    pub cell_number: Option<CellIndex>,
    pub direction: String,
    pub legend: LegendMode,
    /// Threshold for the selection masks; defaults to
    /// `0.2 * transform.isometric_scale`.
    pub projection_distance: Option<f64>,
}

impl Default for PlotDataOptions {
    fn default() -> Self {
        Self {
            section_name: None,
            cell_number: None,
            direction: "y".to_owned(),
            legend: LegendMode::default(),
            projection_distance: None,
        }
    }
}

/// Project the model's input data onto the active 2D view and record the
/// scatter, quiver and legend draws on `axes`.
///
/// `legend_drawn` is the figure-level "a legend exists already" state;
/// the updated value is returned so the caller can thread it through
/// subsequent subplot draws.
pub fn plot_data(
    axes: &mut Axes2,
    model: &GeoModel,
    opts: &PlotDataOptions,
    legend_drawn: bool,
) -> Result<bool, PlotError> {
    let projection_distance = opts
        .projection_distance
        .unwrap_or(DEFAULT_PROJECTION_FRACTION * model.transform.isometric_scale);

    let view = SectionView::resolve(
        opts.section_name.as_deref(),
        opts.cell_number,
        &opts.direction,
    )?;
    let params = project_input(model, &view, projection_distance)?;

    let select_points = params.points.select(projection_distance);
    let select_orientations = params.orientations.select(projection_distance);
    debug!(
        "plot_data: {}/{} points, {}/{} orientations selected",
        select_points.iter().filter(|&&s| s).count(),
        select_points.len(),
        select_orientations.iter().filter(|&&s| s).count(),
        select_orientations.len(),
    );

    // Drawing must not clobber the axis label the orchestrator set up.
    let saved_x_label = axes.x_label().to_owned();

    let along_points = params
        .along_section
        .as_ref()
        .map(|a| a.points.as_slice());
    let along_orientations = params
        .along_section
        .as_ref()
        .map(|a| a.orientations.as_slice());

    // Surface points.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut colors = Vec::new();
    for (i, record) in model.surface_points.records.iter().enumerate() {
        if !select_points[i] {
            continue;
        }
        xs.push(point_coord(
            params.axes.x,
            record.pos.to_array(),
            along_points,
            i,
        ));
        ys.push(point_coord(
            params.axes.y,
            record.pos.to_array(),
            along_points,
            i,
        ));
        colors.push(record.color);
    }
    axes.scatter(ScatterCommand {
        x: xs,
        y: ys,
        colors,
        size: POINT_SIZE,
        edge_color: Color::WHITE,
        z_order: DATA_Z_ORDER,
    });

    // Orientations.
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut us = Vec::new();
    let mut vs = Vec::new();
    let mut colors = Vec::new();
    for (i, record) in model.orientations.records.iter().enumerate() {
        if !select_orientations[i] {
            continue;
        }
        xs.push(point_coord(
            params.axes.x,
            record.pos.to_array(),
            along_orientations,
            i,
        ));
        ys.push(point_coord(
            params.axes.y,
            record.pos.to_array(),
            along_orientations,
            i,
        ));
        us.push(gradient_coord(params.axes.gx, record.gradient.to_array()));
        vs.push(gradient_coord(params.axes.gy, record.gradient.to_array()));
        colors.push(record.color);
    }
    let scale_units = axes.narrow_dimension();
    axes.quiver(QuiverCommand {
        x: xs,
        y: ys,
        u: us,
        v: vs,
        colors,
        scale: QUIVER_SCALE,
        scale_units,
        edge_color: Color::BLACK,
        head_width: QUIVER_HEAD_WIDTH,
        line_width: QUIVER_LINE_WIDTH,
        z_order: DATA_Z_ORDER,
    });

    // Legend: once per figure, unless forced.
    let should_draw_legend = match opts.legend {
        LegendMode::Force => true,
        LegendMode::Auto => !legend_drawn,
        LegendMode::Off => false,
    };
    let mut legend_drawn = legend_drawn;
    if should_draw_legend {
        axes.set_legend(legend_entries(model)?);
        legend_drawn = true;
    }

    axes.set_x_label(saved_x_label);

    // A legend may not exist yet on this axis (another subplot may hold
    // it); that case is skipped on purpose.
    axes.restyle_legend(true, LEGEND_Z_ORDER);

    Ok(legend_drawn)
}

/// Legend handles carry the element colors in reverse order (matching the
/// stacking order of the drawn surfaces); labels stay in element order.
fn legend_entries(model: &GeoModel) -> Result<Vec<LegendEntry>, PlotError> {
    let frame = &model.structural_frame;
    frame
        .element_names
        .iter()
        .zip(frame.element_colors.iter().rev())
        .map(|(name, hex)| {
            Ok(LegendEntry {
                label: name.clone(),
                color: Color::from_hex(hex)?,
            })
        })
        .collect()
}

fn point_coord(field: CoordField, pos: [f64; 3], along: Option<&[f64]>, index: usize) -> f64 {
    match field {
        CoordField::X => pos[0],
        CoordField::Y => pos[1],
        CoordField::Z => pos[2],
        CoordField::AlongSection => along.map_or(f64::NAN, |values| values[index]),
    }
}

fn gradient_coord(field: GradientField, gradient: [f64; 3]) -> f64 {
    match field {
        GradientField::Gx => gradient[0],
        GradientField::Gy => gradient[1],
        GradientField::Gz => gradient[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::{Point3, Vec2, Vec3};
    use crate::model::{
        Orientation, RegularGrid, Section, StructuralFrame, SurfacePoint,
    };

    const EPS: f64 = 1e-9;

    fn model() -> GeoModel {
        let grid = RegularGrid::new([0.0, 10.0, 0.0, 10.0, 0.0, 10.0], [10, 10, 10]).unwrap();
        let mut model = GeoModel::new(grid);
        model.transform.isometric_scale = 10.0;
        model.structural_frame = StructuralFrame::new(
            vec!["upper".to_owned(), "lower".to_owned()],
            vec!["#ff0000".to_owned(), "#0000ff".to_owned()],
        );
        model.surface_points.records.push(SurfacePoint::new(
            Point3::new(2.0, 5.0, 1.0),
            Color::BLACK,
        ));
        model.surface_points.records.push(SurfacePoint::new(
            Point3::new(2.0, 9.9, 1.0),
            Color::WHITE,
        ));
        model.orientations.records.push(Orientation::new(
            Point3::new(3.0, 5.0, 2.0),
            Vec3::new(0.1, 0.2, 0.9),
            Color::BLACK,
        ));
        model
    }

    #[test]
    fn mid_y_slice_draws_near_points_only() {
        let mut axes = Axes2::new((0.0, 10.0), (0.0, 10.0));
        let opts = PlotDataOptions {
            projection_distance: Some(1.0),
            ..PlotDataOptions::default()
        };
        // Mid y-slice plane sits at y = 5.
        let legend_drawn = plot_data(&mut axes, &model(), &opts, false).unwrap();
        assert!(legend_drawn);

        let scatter = &axes.scatters[0];
        assert_eq!(scatter.x.len(), 1);
        assert!((scatter.x[0] - 2.0).abs() < EPS); // display x = X
        assert!((scatter.y[0] - 1.0).abs() < EPS); // display y = Z
        assert_eq!(scatter.colors, vec![Color::BLACK]);

        let quiver = &axes.quivers[0];
        assert_eq!(quiver.x.len(), 1);
        assert!((quiver.u[0] - 0.1).abs() < EPS); // G_x
        assert!((quiver.v[0] - 0.9).abs() < EPS); // G_z
    }

    #[test]
    fn default_projection_distance_comes_from_the_transform() {
        let mut axes = Axes2::new((0.0, 10.0), (0.0, 10.0));
        // 0.2 * isometric_scale = 2.0: both points are within 2 of y = 5?
        // No: the second sits at y = 9.9, offset 4.9, so it stays out.
        let _ = plot_data(&mut axes, &model(), &PlotDataOptions::default(), false).unwrap();
        assert_eq!(axes.scatters[0].x.len(), 1);
    }

    #[test]
    fn section_mode_uses_along_section_coordinates() {
        let mut m = model();
        m.sections
            .insert("s1", Section::new(Vec2::ZERO, Vec2::new(0.0, 10.0)))
            .unwrap();
        let mut axes = Axes2::new((0.0, 10.0), (0.0, 10.0));
        let opts = PlotDataOptions {
            section_name: Some("s1".to_owned()),
            projection_distance: Some(2.5),
            ..PlotDataOptions::default()
        };
        let _ = plot_data(&mut axes, &m, &opts, false).unwrap();

        // Both records are exactly 2 away from the x = 0 section line.
        let scatter = &axes.scatters[0];
        assert_eq!(scatter.x.len(), 2);
        assert!((scatter.x[0] - 5.0).abs() < EPS); // along-section coordinate
        assert!((scatter.y[0] - 1.0).abs() < EPS); // Z
    }

    #[test]
    fn legend_is_drawn_once_and_restyled() {
        let m = model();
        let mut axes = Axes2::new((0.0, 10.0), (0.0, 10.0));
        let opts = PlotDataOptions::default();

        let drawn = plot_data(&mut axes, &m, &opts, false).unwrap();
        assert!(drawn);
        let legend = axes.legend.as_ref().unwrap();
        assert_eq!(legend.entries.len(), 2);
        // Labels in element order, colors reversed.
        assert_eq!(legend.entries[0].label, "upper");
        assert_eq!(legend.entries[0].color, Color::from_hex("#0000ff").unwrap());
        assert!(legend.frame_on);
        assert_eq!(legend.z_order, LEGEND_Z_ORDER);

        // Second subplot: legend already drawn, not added again.
        let mut axes2 = Axes2::new((0.0, 10.0), (0.0, 10.0));
        let drawn = plot_data(&mut axes2, &m, &opts, drawn).unwrap();
        assert!(drawn);
        assert!(axes2.legend.is_none());

        // Force re-draws regardless.
        let opts = PlotDataOptions {
            legend: LegendMode::Force,
            ..PlotDataOptions::default()
        };
        let mut axes3 = Axes2::new((0.0, 10.0), (0.0, 10.0));
        let _ = plot_data(&mut axes3, &m, &opts, true).unwrap();
        assert!(axes3.legend.is_some());
    }

    #[test]
    fn x_label_survives_the_draw() {
        let m = model();
        let mut axes = Axes2::new((0.0, 10.0), (0.0, 10.0));
        axes.set_x_label("Y");
        let _ = plot_data(&mut axes, &m, &PlotDataOptions::default(), false).unwrap();
        assert_eq!(axes.x_label(), "Y");
    }

    #[test]
    fn bad_direction_propagates() {
        let m = model();
        let mut axes = Axes2::default();
        let opts = PlotDataOptions {
            direction: "diagonal".to_owned(),
            ..PlotDataOptions::default()
        };
        assert!(matches!(
            plot_data(&mut axes, &m, &opts, false),
            Err(PlotError::Projection(
                ProjectionError::InvalidDirection { .. }
            ))
        ));
    }

    #[test]
    fn bad_element_color_propagates() {
        let mut m = model();
        m.structural_frame.element_colors[0] = "magenta".to_owned();
        let mut axes = Axes2::default();
        assert!(matches!(
            plot_data(&mut axes, &m, &PlotDataOptions::default(), false),
            Err(PlotError::BadElementColor(_))
        ));
    }
}
