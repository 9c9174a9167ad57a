//! 2D cross-section plotting: the projection selector and the input-data
//! drawer.

mod axes;
mod draw;
mod projection;

pub use axes::{
    Axes2, LegendCommand, LegendEntry, QuiverCommand, ScaleUnits, ScatterCommand,
};
pub use draw::{LegendMode, PlotDataOptions, PlotError, plot_data};
pub use projection::{
    AlongSection, CellIndex, CoordField, DisplayAxes, GradientField, ProjectionError,
    ProjectionParams, Proximity, SectionView, TOPOGRAPHY_COMPRESSION, decimation_stride,
    project_input,
};
