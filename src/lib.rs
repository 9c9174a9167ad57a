//! Plotting helpers for a geological modeling toolkit.
//!
//! Two independent, stateless cores:
//!
//! - [`plot2d`]: project surface points and orientations onto the active
//!   2D view (a regular-grid slice, a named cross-section, or the
//!   topography surface) and record the resulting scatter/quiver/legend
//!   draws on a command-recording axis handle.
//! - [`plot3d`]: build the topography surface mesh, color it by a
//!   categorical geological map or by raw height, optionally extract
//!   height iso-contours, and register everything in a scene registry.
//!
//! The data model ([`model`]) is produced elsewhere and treated as
//! read-only; everything derived here (distances, masks, colors, meshes)
//! is transient. All computation is synchronous and single-threaded; the
//! optional `parallel` feature parallelizes only the topography
//! pairwise-distance reduction.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod geom;
pub mod model;
pub mod plot2d;
pub mod plot3d;

pub use color::{Color, ColorParseError, Colormap};
pub use model::GeoModel;
pub use plot2d::{PlotDataOptions, plot_data, project_input};
pub use plot3d::{Scene, plot_topography_3d};
