//! 3D scene plotting: the topography surface drawer and the scene
//! registry it renders into.

mod scene;
mod topography;

pub use scene::{Actor, ActorId, LineRenderOptions, MeshRenderOptions, Scene};
pub use topography::{
    TOPOGRAPHY_CONTOURS_KEY, TOPOGRAPHY_KEY, TopographyDataType, TopographyError,
    TopographyPlotOptions, TopographyStyle, build_topography_mesh, colorize_topography,
    plot_topography_3d,
};
