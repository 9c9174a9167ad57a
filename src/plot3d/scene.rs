use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::{Color, Colormap};
use crate::geom::{LineSet, TriangleMesh};

/// Handle to a renderable added to the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ActorId(u64);

/// Render options for a mesh actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRenderOptions {
    /// Name of the point-scalar array driving the colormap.
    pub scalars: String,
    pub colormap: Colormap,
    /// Use the mesh's per-vertex RGB array instead of the colormap.
    pub rgb: bool,
    pub show_scalar_bar: bool,
}

/// Render options for a line actor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRenderOptions {
    pub color: Color,
    pub line_width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Actor {
    Mesh {
        mesh: TriangleMesh,
        options: MeshRenderOptions,
    },
    Lines {
        lines: LineSet,
        options: LineRenderOptions,
    },
}

/// Caller-owned 3D scene: the add-mesh primitive plus named registries so
/// renderables can be looked up and replaced later.
///
/// Single-threaded by design; one thread drives the scene at a time.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    next_actor: u64,
    actors: BTreeMap<ActorId, Actor>,
    /// Surface meshes by registry key (e.g. `"topography"`).
    pub surface_meshes: BTreeMap<String, TriangleMesh>,
    /// Contour line sets by registry key.
    pub contour_lines: BTreeMap<String, LineSet>,
    /// Actor handles by registry key.
    pub surface_actors: BTreeMap<String, ActorId>,
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> ActorId {
        let id = ActorId(self.next_actor);
        self.next_actor += 1;
        id
    }

    /// Add a mesh renderable; returns its handle.
    pub fn add_mesh(&mut self, mesh: TriangleMesh, options: MeshRenderOptions) -> ActorId {
        let id = self.next_id();
        self.actors.insert(id, Actor::Mesh { mesh, options });
        id
    }

    /// Add a line renderable; returns its handle.
    pub fn add_lines(&mut self, lines: LineSet, options: LineRenderOptions) -> ActorId {
        let id = self.next_id();
        self.actors.insert(id, Actor::Lines { lines, options });
        id
    }

    #[must_use]
    pub fn actor(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(&id)
    }

    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Register a surface mesh and its actor under a lookup key,
    /// replacing whatever was registered there before.
    pub fn register_surface(&mut self, key: impl Into<String>, mesh: TriangleMesh, actor: ActorId) {
        let key = key.into();
        self.surface_meshes.insert(key.clone(), mesh);
        self.surface_actors.insert(key, actor);
    }

    /// Register contour lines and their actor under a lookup key.
    pub fn register_contours(&mut self, key: impl Into<String>, lines: LineSet, actor: ActorId) {
        let key = key.into();
        self.contour_lines.insert(key.clone(), lines);
        self.surface_actors.insert(key, actor);
    }

    /// Remove everything registered under a key. Returns whether an actor
    /// was removed.
    pub fn remove_surface(&mut self, key: &str) -> bool {
        self.surface_meshes.remove(key);
        self.contour_lines.remove(key);
        match self.surface_actors.remove(key) {
            Some(actor) => {
                self.actors.remove(&actor);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_options() -> MeshRenderOptions {
        MeshRenderOptions {
            scalars: "height".to_owned(),
            colormap: Colormap::Terrain,
            rgb: false,
            show_scalar_bar: false,
        }
    }

    #[test]
    fn actor_ids_are_monotonic() {
        let mut scene = Scene::new();
        let a = scene.add_mesh(TriangleMesh::default(), mesh_options());
        let b = scene.add_lines(
            LineSet::default(),
            LineRenderOptions {
                color: Color::WHITE,
                line_width: 3.0,
            },
        );
        assert!(a < b);
        assert_eq!(scene.actor_count(), 2);
        assert!(matches!(scene.actor(a), Some(Actor::Mesh { .. })));
        assert!(matches!(scene.actor(b), Some(Actor::Lines { .. })));
    }

    #[test]
    fn register_and_remove_round_trip() {
        let mut scene = Scene::new();
        let actor = scene.add_mesh(TriangleMesh::default(), mesh_options());
        scene.register_surface("topography", TriangleMesh::default(), actor);
        assert!(scene.surface_meshes.contains_key("topography"));
        assert_eq!(scene.surface_actors["topography"], actor);

        assert!(scene.remove_surface("topography"));
        assert!(scene.surface_meshes.is_empty());
        assert!(scene.surface_actors.is_empty());
        assert_eq!(scene.actor_count(), 0);
        assert!(!scene.remove_surface("topography"));
    }
}
