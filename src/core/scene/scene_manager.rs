//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, activation, and ordered update/render.
//
// Scenes are stored in a HashMap by id; the active set references ids.
// Traversal order is ascending z-index with registration order as the
// tie-break, so lower layers are drawn first and higher ones on top.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::error::SceneError;
use crate::core::surface::WindowMetrics;

//=== Registered Scene ====================================================

struct RegisteredScene {
    scene: Scene,
    registration: u64,
}

//=== Scene Manager =======================================================

/// Owns the known scenes and the subset that is active.
///
/// Supports both layered (many active scenes) and switch-style (one
/// active scene, see [`switch_scene`](Self::switch_scene)) usage.
#[derive(Default)]
pub struct SceneManager {
    scenes: HashMap<String, RegisteredScene>,
    active: HashSet<String>,
    next_registration: u64,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates an empty manager.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: HashSet::new(),
            next_registration: 0,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under its id.
    ///
    /// An existing scene with the same id is replaced. The active set is
    /// not touched: if the id was active, the replacement is active.
    pub fn add_scene(&mut self, scene: Scene) {
        let id = scene.id().to_string();
        let registration = self.next_registration;
        self.next_registration += 1;

        if self.scenes.insert(id.clone(), RegisteredScene { scene, registration }).is_some() {
            warn!("Scene {} was already registered and has been replaced", id);
        } else {
            debug!("Registered scene {}", id);
        }
    }

    //--- Activation -------------------------------------------------------

    /// Adds a registered scene to the active set.
    ///
    /// # Errors
    ///
    /// [`SceneError::NotFound`] if `id` is not registered; the active set
    /// is left unchanged.
    pub fn activate_scene(&mut self, id: &str) -> Result<(), SceneError> {
        self.ensure_registered(id)?;

        if self.active.insert(id.to_string()) {
            info!("Activated scene {}", id);
        } else {
            debug!("Scene {} is already active", id);
        }
        Ok(())
    }

    /// Removes a registered scene from the active set.
    ///
    /// Deactivating a registered but inactive scene is a no-op.
    ///
    /// # Errors
    ///
    /// [`SceneError::NotFound`] if `id` is not registered.
    pub fn deactivate_scene(&mut self, id: &str) -> Result<(), SceneError> {
        self.ensure_registered(id)?;

        if self.active.remove(id) {
            info!("Deactivated scene {}", id);
        }
        Ok(())
    }

    /// Makes `id` the only active scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::NotFound`] if `id` is not registered; the previously
    /// active scenes stay active.
    pub fn switch_scene(&mut self, id: &str) -> Result<(), SceneError> {
        self.ensure_registered(id)?;

        self.active.clear();
        self.active.insert(id.to_string());
        info!("Switched to scene {}", id);
        Ok(())
    }

    //--- Update Loop ------------------------------------------------------

    /// Updates active scenes in stacking order.
    ///
    /// Each scene's surface is synchronised to the window size first.
    pub fn update(&mut self, dt: f64, window: &WindowMetrics) {
        for id in self.render_order() {
            if let Some(entry) = self.scenes.get_mut(&id) {
                window.sync_surface(entry.scene.surface_mut());
                entry.scene.update(dt);
            }
        }
    }

    /// Renders active scenes in stacking order, lowest z-index first.
    pub fn render(&mut self, window: &WindowMetrics) {
        for id in self.render_order() {
            if let Some(entry) = self.scenes.get_mut(&id) {
                window.sync_surface(entry.scene.surface_mut());
                entry.scene.render();
            }
        }
    }

    /// Synchronises every active scene's surface to the window size.
    pub fn sync_surfaces(&mut self, window: &WindowMetrics) {
        for id in self.render_order() {
            if let Some(entry) = self.scenes.get_mut(&id) {
                window.sync_surface(entry.scene.surface_mut());
            }
        }
    }

    //--- Queries ----------------------------------------------------------

    /// Active scene ids in traversal order.
    pub fn render_order(&self) -> Vec<String> {
        let mut active: Vec<&RegisteredScene> = self
            .active
            .iter()
            .filter_map(|id| self.scenes.get(id))
            .collect();

        active.sort_by_key(|entry| (entry.scene.z_index(), entry.registration));
        active.iter().map(|entry| entry.scene.id().to_string()).collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.scenes.contains_key(id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.contains(id)
    }

    pub fn scene(&self, id: &str) -> Option<&Scene> {
        self.scenes.get(id).map(|entry| &entry.scene)
    }

    pub fn scene_mut(&mut self, id: &str) -> Option<&mut Scene> {
        self.scenes.get_mut(id).map(|entry| &mut entry.scene)
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Number of active scenes.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    //--- Internal Helpers -------------------------------------------------

    fn ensure_registered(&self, id: &str) -> Result<(), SceneError> {
        if self.scenes.contains_key(id) {
            Ok(())
        } else {
            error!("Scene {} not found.", id);
            Err(SceneError::NotFound { id: id.to_string() })
        }
    }
}

//=== Tests ===============================================================
