//=========================================================================
// Error Types
//=========================================================================
//
// Scene errors are split by severity:
// - `NotFound` is recoverable: the lookup is reported and nothing changes.
// - `SurfaceUnavailable` is fatal for the scene being constructed.
//
// `EngineError` is what setup and `Engine::run` surface to the caller.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::platform_bridge::PlatformError;

//=== SceneError ==========================================================

/// Errors raised while constructing or addressing scenes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// No scene is registered under the id.
    #[error("scene {id:?} not found")]
    NotFound { id: String },

    /// The surface provider could not supply a drawing context.
    #[error("could not create a {width}x{height} drawing context for scene {id:?}")]
    SurfaceUnavailable { id: String, width: u32, height: u32 },
}

//=== EngineError =========================================================

/// Fatal engine errors.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The primary drawing surface could not be acquired during setup.
    #[error("could not create the {width}x{height} primary drawing context")]
    PrimarySurfaceUnavailable { width: u32, height: u32 },

    #[error(transparent)]
    Scene(#[from] SceneError),

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_error_messages_name_the_scene() {
        let err = SceneError::NotFound { id: "ui".into() };
        assert_eq!(err.to_string(), "scene \"ui\" not found");

        let err = SceneError::SurfaceUnavailable { id: "bg".into(), width: 0, height: 600 };
        assert!(err.to_string().contains("0x600"));
        assert!(err.to_string().contains("\"bg\""));
    }

    #[test]
    fn engine_error_wraps_scene_error_transparently() {
        let inner = SceneError::NotFound { id: "menu".into() };
        let err: EngineError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }

    #[test]
    fn engine_error_is_error_trait() {
        fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
        assert_error::<EngineError>();
    }
}
