//! Slideshow widgets
//!
//! Reusable UI components for drawing a scene.

pub mod help;
pub mod image;
pub mod progress;
pub mod scene_view;

pub use help::HelpOverlay;
pub use image::ImagePanel;
pub use progress::{MarkerState, ProgressIndicator};
pub use scene_view::{
    action_for, ActionControl, SceneCommand, SceneView, SceneViewState, ViewBlock,
};
