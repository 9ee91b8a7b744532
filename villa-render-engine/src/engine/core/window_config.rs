use bevy::prelude::*;
use bevy::window::PresentMode;

pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            title: "Villa Visualizer".into(),
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            // Keeps wheel zoom from scrolling the host page.
            prevent_default_event_handling: true,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "Villa Visualizer".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
