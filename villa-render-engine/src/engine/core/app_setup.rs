use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::camera::viewport_camera::{CameraRig, camera_rig_system, spawn_camera};
use crate::engine::core::app_state::{AppState, transition_to_running};
use crate::engine::core::window_config::create_window_config;
use crate::engine::interaction::controller::InteractionController;
use crate::engine::interaction::input::pointer_input_system;
use crate::engine::interaction::rotation::RotationState;
use crate::engine::loading::progress::{LoadingProgress, loading_progress_system};
use crate::engine::loading::settings_loader::{
    SettingsLoader, load_settings_system, start_loading,
};
use crate::engine::scene::VillaScenePlugin;
use crate::engine::systems::fps_tracking::fps_notification_system;
use crate::engine::systems::render_loop::villa_rotation_system;
// Controls, UI and Web RPC
use crate::controls::ControlsPlugin;
use crate::rpc::web_rpc::WebRpcPlugin;
use crate::ui::UiPlugin;

#[cfg(not(target_arch = "wasm32"))]
use crate::engine::core::app_state::FpsText;
#[cfg(not(target_arch = "wasm32"))]
use crate::engine::systems::fps_tracking::fps_text_update_system;

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers ViewerSettings as a loadable asset type from JSON files.
        .add_plugins(JsonAssetPlugin::<ViewerSettings>::new(&["json"]))
        .add_plugins(WebRpcPlugin)
        .add_plugins(ControlsPlugin)
        .add_plugins(VillaScenePlugin)
        .add_plugins(UiPlugin);

    app.init_resource::<LoadingProgress>()
        .init_resource::<SettingsLoader>()
        .init_resource::<RotationState>()
        .init_resource::<InteractionController>()
        .init_resource::<CameraRig>();

    app.add_systems(Startup, (setup, start_loading).chain())
        .add_systems(
            Update,
            (
                loading_progress_system,
                load_settings_system,
                transition_to_running,
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        );

    // The villa keeps turning behind the loading overlay; input waits for Running.
    app.add_systems(
        Update,
        (
            pointer_input_system.run_if(in_state(AppState::Running)),
            villa_rotation_system,
            camera_rig_system,
        )
            .chain(),
    )
    .add_systems(
        Update,
        fps_notification_system.run_if(in_state(AppState::Running)),
    );

    // Add fps_text_update_system only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        app.add_systems(Update, fps_text_update_system);
    }

    app
}

// Startup system that only handles basic initialisation
fn setup(mut commands: Commands, rig: Res<CameraRig>) {
    spawn_camera(&mut commands, &rig);

    #[cfg(not(target_arch = "wasm32"))]
    {
        create_native_overlays(&mut commands);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn create_native_overlays(commands: &mut Commands) {
    commands.spawn((
        Text::new("FPS: "),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(1., 0., 0.)),
        Node {
            position_type: PositionType::Absolute,
            bottom: Val::Px(12.0),
            right: Val::Px(12.0),
            ..default()
        },
        FpsText,
    ));
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    DefaultPlugins.set(window_config).set(asset_config)
}
