use bevy::asset::LoadState;
use bevy::prelude::*;
use constants::path::SETTINGS_ASSET_PATH;

use crate::controls::selection::Selection;
use crate::engine::assets::viewer_settings::ViewerSettings;
use crate::engine::camera::viewport_camera::CameraRig;
use crate::engine::interaction::controller::InteractionController;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Resource, Default)]
pub struct SettingsLoader {
    handle: Option<Handle<ViewerSettings>>,
}

pub fn start_loading(mut settings_loader: ResMut<SettingsLoader>, asset_server: Res<AssetServer>) {
    settings_loader.handle = Some(asset_server.load(SETTINGS_ASSET_PATH));
}

/// Copy startup settings into the live selection, controller and camera.
pub fn apply_settings(
    settings: &ViewerSettings,
    selection: &mut Selection,
    controller: &mut InteractionController,
    rig: &mut CameraRig,
) {
    *selection = settings.selection();
    controller.auto_rotate = settings.auto_rotate;
    rig.jump_to(settings.view);
}

/// Wait for the settings asset. A failed load falls back to defaults.
pub fn load_settings_system(
    mut loading_progress: ResMut<LoadingProgress>,
    settings_loader: Res<SettingsLoader>,
    asset_server: Res<AssetServer>,
    settings_assets: Res<Assets<ViewerSettings>>,
    mut selection: ResMut<Selection>,
    mut controller: ResMut<InteractionController>,
    mut rig: ResMut<CameraRig>,
) {
    if loading_progress.settings_applied {
        return;
    }
    let Some(ref handle) = settings_loader.handle else {
        return;
    };

    let settings = if let Some(settings) = settings_assets.get(handle) {
        info!("Viewer settings loaded from {}", SETTINGS_ASSET_PATH);
        settings.clone()
    } else if let Some(LoadState::Failed(error)) = asset_server.get_load_state(handle.id()) {
        warn!("Falling back to default viewer settings: {}", error);
        ViewerSettings::default()
    } else {
        return;
    };

    apply_settings(&settings, &mut selection, &mut controller, &mut rig);
    loading_progress.settings_applied = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::materials::MaterialKind;
    use crate::engine::camera::viewport_camera::ViewPreset;
    use crate::engine::scene::lighting::TimeOfDay;

    #[test]
    fn settings_reach_every_target() {
        let settings = ViewerSettings {
            wall_material: MaterialKind::Glass,
            roof_material: MaterialKind::Tiles,
            time_of_day: TimeOfDay::Sunset,
            auto_rotate: false,
            view: ViewPreset::Top,
        };
        let mut selection = Selection::default();
        let mut controller = InteractionController::default();
        let mut rig = CameraRig::default();

        apply_settings(&settings, &mut selection, &mut controller, &mut rig);

        assert_eq!(selection.wall_material, MaterialKind::Glass);
        assert_eq!(selection.roof_material, MaterialKind::Tiles);
        assert_eq!(selection.time_of_day, TimeOfDay::Sunset);
        assert!(!controller.auto_rotate);
        assert_eq!(rig.position(), ViewPreset::Top.position());
        assert!(!rig.is_flying());
    }
}
