use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::lighting::FOG_COLOR;
use constants::material::ROOF_DECORATION_COLOR;
use constants::render_settings::{
    LOADING_FADE_SECS, LOADING_HOLD_SECS, PANEL_FADE_IN_SECS, PANEL_FADE_IN_STAGGER_SECS,
    PANEL_SLIDE_PX,
};

use super::control_panel::FadeInPanel;
use super::transitions::{Opacity, TextTint, Tint, TweenCompleted, TweenCompletion, UiTween};
use crate::engine::assets::materials::hex_color;
use crate::engine::loading::progress::LoadingProgress;
use crate::rpc::web_rpc::WebRpcInterface;

#[derive(Component)]
pub struct LoadingScreen;

#[derive(Component)]
pub struct LoadingBarFill;

pub fn spawn_loading_screen(mut commands: Commands) {
    let background = hex_color(FOG_COLOR);

    commands
        .spawn((
            Name::new("Loading screen"),
            LoadingScreen,
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                row_gap: Val::Px(16.0),
                ..default()
            },
            GlobalZIndex(100),
            Opacity(1.0),
            Tint(background),
            BackgroundColor(background),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading villa..."),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextTint(Color::WHITE),
                TextColor(Color::WHITE),
            ));

            let track = Color::srgba(1.0, 1.0, 1.0, 0.15);
            parent
                .spawn((
                    Node {
                        width: Val::Px(300.0),
                        height: Val::Px(4.0),
                        ..default()
                    },
                    Tint(track),
                    BackgroundColor(track),
                ))
                .with_children(|bar| {
                    let fill = hex_color(ROOF_DECORATION_COLOR);
                    bar.spawn((
                        LoadingBarFill,
                        Node {
                            width: Val::Percent(0.0),
                            height: Val::Percent(100.0),
                            ..default()
                        },
                        Tint(fill),
                        BackgroundColor(fill),
                    ));
                });
        });
}

pub fn update_loading_bar(
    loading_progress: Res<LoadingProgress>,
    mut fills: Query<&mut Node, With<LoadingBarFill>>,
) {
    if !loading_progress.is_changed() {
        return;
    }

    for mut node in &mut fills {
        node.width = Val::Percent(loading_progress.percent());
    }
}

/// Hold the full bar briefly, then fade the overlay out.
pub fn start_loading_fade(mut commands: Commands, screens: Query<Entity, With<LoadingScreen>>) {
    for screen in &screens {
        commands.entity(screen).insert(
            UiTween::new(LOADING_FADE_SECS, EaseFunction::QuadraticOut)
                .with_delay(LOADING_HOLD_SECS)
                .fade(1.0, 0.0)
                .on_complete(TweenCompletion::HideLoadingScreen),
        );
    }
}

/// Staggered fade-in for every panel, in panel order.
pub fn panel_reveal_tween(order: usize) -> UiTween {
    UiTween::new(PANEL_FADE_IN_SECS, EaseFunction::QuadraticOut)
        .with_delay(order as f32 * PANEL_FADE_IN_STAGGER_SECS)
        .fade(0.0, 1.0)
        .slide(PANEL_SLIDE_PX, 0.0)
}

pub fn finish_loading_screen(
    mut completed: EventReader<TweenCompleted>,
    mut commands: Commands,
    mut screens: Query<&mut Node, With<LoadingScreen>>,
    panels: Query<(Entity, &FadeInPanel)>,
    mut rpc_interface: ResMut<WebRpcInterface>,
) {
    for event in completed.read() {
        if event.completion != TweenCompletion::HideLoadingScreen {
            continue;
        }
        if let Ok(mut node) = screens.get_mut(event.entity) {
            node.display = Display::None;
        }

        for (entity, panel) in &panels {
            commands.entity(entity).insert(panel_reveal_tween(panel.order));
        }

        info!("Loading complete, revealing {} panels", panels.iter().count());
        rpc_interface.send_notification("loading_complete", serde_json::json!({}));
    }
}
