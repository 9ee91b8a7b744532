use bevy::math::curve::EaseFunction;
use bevy::prelude::*;
use constants::render_settings::{BUTTON_HOVER_SCALE, BUTTON_HOVER_SECS, PANEL_SLIDE_PX};

use super::transitions::{Opacity, SlideOffset, TextTint, Tint, UiTween};
use crate::controls::selection::{ControlEvent, ControlRequest, ControlSource, Selection};
use crate::engine::assets::materials::{MaterialKind, hex_color};
use crate::engine::camera::viewport_camera::ViewPreset;
use crate::engine::interaction::controller::InteractionController;
use crate::engine::scene::lighting::TimeOfDay;
use constants::material::ROOF_DECORATION_COLOR;

const PANEL_BACKGROUND: Color = Color::srgba(0.102, 0.114, 0.161, 0.85);
const BUTTON_IDLE: Color = Color::srgba(1.0, 1.0, 1.0, 0.08);
const HEADING_TEXT: Color = Color::srgba(1.0, 1.0, 1.0, 0.6);

/// Panel hidden until loading finishes; `order` sets its place in the
/// staggered reveal.
#[derive(Component, Debug, Clone, Copy)]
pub struct FadeInPanel {
    pub order: usize,
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresetButton(pub ControlRequest);

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn button_label(request: ControlRequest) -> String {
    match request {
        ControlRequest::WallMaterial(kind) | ControlRequest::RoofMaterial(kind) => {
            title_case(kind.name())
        }
        ControlRequest::TimeOfDay(time) => title_case(time.name()),
        ControlRequest::View(view) => title_case(view.name()),
        ControlRequest::SetAutoRotate(_) | ControlRequest::ToggleAutoRotate => {
            "Auto-rotate".to_string()
        }
    }
}

/// Highlight state of a button. Auto-rotate follows the controller; preset
/// groups follow the selection; view buttons never stay lit.
pub fn is_button_active(
    request: ControlRequest,
    selection: &Selection,
    controller: &InteractionController,
) -> bool {
    match request {
        ControlRequest::SetAutoRotate(_) | ControlRequest::ToggleAutoRotate => {
            controller.auto_rotate
        }
        other => selection.is_active(other),
    }
}

/// Button groups shown in each panel, in reveal order.
pub fn panel_layout() -> Vec<Vec<(&'static str, Vec<ControlRequest>)>> {
    vec![
        vec![
            (
                "Wall material",
                MaterialKind::WALL_CHOICES
                    .into_iter()
                    .map(ControlRequest::WallMaterial)
                    .collect(),
            ),
            (
                "Roof material",
                MaterialKind::ROOF_CHOICES
                    .into_iter()
                    .map(ControlRequest::RoofMaterial)
                    .collect(),
            ),
        ],
        vec![(
            "Time of day",
            TimeOfDay::ALL.into_iter().map(ControlRequest::TimeOfDay).collect(),
        )],
        vec![
            (
                "View",
                ViewPreset::ALL.into_iter().map(ControlRequest::View).collect(),
            ),
            ("Motion", vec![ControlRequest::ToggleAutoRotate]),
        ],
    ]
}

pub fn spawn_control_panel(mut commands: Commands) {
    commands
        .spawn((
            Name::new("Control panels"),
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(20.0),
                left: Val::Px(20.0),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(12.0),
                ..default()
            },
        ))
        .with_children(|column| {
            for (order, groups) in panel_layout().into_iter().enumerate() {
                spawn_panel(column, order, groups);
            }
        });
}

fn spawn_panel(
    parent: &mut ChildSpawnerCommands,
    order: usize,
    groups: Vec<(&'static str, Vec<ControlRequest>)>,
) {
    parent
        .spawn((
            FadeInPanel { order },
            Node {
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(12.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(8.0)),
            Opacity(0.0),
            SlideOffset(PANEL_SLIDE_PX),
            Tint(PANEL_BACKGROUND),
            BackgroundColor(Color::NONE),
        ))
        .with_children(|panel| {
            for (heading, requests) in groups {
                panel.spawn((
                    Text::new(heading),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextTint(HEADING_TEXT),
                    TextColor(Color::NONE),
                ));
                panel
                    .spawn(Node {
                        flex_direction: FlexDirection::Row,
                        column_gap: Val::Px(6.0),
                        ..default()
                    })
                    .with_children(|row| {
                        for request in requests {
                            spawn_button(row, request);
                        }
                    });
            }
        });
}

fn spawn_button(parent: &mut ChildSpawnerCommands, request: ControlRequest) {
    parent
        .spawn((
            Button,
            PresetButton(request),
            Node {
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                ..default()
            },
            BorderRadius::all(Val::Px(4.0)),
            Transform::default(),
            Tint(BUTTON_IDLE),
            BackgroundColor(Color::NONE),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(button_label(request)),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextTint(Color::WHITE),
                TextColor(Color::NONE),
            ));
        });
}

pub fn preset_button_click_system(
    buttons: Query<(&Interaction, &PresetButton), Changed<Interaction>>,
    mut control_events: EventWriter<ControlEvent>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            control_events.write(ControlEvent {
                request: button.0,
                source: ControlSource::Panel,
            });
        }
    }
}

/// Grow on hover, shrink on leave. Lit buttons in a preset group keep
/// whatever scale they have.
pub fn preset_button_hover_system(
    mut commands: Commands,
    buttons: Query<(Entity, &Interaction, &PresetButton, &Transform), Changed<Interaction>>,
    selection: Res<Selection>,
) {
    for (entity, interaction, button, transform) in &buttons {
        if selection.is_active(button.0) {
            continue;
        }

        let target = match interaction {
            Interaction::Hovered => BUTTON_HOVER_SCALE,
            Interaction::None => 1.0,
            Interaction::Pressed => continue,
        };
        commands.entity(entity).insert(
            UiTween::new(BUTTON_HOVER_SECS, EaseFunction::QuadraticOut)
                .scale(transform.scale.x, target),
        );
    }
}

pub fn preset_button_highlight_system(
    selection: Res<Selection>,
    controller: Res<InteractionController>,
    mut buttons: Query<(&PresetButton, &mut Tint)>,
) {
    let active = hex_color(ROOF_DECORATION_COLOR);

    for (button, mut tint) in &mut buttons {
        let color = if is_button_active(button.0, &selection, &controller) {
            active
        } else {
            BUTTON_IDLE
        };
        tint.set_if_neq(Tint(color));
    }
}
