use bevy::math::curve::{Curve, EaseFunction, EasingCurve};
use bevy::prelude::*;

/// Opacity multiplier applied to a node and all of its descendants.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Opacity(pub f32);

/// Vertical offset in logical pixels, applied as a top margin.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideOffset(pub f32);

/// Unfaded background colour of a node.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Tint(pub Color);

/// Unfaded text colour of a node.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct TextTint(pub Color);

/// What happens once a tween finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TweenCompletion {
    #[default]
    None,
    HideLoadingScreen,
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TweenCompleted {
    pub entity: Entity,
    pub completion: TweenCompletion,
}

/// One-shot animation of a node's opacity, slide offset and scale.
/// Inserting a new tween replaces the one in flight.
#[derive(Component, Debug, Clone)]
pub struct UiTween {
    delay: f32,
    duration: f32,
    elapsed: f32,
    ease: EaseFunction,
    opacity: Option<(f32, f32)>,
    slide: Option<(f32, f32)>,
    scale: Option<(f32, f32)>,
    completion: TweenCompletion,
}

impl UiTween {
    pub fn new(duration_secs: f32, ease: EaseFunction) -> Self {
        Self {
            delay: 0.0,
            duration: duration_secs,
            elapsed: 0.0,
            ease,
            opacity: None,
            slide: None,
            scale: None,
            completion: TweenCompletion::None,
        }
    }

    pub fn with_delay(mut self, delay_secs: f32) -> Self {
        self.delay = delay_secs;
        self
    }

    pub fn fade(mut self, from: f32, to: f32) -> Self {
        self.opacity = Some((from, to));
        self
    }

    pub fn slide(mut self, from: f32, to: f32) -> Self {
        self.slide = Some((from, to));
        self
    }

    pub fn scale(mut self, from: f32, to: f32) -> Self {
        self.scale = Some((from, to));
        self
    }

    pub fn on_complete(mut self, completion: TweenCompletion) -> Self {
        self.completion = completion;
        self
    }

    /// Eased progress in `[0, 1]`, or `None` while the delay is running.
    pub fn progress(&self) -> Option<f32> {
        let active = self.elapsed - self.delay;
        if active < 0.0 {
            return None;
        }
        let t = if self.duration > 0.0 {
            (active / self.duration).min(1.0)
        } else {
            1.0
        };
        Some(EasingCurve::new(0.0, 1.0, self.ease).sample_clamped(t))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.delay + self.duration
    }

    pub fn tick(&mut self, delta_secs: f32) {
        self.elapsed += delta_secs;
    }
}

fn lerp((from, to): (f32, f32), t: f32) -> f32 {
    from + (to - from) * t
}

pub fn advance_tweens(
    time: Res<Time>,
    mut commands: Commands,
    mut tweens: Query<(
        Entity,
        &mut UiTween,
        Option<&mut Opacity>,
        Option<&mut SlideOffset>,
        Option<&mut Transform>,
    )>,
    mut completed: EventWriter<TweenCompleted>,
) {
    let delta = time.delta_secs();

    for (entity, mut tween, opacity, slide, transform) in &mut tweens {
        tween.tick(delta);
        let Some(t) = tween.progress() else {
            continue;
        };

        if let (Some(range), Some(mut opacity)) = (tween.opacity, opacity) {
            opacity.0 = lerp(range, t);
        }
        if let (Some(range), Some(mut slide)) = (tween.slide, slide) {
            slide.0 = lerp(range, t);
        }
        if let (Some(range), Some(mut transform)) = (tween.scale, transform) {
            transform.scale = Vec3::splat(lerp(range, t));
        }

        if tween.is_finished() {
            commands.entity(entity).remove::<UiTween>();
            completed.write(TweenCompleted {
                entity,
                completion: tween.completion,
            });
        }
    }
}

pub fn apply_slide_offsets(mut nodes: Query<(&SlideOffset, &mut Node), Changed<SlideOffset>>) {
    for (slide, mut node) in &mut nodes {
        node.margin.top = Val::Px(slide.0);
    }
}

/// Multiply every tinted descendant of an `Opacity` root by the root's opacity.
pub fn apply_opacity(
    roots: Query<(Entity, &Opacity)>,
    children: Query<&Children>,
    mut backgrounds: Query<(&Tint, &mut BackgroundColor)>,
    mut texts: Query<(&TextTint, &mut TextColor)>,
) {
    for (root, opacity) in &roots {
        for entity in std::iter::once(root).chain(children.iter_descendants(root)) {
            if let Ok((tint, mut background)) = backgrounds.get_mut(entity) {
                background.set_if_neq(BackgroundColor(faded(tint.0, opacity.0)));
            }
            if let Ok((tint, mut text)) = texts.get_mut(entity) {
                text.set_if_neq(TextColor(faded(tint.0, opacity.0)));
            }
        }
    }
}

fn faded(color: Color, opacity: f32) -> Color {
    color.with_alpha(color.alpha() * opacity.clamp(0.0, 1.0))
}
