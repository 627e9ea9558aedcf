//! Per-frame derivation of motion values from pointer and element geometry.

use crate::channel::{Channel, ChannelValues};
use crate::constants::*;
use crate::tuning::{Tuning, Variant};
use glam::Vec2;

/// Element bounding box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Hidden or detached elements report an empty box.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
}

/// Everything `compute` needs about one element.
#[derive(Clone, Copy, Debug)]
pub struct FrameInput {
    pub rect: Rect,
    pub variant: Variant,
    pub tuning: Tuning,
    pub transform_enabled: bool,
    pub state: InteractionState,
}

/// Derived values for one element in one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameValues {
    pub proximity: f32,
    pub hover: f32,
    pub press: f32,
    pub translate: Vec2,
    pub rotate: Vec2,
    pub scale: f32,
    pub shadow: Vec2,
    pub shadow_blur: f32,
    pub shadow_alpha: f32,
    pub glow: Vec2,
    pub glow_size: f32,
    pub text: Vec2,
    pub warp: Vec2,
}

impl FrameValues {
    pub fn channel(&self, channel: Channel) -> f32 {
        match channel {
            Channel::Proximity => self.proximity,
            Channel::Hover => self.hover,
            Channel::Press => self.press,
            Channel::TranslateX => self.translate.x,
            Channel::TranslateY => self.translate.y,
            Channel::RotateX => self.rotate.x,
            Channel::RotateY => self.rotate.y,
            Channel::Scale => self.scale,
            Channel::ShadowX => self.shadow.x,
            Channel::ShadowY => self.shadow.y,
            Channel::ShadowBlur => self.shadow_blur,
            Channel::ShadowAlpha => self.shadow_alpha,
            Channel::GlowX => self.glow.x,
            Channel::GlowY => self.glow.y,
            Channel::GlowSize => self.glow_size,
            Channel::TextX => self.text.x,
            Channel::TextY => self.text.y,
            Channel::WarpX => self.warp.x,
            Channel::WarpY => self.warp.y,
        }
    }

    pub fn channel_values(&self) -> ChannelValues {
        Channel::ALL.iter().map(|&c| (c, self.channel(c))).collect()
    }
}

/// Geometric closeness of `pointer` to the element: 1 at the centre, 0 at
/// and beyond `max(w, h) * radius_multiplier`.
#[inline]
pub fn proximity(rect: &Rect, pointer: Vec2, radius_multiplier: f32) -> f32 {
    let radius = rect.width.max(rect.height) * radius_multiplier;
    if !(radius > 0.0) {
        return 0.0;
    }
    let distance = (pointer - rect.center()).length();
    (1.0 - distance / radius).clamp(0.0, 1.0)
}

/// Pointer offset from the centre, normalized to [-1, 1] per axis against
/// the half extents.
#[inline]
pub fn normalized_offset(rect: &Rect, pointer: Vec2) -> Vec2 {
    let d = pointer - rect.center();
    Vec2::new(
        (d.x / (rect.width / 2.0)).clamp(-1.0, 1.0),
        (d.y / (rect.height / 2.0)).clamp(-1.0, 1.0),
    )
}

/// Pointer location inside the box as a percentage, clamped to [0, 100].
#[inline]
pub fn glow_position(rect: &Rect, pointer: Vec2) -> Vec2 {
    Vec2::new(
        ((pointer.x - rect.left) / rect.width * 100.0).clamp(0.0, 100.0),
        ((pointer.y - rect.top) / rect.height * 100.0).clamp(0.0, 100.0),
    )
}

/// Derive all motion values. Returns `None` for a degenerate rect.
pub fn compute(input: &FrameInput, pointer: Vec2) -> Option<FrameValues> {
    let rect = &input.rect;
    if rect.is_degenerate() {
        return None;
    }
    let t = &input.tuning;
    let hovered = input.state.hovered;

    let geometric = proximity(rect, pointer, t.proximity_radius);
    let active = if hovered {
        geometric.max(HOVER_PROXIMITY_FLOOR)
    } else {
        geometric
    };

    let n = normalized_offset(rect, pointer);
    let transform_proximity = if input.transform_enabled {
        active
    } else {
        active * STATIC_TRANSFORM_FACTOR
    };
    let translate = Vec2::new(
        n.x * rect.width * t.magnetic * transform_proximity,
        n.y * rect.height * t.magnetic * transform_proximity,
    );
    // Tilting toward the pointer means rotating about the other axis.
    let rotate = Vec2::new(
        -n.y * t.max_tilt * transform_proximity,
        n.x * t.max_tilt * transform_proximity,
    );

    let press = if input.state.pressed { 1.0 } else { 0.0 };
    let press_penalty = if input.transform_enabled {
        PRESS_SCALE_PENALTY
    } else {
        PRESS_SCALE_PENALTY_STATIC
    };
    let hover_bonus = if hovered { HOVER_SCALE_BONUS } else { 0.0 };
    let scale = 1.0 + active * t.zoom + hover_bonus - press * press_penalty;

    let shadow_x_span = match input.variant {
        Variant::Card => SHADOW_X_CARD,
        Variant::Button => SHADOW_X_BUTTON,
    };
    let shadow = Vec2::new(
        -n.x * shadow_x_span * active,
        SHADOW_Y_BASE + n.y * SHADOW_Y_SPAN * active - press * SHADOW_Y_PRESS,
    );

    Some(FrameValues {
        proximity: active,
        hover: if hovered { 1.0 } else { 0.0 },
        press,
        translate,
        rotate,
        scale,
        shadow,
        shadow_blur: SHADOW_BLUR_BASE + active * SHADOW_BLUR_SPAN - press * SHADOW_BLUR_PRESS,
        shadow_alpha: SHADOW_ALPHA_BASE + active * SHADOW_ALPHA_SPAN,
        glow: glow_position(rect, pointer),
        glow_size: t.glow_size,
        text: -translate * TEXT_COUNTER_FACTOR,
        warp: n * WARP_DEG * active,
    })
}
