// Tuning constants for the proximity motion effect.

// Pointer position used before the first move and after the pointer leaves
// the window; far enough away that nothing is in range.
pub const POINTER_PARKED: f32 = -10_000.0;

// Button preset (stronger, tighter)
pub const BUTTON_MAGNETIC: f32 = 0.115;
pub const BUTTON_ZOOM: f32 = 0.048;
pub const BUTTON_MAX_TILT_DEG: f32 = 4.8;
pub const BUTTON_PROXIMITY_RADIUS: f32 = 1.78;
pub const BUTTON_GLOW_SIZE_PX: f32 = 190.0;

// Card preset (gentler, larger glow)
pub const CARD_MAGNETIC: f32 = 0.075;
pub const CARD_ZOOM: f32 = 0.034;
pub const CARD_MAX_TILT_DEG: f32 = 2.9;
pub const CARD_PROXIMITY_RADIUS: f32 = 1.35;
pub const CARD_GLOW_SIZE_PX: f32 = 290.0;

// Lower bound for a proximity radius override (multiplier of max(w, h))
pub const MIN_PROXIMITY_RADIUS: f32 = 0.05;

// Interaction
pub const HOVER_PROXIMITY_FLOOR: f32 = 0.14;
pub const HOVER_SCALE_BONUS: f32 = 0.008;
pub const PRESS_SCALE_PENALTY: f32 = 0.022;
pub const PRESS_SCALE_PENALTY_STATIC: f32 = 0.012;
pub const STATIC_TRANSFORM_FACTOR: f32 = 0.28; // decorative-only elements move this much

// Shadow
pub const SHADOW_X_BUTTON: f32 = 12.0;
pub const SHADOW_X_CARD: f32 = 16.0;
pub const SHADOW_Y_BASE: f32 = 12.0;
pub const SHADOW_Y_SPAN: f32 = 11.0;
pub const SHADOW_Y_PRESS: f32 = 4.0;
pub const SHADOW_BLUR_BASE: f32 = 20.0;
pub const SHADOW_BLUR_SPAN: f32 = 22.0;
pub const SHADOW_BLUR_PRESS: f32 = 8.0;
pub const SHADOW_ALPHA_BASE: f32 = 0.2;
pub const SHADOW_ALPHA_SPAN: f32 = 0.22;

// Secondary motion
pub const TEXT_COUNTER_FACTOR: f32 = 0.18;
pub const WARP_DEG: f32 = 0.7;
