/// Height removed from the falling panel on every tick.
pub const FALL_STEP: f32 = 0.3;

/// A falling panel at or below this height is released.
pub const REST_THRESHOLD: f32 = 0.01;

/// Angular frequency of the camera sweep, in radians per millisecond.
pub const SWEEP_FREQUENCY: f64 = 0.0003;

/// Peak camera x offset of the sweep.
pub const SWEEP_AMPLITUDE: f64 = 40.0;
