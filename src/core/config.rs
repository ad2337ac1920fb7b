/// Visual and behavioral constants.

// --- Visual colors (hex) ---
pub const BG_COLOR: u32 = 0x0A1612;
pub const DEFAULT_RIPPLE_COLOR: u32 = 0xFFFFFF;
pub const HUD_TEXT: u32 = 0x8B949E;

// --- Ripple animation ---
pub const DEFAULT_RIPPLE_COUNT: u32 = 4;
pub const DEFAULT_CYCLE_MS: u64 = 100_000;
pub const DEFAULT_TICK_MS: u64 = 20;
// Full-alpha baseline, the fade subtracted from it, and the visibility floor.
pub const ALPHA_OPAQUE: i32 = 255;
pub const ALPHA_FADE: i32 = 50;
pub const ALPHA_FLOOR: i32 = 10;
// The scan overlay engages once the last ripple's progress crosses this.
pub const SCAN_START_PROGRESS: u32 = 99;

// --- Window ---
pub const DEFAULT_SIZE: i32 = 900;
pub const FRAME_SLEEP_MS: u64 = 16;
