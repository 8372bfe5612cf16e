//! Simulation constants and tuning parameters.

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick at the default tick rate.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Direction set ---

/// Smallest allowed number of candidate directions.
pub const MIN_DIRECTIONS: usize = 4;

/// Largest allowed number of candidate directions.
pub const MAX_DIRECTIONS: usize = 24;

// --- Obstacle sensing ---

/// Lower bound for the short-range sensor length.
pub const MIN_OBSTACLE_SENSITIVITY: f32 = 0.01;

/// Upper bound for the short-range sensor length.
pub const MAX_OBSTACLE_SENSITIVITY: f32 = 1000.0;

/// Penalty divisor applied to the directions adjacent to a hit.
pub const NEAR_NEIGHBOR_DIVISOR: f32 = 2.0;

/// Penalty divisor applied to the directions two steps from a hit.
pub const FAR_NEIGHBOR_DIVISOR: f32 = 3.0;

/// Penalty value at which an orbiting comrade is tolerated the most.
pub const COMRADE_SEPARATION_BAND: f32 = 0.65;

// --- Obstruction lock ---

/// Weight of the escape heading bias added while locked.
pub const ESCAPE_HEADING_BIAS: f32 = 0.4;

// --- Long-range estimation ---

/// Length of the "unbounded" wall probes.
pub const LONG_RANGE_RAY_LENGTH: f32 = 9999.0;

/// Tangential/reverse alignment above which the detour probe runs.
pub const DETOUR_PROBE_THRESHOLD: f32 = 0.2;

// --- Motion ---

/// Multiplier applied to `smoothing * dt` for the heading blend.
pub const HEADING_BLEND_RATE: f32 = 10.0;
