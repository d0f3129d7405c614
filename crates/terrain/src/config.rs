pub const DEFAULT_MAP_SIZE: f32 = 100.0;
pub const DEFAULT_SAMPLE_SPACING: f32 = 1.0;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_BASE_RANDOM_AMPLITUDE: f32 = 0.5;

/// Substituted when a negative random coefficient is configured.
pub const DEFAULT_RANDOM_COEFFICIENT: f32 = 0.8;
/// Substituted when a negative random decay factor is configured.
pub const DEFAULT_RANDOM_DECAY: f32 = 0.95;

/// Smallest grid the subdivision produces: one quad split once (3x3 samples).
pub const MIN_GRID_SIZE: usize = 3;

/// Name given to the generated tile mesh.
pub const TILE_MESH_NAME: &str = "LandscapeSection1";

// ---------------------------------------------------------------------------
// Elevation band thresholds (world-space Y, half-open intervals)
// ---------------------------------------------------------------------------

/// Vertices strictly below this are sand.
pub const SAND_MAX_Y: f32 = -25.0;
/// Vertices in `[SAND_MAX_Y, LOWLAND_MAX_Y)` are light green.
pub const LOWLAND_MAX_Y: f32 = 30.0;
/// Vertices in `[LOWLAND_MAX_Y, HIGHLAND_MAX_Y)` are green; at or above is rock.
pub const HIGHLAND_MAX_Y: f32 = 110.0;

/// Largest subdivision span the dimension rule will grow to (16385x16385 samples).
pub const MAX_GRID_SPAN: usize = 1 << 14;
