//! Generation constants and runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default field width in cells
pub const DEFAULT_WIDTH: usize = 16;
/// Default field height in cells
pub const DEFAULT_HEIGHT: usize = 16;
/// Weight of an element kind without an explicit override
pub const DEFAULT_CATEGORY_WEIGHT: f64 = 1.0;
/// Cycles shorter than this are cut by the minimum-length strategy
pub const DEFAULT_MIN_CYCLE_LENGTH: usize = 15;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed field dimension
pub const MAX_FIELD_DIMENSION: usize = 1_000;

// Bounds keeping repair loops finite
/// Maximum number of strategy invocations for isolated areas
pub const MAX_REPAIR_ROUNDS: usize = 10_000;
/// Maximum number of cuts attempted inside one area
pub const MAX_CUTS_PER_AREA: usize = 1_000;
/// Number of far dead-ends considered as teleporter partners
pub const TELEPORTER_PARTNER_LIMIT: usize = 8;

// Provider identifiers for restrictions added by repair strategies
/// Provider of restrictions added by the random merge strategy
pub const RANDOM_MERGE_PROVIDER: u32 = 1;
/// Provider of restrictions added by the one-way merge strategy
pub const ONE_WAY_MERGE_PROVIDER: u32 = 2;
/// Provider of restrictions added by the teleporter merge strategy
pub const TELEPORTER_MERGE_PROVIDER: u32 = 3;
/// Provider of restrictions added by the minimum cycle length strategy
pub const MIN_CYCLE_PROVIDER: u32 = 4;
/// Provider of restrictions added by the edge cutting strategy
pub const EDGE_CUTTING_PROVIDER: u32 = 5;

// Logging and progress display
/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "labyrinth=warn";
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
