//! Algorithm constants and runtime configuration defaults

// Hard bound on combinatorial blowup (rule_count^iterations growth)
/// Maximum total instances the generator may accumulate
pub const MAX_INSTANCES: usize = 100_000;

/// Half-extent of the parent unit volume centered at the origin
pub const PARENT_HALF_EXTENT: f64 = 0.5;

// Keeps boundary-straddling cell centers out of the parent volume test
/// Numeric tolerance for the parent-volume membership test
pub const PARENT_VOLUME_EPSILON: f64 = 0.001;

// Default values for configurable parameters
/// Default grid cell size for frontier queries
pub const DEFAULT_STEP: f64 = 0.5;

/// Default recursion depth for new configurations
pub const DEFAULT_ITERATIONS: u32 = 3;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_instances";
