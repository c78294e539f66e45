//! Configuration and constants for the CLI.

/// Symbols allowed in generated player identifiers
pub const ID_ALPHABET: &[u8] = b"234567abcdefghijklmnopqrstuvwxyz";

/// Length of a generated player identifier
pub const ID_LENGTH: usize = 8;

/// Number of players in a freshly generated roster
pub const ROSTER_SIZE: usize = 40;

/// Display name prefix for generated players ("DEFAULT1", "DEFAULT2", ...)
pub const DEFAULT_NAME_PREFIX: &str = "DEFAULT";

/// Snapshot files in a history directory are named `save_<unix seconds>[.json]`
pub const SNAPSHOT_PREFIX: &str = "save_";

/// Where `init` writes the fresh roster
pub const DEFAULT_SAVE_PATH: &str = "save.json";

/// Where `graphs` writes charts
pub const DEFAULT_GRAPHS_DIR: &str = "graphs";

// Chart defaults (1920x1080, legend laid out below the plot)
pub const DEFAULT_CHART_WIDTH: usize = 1920;
pub const DEFAULT_CHART_HEIGHT: usize = 1080;
pub const LEGEND_COLUMNS: usize = 8;

/// Largest accepted chart side, bounding the rasterization canvas
pub const MAX_CHART_SIDE: usize = 8192;

/// Axis labels are printed in the event's local time (UTC-4)
pub const DEFAULT_UTC_OFFSET_HOURS: i32 = -4;
