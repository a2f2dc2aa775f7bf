//! Generation constants and runtime configuration defaults

// Id supply
/// Smallest prime handed out as a piece id
pub const FIRST_PRIME_ID: u64 = 3;

/// Smallest sieve bound tried when searching for prime ids
pub const MIN_SIEVE_LIMIT: usize = 64;

// Caps sieve memory at roughly 12 MiB of bits
/// Largest sieve bound the prime supplier will grow to
pub const MAX_SIEVE_LIMIT: usize = 100_000_000;

// Keeps every pairwise edge product far below u64::MAX
/// Maximum number of pieces in a single puzzle
pub const MAX_PIECES: usize = 1_000_000;

// Export settings
/// File name of the fully populated view
pub const SOLUTION_FILE_NAME: &str = "solution.csv";
/// File name of the redacted view
pub const PROBLEM_FILE_NAME: &str = "problem.csv";
/// Column order shared by both exported views
pub const CSV_HEADER: [&str; 8] = [
    "id",
    "edge_top",
    "edge_right",
    "edge_bottom",
    "edge_left",
    "orientation",
    "row",
    "col",
];

// Logging
/// Filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "puzzgen=info";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
