//! Constants used throughout gostarter

/// Root segment of the embedded template bundle.
pub const TEMPLATE_ROOT: &str = "templates";

/// Suffix every bundled template carries.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Go version written into generated projects when none is given.
pub const DEFAULT_GO_VERSION: &str = "1.22";

/// Application version reported by the `version` command.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variables consulted when picking an output mode.
pub mod env {
    pub const CI: &str = "CI";
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Filesystem permissions for generated output (Unix only).
pub mod permissions {
    pub const DIR_MODE: u32 = 0o755;
    pub const FILE_MODE: u32 = 0o644;
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
