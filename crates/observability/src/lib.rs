//! Process-wide logging setup shared by the binaries.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::LogSettings::from_env());
}

/// Tracing subscriber configuration.
pub mod tracing;
