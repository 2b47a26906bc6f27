//! Logging utilities
//!
//! Provides logging setup and configuration.

/// Installs `env_logger`, honouring `RUST_LOG`. Later calls are no-ops, so
/// every test may call this.
pub fn init() {
    let _ = env_logger::builder().is_test(cfg!(test)).try_init();
}
