//! Logging utilities for symantec-ssl
//!
//! Re-exports tracing macros with log_* naming convention for consistency.

pub use tracing::{debug as log_debug, error as log_error, info as log_info, warn as log_warn};
