/// Centralized logging macros for the actor system
///
/// Thin wrappers over the `log` facade so every actor logs through the same
/// subscriber the embedding process installs (`env_logger` or similar). Kept
/// as macros so call sites stay uniform if the backend ever changes.
///
/// # Example
/// ```
/// use softap_runtime::actor_debug;
/// actor_debug!("SoftApActor: {} → {}", "Idle", "Enabling");
/// ```
#[macro_export]
macro_rules! actor_debug {
    ($($arg:tt)*) => {
        $crate::log::debug!($($arg)*)
    };
}

/// Log info-level message
///
/// Use for important state changes and listener-facing events
#[macro_export]
macro_rules! actor_info {
    ($($arg:tt)*) => {
        $crate::log::info!($($arg)*)
    };
}

/// Log warning-level message
///
/// Use for recoverable errors and unexpected conditions (best-effort
/// teardown failures, dropped diagnostics)
#[macro_export]
macro_rules! actor_warn {
    ($($arg:tt)*) => {
        $crate::log::warn!($($arg)*)
    };
}

/// Log error-level message
///
/// Use for critical errors that should always be visible
#[macro_export]
macro_rules! actor_error {
    ($($arg:tt)*) => {
        $crate::log::error!($($arg)*)
    };
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use crate::{actor_debug, actor_error, actor_info, actor_warn};

    #[test]
    fn test_logging_macros_compile() {
        actor_debug!("test debug");
        actor_info!("test info");
        actor_warn!("test warn");
        actor_error!("test error");
    }

    #[test]
    fn test_logging_with_format_args() {
        actor_debug!("SoftApActor: {} → {}", "Idle", "Enabling");
        actor_info!("tethering active on {}", "wlan0");
        actor_warn!("stopAccessPoint failed on {}: {}", "wlan0", "unreachable");
        actor_error!("listener channel closed: {}", "receiver dropped");
    }
}
