pub const SUCCESS_TARGET: &str = "handset::success";
pub const NOTICE_TARGET: &str = "handset::notice";
pub const FAILURE_TARGET: &str = "handset::failure";

/// Targets that carry results for the user rather than diagnostics.
pub const USER_FACING_TARGETS: [&str; 3] = [SUCCESS_TARGET, NOTICE_TARGET, FAILURE_TARGET];

/// Logs a confirmation line, rendered with the `[+]` marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::macros::SUCCESS_TARGET, $($arg)*)
    };
}

/// Logs a notice that an action changed nothing, rendered with the `[*]` marker.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)*) => {
        $crate::tracing::warn!(target: $crate::macros::NOTICE_TARGET, $($arg)*)
    };
}

/// Logs a failed action, rendered with the `[-]` marker.
#[macro_export]
macro_rules! failure {
    ($($arg:tt)*) => {
        $crate::tracing::error!(target: $crate::macros::FAILURE_TARGET, $($arg)*)
    };
}
