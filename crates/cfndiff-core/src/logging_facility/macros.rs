//! Canonical logging macros
//!
//! Every pipeline operation logs exactly one start event and one end (or
//! end_error) event carrying the canonical fields. Field names come from
//! [`cfndiff_core_types::schema`].

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use cfndiff_core::log_op_start;
/// log_op_start!("run_diff");
/// log_op_start!("run_diff", stack_name = "web");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {{
        tracing::info!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_START,
        );
    }};
    ($op:expr, $($field:tt)*) => {{
        tracing::info!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_START,
            $($field)*
        );
    }};
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use cfndiff_core::log_op_end;
/// log_op_end!("run_diff", duration_ms = 3);
/// log_op_end!("run_diff", duration_ms = 3, changed = false);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {{
        tracing::info!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_END,
            { $crate::cfndiff_core_types::schema::FIELD_DURATION_MS } = $duration,
        );
    }};
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        tracing::info!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_END,
            { $crate::cfndiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            $($field)*
        );
    }};
}

/// Log an operation error
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError).
///
/// # Example
///
/// ```
/// # use cfndiff_core::log_op_error;
/// use cfndiff_core::errors::{ExError, ExErrorKind};
/// let err = ExError::new(ExErrorKind::Parse).with_input("after");
/// log_op_error!("run_diff", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_END_ERROR,
            { $crate::cfndiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::cfndiff_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::cfndiff_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            { $crate::cfndiff_core_types::schema::FIELD_INPUT } = ex_err.input().unwrap_or_default(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            { $crate::cfndiff_core_types::schema::FIELD_COMPONENT } = module_path!(),
            { $crate::cfndiff_core_types::schema::FIELD_OP } = $op,
            { $crate::cfndiff_core_types::schema::FIELD_EVENT } = $crate::cfndiff_core_types::schema::EVENT_END_ERROR,
            { $crate::cfndiff_core_types::schema::FIELD_DURATION_MS } = $duration,
            { $crate::cfndiff_core_types::schema::FIELD_ERR_KIND } = ?ex_err.kind(),
            { $crate::cfndiff_core_types::schema::FIELD_ERR_CODE } = ex_err.code(),
            { $crate::cfndiff_core_types::schema::FIELD_INPUT } = ex_err.input().unwrap_or_default(),
            $($field)*
        );
    }};
}
