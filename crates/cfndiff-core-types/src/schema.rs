//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent between the comparison
//! pipeline, the CLI and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_RUN_ID: &str = "run_id";

// Comparison context
pub const FIELD_STACK_NAME: &str = "stack_name";
pub const FIELD_MODE: &str = "mode";
pub const FIELD_FORMAT: &str = "format";
pub const FIELD_INPUT: &str = "input";
pub const FIELD_CHANGED: &str = "changed";

// Collection sizes
pub const FIELD_PARAM_COUNT: &str = "param_count";
pub const FIELD_REDACTED_COUNT: &str = "redacted_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_DEGRADED: &str = "degraded";
