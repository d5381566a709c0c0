//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Entity identifiers
pub const FIELD_RECORD_ID: &str = "record_id";
pub const FIELD_PROP_URI: &str = "prop_uri";
pub const FIELD_VALUE_URI: &str = "value_uri";
pub const FIELD_VOCAB_DIGEST: &str = "vocab_digest";

// Collection sizes
pub const FIELD_RULE_COUNT: &str = "rule_count";
pub const FIELD_ANNOTATION_COUNT: &str = "annotation_count";
pub const FIELD_VIOLATION_COUNT: &str = "violation_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
