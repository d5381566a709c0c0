//! Passes built on the winnowing engine: violation detection and
//! justification tracing

pub mod justification;
pub mod violations;

pub use justification::{Justification, JustificationTracer, Target};
pub use violations::{Violation, ViolationCause, ViolationDetector};
