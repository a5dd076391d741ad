//! Widget configuration: spec types and validation.
//!
//! A [`WidgetSpec`] is deserialized from JSON and checked by the
//! [`ValidationEngine`] before the widget is built. Validation collects every
//! finding instead of stopping at the first, so a misconfigured widget
//! reports all of its problems at once.

pub mod error_code;
pub mod errors;
pub mod spec;
pub mod validation;

pub use error_code::ErrorCode;
pub use errors::WidgetSpecError;
pub use spec::{SummarySpec, TranslationSpec, WidgetSpec};
pub use validation::{
    Severity, ValidationDiagnostic, ValidationEngine, ValidationReport, ValidationRule,
};
