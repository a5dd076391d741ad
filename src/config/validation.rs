//! Validation engine for widget specifications.
//!
//! The engine runs all registered [`ValidationRule`]s against a
//! [`WidgetSpec`](super::spec::WidgetSpec) and collects every diagnostic
//! into a [`ValidationReport`] — it never short-circuits on the first error,
//! so users see all problems at once.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use briefwire::config::ValidationEngine;
//!
//! let engine = ValidationEngine::with_defaults();
//! let report = engine.validate(&spec);
//! if report.has_errors() {
//!     for err in report.errors() {
//!         eprintln!("{err}");
//!     }
//! }
//! ```

use serde::Serialize;

use super::error_code::ErrorCode;
use super::errors::WidgetSpecError;
use super::spec::WidgetSpec;
use crate::types::Language;

// ─── Severity ───────────────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

// ─── Diagnostic ─────────────────────────────────────────────────────────────

/// A single validation finding — an error or warning attached to a
/// [`WidgetSpecError`] that carries the code, path, message, and hint.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationDiagnostic {
    pub severity: Severity,
    #[serde(flatten)]
    pub error: WidgetSpecError,
}

impl ValidationDiagnostic {
    pub fn error(err: WidgetSpecError) -> Self {
        Self {
            severity: Severity::Error,
            error: err,
        }
    }

    pub fn warning(err: WidgetSpecError) -> Self {
        Self {
            severity: Severity::Warning,
            error: err,
        }
    }
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// Collected diagnostics from running all validation rules.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<ValidationDiagnostic>,
}

impl ValidationReport {
    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &WidgetSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .map(|d| &d.error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &WidgetSpecError> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .map(|d| &d.error)
    }

    /// Returns `true` if any diagnostic is an error.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        !self.has_errors()
    }

    /// Total number of diagnostics (errors + warnings).
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

// ─── Rule trait ─────────────────────────────────────────────────────────────

/// A single validation rule that inspects a [`WidgetSpec`] and returns
/// zero or more diagnostics.
///
/// Rules are stateless and must be `Send + Sync` so they can be shared
/// across threads (e.g., in a long-lived validation engine).
pub trait ValidationRule: Send + Sync {
    /// Short, stable identifier for this rule (e.g., `"translation_targets"`).
    fn name(&self) -> &str;

    /// Inspect `spec` and return any findings.
    fn validate(&self, spec: &WidgetSpec) -> Vec<ValidationDiagnostic>;
}

// ─── Engine ─────────────────────────────────────────────────────────────────

/// Runs a set of [`ValidationRule`]s against a [`WidgetSpec`] and collects
/// all diagnostics into a [`ValidationReport`].
pub struct ValidationEngine {
    rules: Vec<Box<dyn ValidationRule>>,
}

impl ValidationEngine {
    /// Create an empty engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create an engine pre-loaded with the default rule set.
    pub fn with_defaults() -> Self {
        let mut engine = Self::new();
        engine.add_rule(Box::new(TargetSentencesRule));
        engine.add_rule(Box::new(MinCharsRule));
        engine.add_rule(Box::new(TranslationTargetsRule));
        engine.add_rule(Box::new(UnknownFieldsRule));
        engine
    }

    /// Register an additional rule.
    pub fn add_rule(&mut self, rule: Box<dyn ValidationRule>) {
        self.rules.push(rule);
    }

    /// Run every rule against `spec`.
    pub fn validate(&self, spec: &WidgetSpec) -> ValidationReport {
        let mut report = ValidationReport::default();
        for rule in &self.rules {
            report.diagnostics.extend(rule.validate(spec));
        }
        report
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

/// A zero sentence target makes every summary degenerate.
struct TargetSentencesRule;

impl ValidationRule for TargetSentencesRule {
    fn name(&self) -> &str {
        "target_sentences"
    }

    fn validate(&self, spec: &WidgetSpec) -> Vec<ValidationDiagnostic> {
        if spec.summary.target_sentences == 0 {
            vec![ValidationDiagnostic::error(
                WidgetSpecError::new(
                    ErrorCode::ZeroTargetSentences,
                    "summary.target_sentences",
                    "target_sentences must be at least 1",
                )
                .with_hint("use 1 or more; the default is 3"),
            )]
        } else {
            Vec::new()
        }
    }
}

/// A zero length threshold shows the summarize offer for every message.
struct MinCharsRule;

impl ValidationRule for MinCharsRule {
    fn name(&self) -> &str {
        "min_chars"
    }

    fn validate(&self, spec: &WidgetSpec) -> Vec<ValidationDiagnostic> {
        if spec.summary.min_chars == 0 {
            vec![ValidationDiagnostic::warning(
                WidgetSpecError::new(
                    ErrorCode::ZeroMinChars,
                    "summary.min_chars",
                    "a zero threshold offers a summary for every message",
                )
                .with_hint("the default is 150"),
            )]
        } else {
            Vec::new()
        }
    }
}

/// Every translation target must be a supported language code.
struct TranslationTargetsRule;

impl ValidationRule for TranslationTargetsRule {
    fn name(&self) -> &str {
        "translation_targets"
    }

    fn validate(&self, spec: &WidgetSpec) -> Vec<ValidationDiagnostic> {
        let mut diagnostics = Vec::new();
        for (i, code) in spec.translation.targets.iter().enumerate() {
            if Language::from_code(code).is_none() {
                let supported: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
                diagnostics.push(ValidationDiagnostic::error(
                    WidgetSpecError::new(
                        ErrorCode::UnknownLanguage,
                        format!("translation.targets[{i}]"),
                        format!("unsupported language code `{code}`"),
                    )
                    .with_hint(format!("supported codes: {}", supported.join(", "))),
                ));
            }
        }
        diagnostics
    }
}

/// Unrecognized fields are errors in strict mode, warnings otherwise.
struct UnknownFieldsRule;

impl UnknownFieldsRule {
    fn diagnose(
        strict: bool,
        prefix: &str,
        fields: &std::collections::HashMap<String, serde_json::Value>,
        out: &mut Vec<ValidationDiagnostic>,
    ) {
        for key in fields.keys() {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            let err = WidgetSpecError::new(
                ErrorCode::UnknownField,
                path,
                "field is not recognized by the schema",
            );
            out.push(if strict {
                ValidationDiagnostic::error(err)
            } else {
                ValidationDiagnostic::warning(err)
            });
        }
    }
}

impl ValidationRule for UnknownFieldsRule {
    fn name(&self) -> &str {
        "unknown_fields"
    }

    fn validate(&self, spec: &WidgetSpec) -> Vec<ValidationDiagnostic> {
        let mut diagnostics = Vec::new();
        Self::diagnose(spec.strict, "", &spec.unknown_fields, &mut diagnostics);
        Self::diagnose(
            spec.strict,
            "summary",
            &spec.summary.unknown_fields,
            &mut diagnostics,
        );
        Self::diagnose(
            spec.strict,
            "translation",
            &spec.translation.unknown_fields,
            &mut diagnostics,
        );
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validate(json: &str) -> ValidationReport {
        let spec = WidgetSpec::from_json(json).unwrap();
        ValidationEngine::with_defaults().validate(&spec)
    }

    #[test]
    fn test_default_spec_is_valid() {
        let report = ValidationEngine::with_defaults().validate(&WidgetSpec::default());
        assert!(report.is_valid());
        assert!(report.is_empty());
    }

    #[test]
    fn test_zero_target_sentences_is_error() {
        let report = validate(r#"{ "v": 1, "summary": { "target_sentences": 0 } }"#);
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::ZeroTargetSentences);
        assert_eq!(err.path, "summary.target_sentences");
    }

    #[test]
    fn test_zero_min_chars_is_warning() {
        let report = validate(r#"{ "v": 1, "summary": { "min_chars": 0 } }"#);
        assert!(report.is_valid());
        let warn = report.warnings().next().unwrap();
        assert_eq!(warn.code, ErrorCode::ZeroMinChars);
    }

    #[test]
    fn test_unknown_language_code_is_error() {
        let report = validate(r#"{ "v": 1, "translation": { "targets": ["en", "xx", "de"] } }"#);
        let errors: Vec<_> = report.errors().collect();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].path, "translation.targets[1]");
        assert_eq!(errors[1].path, "translation.targets[2]");
    }

    #[test]
    fn test_unknown_fields_warning_by_default() {
        let report = validate(r#"{ "v": 1, "extra": true }"#);
        assert!(report.is_valid());
        assert_eq!(report.warnings().count(), 1);
    }

    #[test]
    fn test_unknown_fields_error_when_strict() {
        let report = validate(r#"{ "v": 1, "strict": true, "extra": true }"#);
        assert!(report.has_errors());
        let err = report.errors().next().unwrap();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.path, "extra");
    }

    #[test]
    fn test_nested_unknown_field_path() {
        let report = validate(r#"{ "v": 1, "strict": true, "summary": { "bogus": 1 } }"#);
        let err = report.errors().next().unwrap();
        assert_eq!(err.path, "summary.bogus");
    }

    #[test]
    fn test_all_findings_collected() {
        let report = validate(
            r#"{
                "v": 1,
                "summary": { "target_sentences": 0, "min_chars": 0 },
                "translation": { "targets": ["zz"] }
            }"#,
        );
        assert_eq!(report.errors().count(), 2);
        assert_eq!(report.warnings().count(), 1);
        assert_eq!(report.len(), 3);
    }
}
