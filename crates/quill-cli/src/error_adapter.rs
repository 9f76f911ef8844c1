//! Error adapter for converting QuillError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::{error::Error, fmt};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use quill::QuillError;

/// Adapter for a markup source decoding error.
///
/// This adapter wraps a [`toml::de::Error`] together with the source text
/// it was raised for and implements [`MietteDiagnostic`] so the offending
/// part of the source is shown.
pub struct SourceAdapter<'a> {
    err: &'a toml::de::Error,
    src: &'a str,
}

impl<'a> SourceAdapter<'a> {
    /// Create a new source adapter.
    pub fn new(err: &'a toml::de::Error, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for SourceAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err.message())
    }
}

impl Error for SourceAdapter<'_> {}

impl MietteDiagnostic for SourceAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("quill::source"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "every node is a table with a `type` of element, attribute, text, raw, group, link, list, image or table",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.err.span()?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Adapter for non-diagnostic [`QuillError`] variants.
///
/// This adapter handles errors that don't carry source information, such
/// as I/O and configuration errors.
pub struct ErrorAdapter<'a>(pub &'a QuillError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            QuillError::Io(_) => "quill::io",
            QuillError::Source { .. } => "quill::source",
            QuillError::Config(_) => "quill::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        None
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a source diagnostic or a non-diagnostic error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A rich diagnostic with source location information.
    Source(SourceAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Source(s) => fmt::Display::fmt(s, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Reportable::Source(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Source(s) => s.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Source(s) => s.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Source(s) => s.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`QuillError`] into the reportables to render.
pub fn to_reportables(err: &QuillError) -> Vec<Reportable<'_>> {
    match err {
        QuillError::Source { err, src } => vec![Reportable::Source(SourceAdapter::new(err, src))],
        other => vec![Reportable::Error(ErrorAdapter(other))],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use quill::DocumentBuilder;

    #[test]
    fn test_source_error_is_labelled() {
        let source = "[[nodes]]\ntype = \"video\"\n";
        let err = DocumentBuilder::default().parse(source).unwrap_err();

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        let reportable = &reportables[0];
        assert!(matches!(reportable, Reportable::Source(_)));
        assert_eq!(
            reportable.code().map(|code| code.to_string()).as_deref(),
            Some("quill::source")
        );
        assert!(reportable.source_code().is_some());
    }

    #[test]
    fn test_plain_errors_carry_codes() {
        let err = QuillError::Config("bad".to_string());
        let reportables = to_reportables(&err);

        let reportable = &reportables[0];
        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(
            reportable.code().map(|code| code.to_string()).as_deref(),
            Some("quill::config")
        );
        assert!(reportable.labels().is_none());
        assert_eq!(reportable.to_string(), "Configuration error: bad");
    }

    #[test]
    fn test_report_renders() {
        let source = "format = \"pdf\"\n";
        let err = DocumentBuilder::default().parse(source).unwrap_err();

        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        for reportable in to_reportables(&err) {
            reporter.render_report(&mut writer, &reportable).unwrap();
        }
        assert!(!writer.is_empty());
    }
}
