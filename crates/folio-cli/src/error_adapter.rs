//! Error adapter for converting FolioError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Diagram
//! description and configuration errors carry their source and a byte span,
//! which render as a labeled excerpt.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use folio::FolioError;

/// Adapter implementing [`MietteDiagnostic`] for [`FolioError`].
pub struct ErrorAdapter<'a>(pub &'a FolioError);

impl ErrorAdapter<'_> {
    /// The TOML source, message and span of errors that point into a file.
    fn located(&self) -> Option<(&String, &String, Option<&Range<usize>>)> {
        match self.0 {
            FolioError::Description { message, src, span }
            | FolioError::Config {
                message, src, span, ..
            } => Some((src, message, span.as_ref())),
            _ => None,
        }
    }
}

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

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            FolioError::Io(_) => "folio::io",
            FolioError::Description { .. } => "folio::description",
            FolioError::Config { .. } => "folio::config",
            FolioError::Layout(_) => "folio::layout",
            FolioError::Export(_) => "folio::export",
            FolioError::NotFound(_) => "folio::not_found",
            FolioError::NoChapters(_) => "folio::no_chapters",
            FolioError::Text(_) => "folio::text",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            FolioError::NoChapters(_) => {
                "chapters start with a top-level header such as `# Chapter 1: Title`"
            }
            FolioError::Description { .. } => {
                "every description needs a `kind` of boxes, flow, network or clusters"
            }
            FolioError::Config { .. } => {
                "settings live under the `[diagram]` and `[publications]` tables"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        self.located()
            .map(|(src, _, _)| src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let (_, message, Some(span)) = self.located()? else {
            return None;
        };

        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(
            LabeledSpan::new_primary_with_span(Some(message.clone()), span),
        )))
    }
}
