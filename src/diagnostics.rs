/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     diagnostics.rs
 * Purpose:  Collects parse diagnostics and renders them for humans.
 *
 * License:
 * This file is part of the JFTT front-end project.
 *
 * JFTT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::{ErrorKind, LexError, ParseError};
use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: ErrorKind,

    /// Stable error code (E0001, E0002, …)
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Primary source location
    pub span: Span,

    /// Optional note / help text
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn new(kind: ErrorKind, message: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            code: kind.code(),
            message: message.into(),
            span,
            help: None,
        }
    }

    /// Attach a help message to the diagnostic (builder-style).
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        let mut diagnostic = Diagnostic::new(error.kind, error.message, error.span);
        diagnostic.help = error.help;
        diagnostic
    }
}

impl From<LexError> for Diagnostic {
    fn from(error: LexError) -> Self {
        let mut diagnostic = Diagnostic::new(ErrorKind::LexicalError, error.to_string(), error.span());
        diagnostic.help = error.help();
        diagnostic
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {} at {}", self.code, self.message, self.span)
    }
}

/// Accumulates diagnostics during a parse.
///
/// Recovery can report errors slightly out of source order (an outer
/// construct may report before an inner one is revisited), so
/// `into_sorted` orders them by position before they are handed out.
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn record(&mut self, diagnostic: impl Into<Diagnostic>) {
        self.items.push(diagnostic.into());
    }

    /// Records a syntax error at `span`.
    pub fn record_at(&mut self, span: Span, message: impl Into<String>) {
        self.record(Diagnostic::new(ErrorKind::SyntaxError, message, span));
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// All diagnostics in source-position order. Ties keep report order.
    pub fn into_sorted(mut self) -> Vec<Diagnostic> {
        self.items.sort_by_key(|d| d.span.start);
        self.items
    }
}

/// Renders compiler-style diagnostics.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Underlines the offending token with carets (`^^^`)
/// - Optionally shows a helpful follow-up hint
pub struct DiagnosticPrinter {
    /// Full source code of the file being parsed.
    source: String,

    /// Name of the source file, for display only.
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders one diagnostic.
    ///
    /// # Output Example
    /// ```text
    /// error[E0002]: expected `;`, found `ENDIF`
    ///   --> sort.imp:12:10
    ///    |
    ///  12 |   x := 1 ENDIF
    ///    |          ^^^^^
    /// help: ...
    /// ```
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let Span {
            line, column, start, end, ..
        } = diagnostic.span;

        let src_line = self
            .source
            .lines()
            .nth(line.saturating_sub(1))
            .unwrap_or("");

        // Caret length is the token's width, clipped to the line.
        let remaining = src_line.chars().count().saturating_sub(column.saturating_sub(1));
        let width = self
            .source
            .get(start..end)
            .map(|text| text.chars().count())
            .unwrap_or(0)
            .min(remaining)
            .max(1);

        let mut out = format!(
            "error[{}]: {}\n  --> {}:{}:{}\n   |\n{:>3} | {}\n   | {}{}\n",
            diagnostic.code,
            diagnostic.message,
            self.file_name,
            line,
            column,
            line,
            src_line,
            " ".repeat(column.saturating_sub(1)),
            "^".repeat(width),
        );

        if let Some(help) = &diagnostic.help {
            out.push_str(&format!("help: {}\n", help));
        }

        out
    }

    /// Prints a rendered diagnostic to stderr.
    pub fn print(&self, diagnostic: &Diagnostic) {
        eprint!("{}", self.render(diagnostic));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_output_follows_source_position() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.record_at(Span::new(20, 21, 2, 3), "second");
        diagnostics.record_at(Span::new(4, 5, 1, 5), "first");

        let sorted = diagnostics.into_sorted();
        assert_eq!(sorted[0].message, "first");
        assert_eq!(sorted[1].message, "second");
    }

    #[test]
    fn render_underlines_the_token() {
        let source = "PROGRAM IS BEGIN\n  WRITE ENDIF;\nEND";
        let printer = DiagnosticPrinter::new("demo.imp", source);
        let diagnostic = Diagnostic::new(
            ErrorKind::SyntaxError,
            "expected value, found `ENDIF`",
            Span::new(25, 30, 2, 9),
        )
        .with_help("a value is a number or a variable");

        let rendered = printer.render(&diagnostic);
        assert!(rendered.starts_with("error[E0002]: expected value"));
        assert!(rendered.contains("--> demo.imp:2:9"));
        assert!(rendered.contains("  2 |   WRITE ENDIF;"));
        assert!(rendered.contains("   |         ^^^^^\n"));
        assert!(rendered.ends_with("help: a value is a number or a variable\n"));
    }
}
