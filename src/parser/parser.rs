/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to transform JFTT source text into a syntax tree plus the
 * ordered list of diagnostics.
 *
 * The grammar itself is split across sibling modules:
 * - `program.rs`      → program, procedures, declarations, parameters
 * - `statements.rs`   → command lists, commands and statement recovery
 * - `expressions.rs`  → expressions, conditions, values, identifiers
 * - `helpers.rs`      → keyword/symbol matching and consumption
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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::ast::Program;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ErrorKind, ParseError};
use crate::lexer::keywords::Keyword;
use crate::lexer::token::Token;
use crate::lexer::tokenize;
use crate::parser::cursor::TokenCursor;

/// Knobs for a single parse.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Stop after this many diagnostics. `None` means no limit.
    pub max_diagnostics: Option<usize>,

    /// Cooperative cancellation flag, polled between commands.
    pub cancel: Option<Arc<AtomicBool>>,
}

/// Result of a parse.
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// The tree. `None` only when the text could not be tokenized; any
    /// syntax error still yields a tree, with error markers where the
    /// parser recovered.
    pub program: Option<Program>,

    /// Every diagnostic, in source-position order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// True when the source parsed without a single diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.program.is_some()
    }
}

/// Public entry point for the JFTT parsing phase.
///
/// # Pipeline
/// ```text
/// Source → Lexer → Tokens → Parser → AST + Diagnostics
/// ```
///
/// # Example
/// ```rust
/// let output = jftt::parse("PROGRAM IS x BEGIN x := 1 + 2; WRITE x; END");
/// assert!(output.is_clean());
/// ```
pub fn parse(source: &str) -> ParseOutput {
    parse_with(source, &ParseOptions::default())
}

/// Like [`parse`], with explicit options.
///
/// A lexical error aborts the whole parse: the output then has no tree and
/// a single `LexicalError` diagnostic.
pub fn parse_with(source: &str, options: &ParseOptions) -> ParseOutput {
    match tokenize(source) {
        Ok(tokens) => parse_tokens(tokens, options),
        Err(error) => {
            debug!(%error, "lexing aborted");
            ParseOutput {
                program: None,
                diagnostics: vec![error.into()],
            }
        }
    }
}

/// Parses an already-lexed token stream.
pub fn parse_tokens(tokens: Vec<Token>, options: &ParseOptions) -> ParseOutput {
    debug!(tokens = tokens.len(), "parse started");

    let mut parser = Parser::new(tokens, options.clone());
    let program = parser.program();
    let diagnostics = parser.diagnostics.into_sorted();

    debug!(diagnostics = diagnostics.len(), "parse finished");

    ParseOutput {
        program: Some(program),
        diagnostics,
    }
}

/// The core JFTT recursive-descent parser.
///
/// This structure maintains:
/// - The token cursor
/// - The diagnostics collected so far
/// - The stack of block-closing keywords that are currently open, used to
///   decide where a broken command ends
///
/// The grammar routines live in sibling modules as additional
/// `impl Parser` blocks.
pub struct Parser {
    pub(crate) cursor: TokenCursor,
    pub(crate) diagnostics: Diagnostics,
    pub(crate) open_blocks: Vec<&'static [Keyword]>,
    options: ParseOptions,
    halted: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, options: ParseOptions) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            diagnostics: Diagnostics::new(),
            open_blocks: Vec::new(),
            options,
            halted: false,
        }
    }

    /// Records a recovered error.
    ///
    /// Once the parse has been halted further reports are dropped: they
    /// would only describe the artificial end of input.
    pub(crate) fn report(&mut self, error: ParseError) {
        if self.halted {
            return;
        }

        self.diagnostics.record(error);

        if let Some(limit) = self.options.max_diagnostics {
            if self.diagnostics.len() >= limit {
                let span = self.cursor.peek().span;
                self.halt(Diagnostic::new(
                    ErrorKind::TooManyErrors,
                    format!("too many errors; stopped after {}", limit),
                    span,
                ));
            }
        }
    }

    /// Checks the cancellation flag. Called between commands.
    pub(crate) fn poll_cancel(&mut self) {
        let cancelled = self
            .options
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));

        if cancelled && !self.halted {
            let span = self.cursor.peek().span;
            self.halt(Diagnostic::new(ErrorKind::Cancelled, "parse cancelled", span));
        }
    }

    /// Stops the parse: records `reason` and moves the cursor to the end so
    /// every open routine unwinds.
    fn halt(&mut self, reason: Diagnostic) {
        debug!(reason = %reason.message, "parse halted");
        self.diagnostics.record(reason);
        self.halted = true;
        self.cursor.exhaust();
    }

    pub(crate) fn is_halted(&self) -> bool {
        self.halted
    }
}
