/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root. Lexer, parser, syntax tree and diagnostics for
 *           the JFTT teaching language.
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

//! Front end for the JFTT imperative teaching language.
//!
//! ```rust
//! let output = jftt::parse("PROGRAM IS x BEGIN READ x; WRITE x; END");
//! assert!(output.is_clean());
//!
//! let program = output.program.unwrap();
//! assert_eq!(program.main.commands.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod span;

pub use diagnostics::{Diagnostic, DiagnosticPrinter};
pub use error::{ErrorKind, LexError, ParseError};
pub use parser::{parse, parse_tokens, parse_with, ParseOptions, ParseOutput};
pub use span::Span;
