/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for lexical analysis.
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

/// The closed keyword set.
pub mod keywords;

/// The scanner itself.
#[allow(clippy::module_inception)]
pub mod lexer;

/// `Token` and `TokenKind`.
pub mod token;

pub use keywords::Keyword;
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
