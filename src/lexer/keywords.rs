/*
 * ==========================================================================
 * JFTT - Teaching Language Front End
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines all reserved keywords of the JFTT language.
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

use serde::Serialize;
use std::fmt;

/// A reserved JFTT keyword.
///
/// Keywords are always written in upper case and matched exactly; user
/// names (pidentifiers) can only contain lower-case letters, digits and
/// underscores, so the two sets never overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Keyword {
    Procedure,
    Is,
    Begin,
    End,
    Program,
    If,
    Then,
    Else,
    EndIf,
    While,
    Do,
    EndWhile,
    Repeat,
    Until,
    For,
    From,
    To,
    Downto,
    EndFor,
    Read,
    Write,
    /// `T`, the array-reference marker in a procedure's parameter list.
    T,
}

impl Keyword {
    /// Determines whether `word` is a reserved keyword.
    ///
    /// # Parameters
    /// - `word`: an upper-case run extracted by the lexer.
    ///
    /// # Returns
    /// - `Some(keyword)` for an exact, case-sensitive match.
    /// - `None` otherwise (`IFX`, `If` and `if` are not keywords).
    ///
    /// # JFTT Examples
    /// ```text
    /// ENDIF   -> Some(Keyword::EndIf)
    /// T       -> Some(Keyword::T)
    /// ENDIFS  -> None
    /// ```
    pub fn lookup(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "PROCEDURE" => Keyword::Procedure,
            "IS" => Keyword::Is,
            "BEGIN" => Keyword::Begin,
            "END" => Keyword::End,
            "PROGRAM" => Keyword::Program,
            "IF" => Keyword::If,
            "THEN" => Keyword::Then,
            "ELSE" => Keyword::Else,
            "ENDIF" => Keyword::EndIf,
            "WHILE" => Keyword::While,
            "DO" => Keyword::Do,
            "ENDWHILE" => Keyword::EndWhile,
            "REPEAT" => Keyword::Repeat,
            "UNTIL" => Keyword::Until,
            "FOR" => Keyword::For,
            "FROM" => Keyword::From,
            "TO" => Keyword::To,
            "DOWNTO" => Keyword::Downto,
            "ENDFOR" => Keyword::EndFor,
            "READ" => Keyword::Read,
            "WRITE" => Keyword::Write,
            "T" => Keyword::T,
            _ => return None,
        };
        Some(keyword)
    }

    /// The source spelling of this keyword.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Procedure => "PROCEDURE",
            Keyword::Is => "IS",
            Keyword::Begin => "BEGIN",
            Keyword::End => "END",
            Keyword::Program => "PROGRAM",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "ENDIF",
            Keyword::While => "WHILE",
            Keyword::Do => "DO",
            Keyword::EndWhile => "ENDWHILE",
            Keyword::Repeat => "REPEAT",
            Keyword::Until => "UNTIL",
            Keyword::For => "FOR",
            Keyword::From => "FROM",
            Keyword::To => "TO",
            Keyword::Downto => "DOWNTO",
            Keyword::EndFor => "ENDFOR",
            Keyword::Read => "READ",
            Keyword::Write => "WRITE",
            Keyword::T => "T",
        }
    }

    /// Keywords that may begin a command.
    pub fn starts_command(self) -> bool {
        matches!(
            self,
            Keyword::If
                | Keyword::While
                | Keyword::Repeat
                | Keyword::For
                | Keyword::Read
                | Keyword::Write
        )
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::Keyword;

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        assert_eq!(Keyword::lookup("ENDWHILE"), Some(Keyword::EndWhile));
        assert_eq!(Keyword::lookup("T"), Some(Keyword::T));
        assert_eq!(Keyword::lookup("Endwhile"), None);
        assert_eq!(Keyword::lookup("ENDWHILES"), None);
    }

    #[test]
    fn spelling_round_trips_through_lookup() {
        for kw in [Keyword::Procedure, Keyword::Downto, Keyword::EndFor, Keyword::T] {
            assert_eq!(Keyword::lookup(kw.as_str()), Some(kw));
        }
    }
}
