/*
 * ==========================================================================
 * RULEX - Rule Expressions, Lexed & Parsed
 * ==========================================================================
 * 
 * Author:   Sam Wilcox
 * 
 * License:
 * This file is part of the RULEX rule language project.
 * 
 * RULEX is dual-licensed under the terms of:
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

use serde::{Deserialize, Serialize};

/// A location inside the original rule text.
///
/// Spans always refer to the **untrimmed** input handed to the lexer, so a
/// diagnostic can point back at exactly what the rule author wrote.
///
/// `Span::default()` (line 0) marks a token that did not come from source
/// text, such as one assembled by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Byte offset from the start of the input.
    pub offset: usize,

    /// 1-based line number.
    pub line: usize,

    /// 0-based column, counted in characters.
    pub column: usize,
}

impl Span {
    /// The first position of any input.
    pub fn start() -> Self {
        Self {
            offset: 0,
            line: 1,
            column: 0,
        }
    }

    /// Returns the span reached after moving over `text` from `self`.
    pub fn advance(self, text: &str) -> Self {
        let offset = self.offset + text.len();

        match text.rfind('\n') {
            Some(last_newline) => Self {
                offset,
                line: self.line + text.matches('\n').count(),
                column: text[last_newline + 1..].chars().count(),
            },
            None => Self {
                offset,
                line: self.line,
                column: self.column + text.chars().count(),
            },
        }
    }

    /// Computes the span of byte `offset` inside `source`.
    ///
    /// Offsets past the end are clamped to the end of `source`; offsets that
    /// fall inside a multi-byte character are moved back to its start.
    pub fn locate(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }

        Self::start().advance(&source[..offset])
    }

    /// Returns `true` if this span points into real source text.
    pub fn is_known(&self) -> bool {
        self.line > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_along_a_line() {
        let span = Span::start().advance("FIELD(\"a\") ");
        assert_eq!(span, Span { offset: 11, line: 1, column: 11 });
    }

    #[test]
    fn advances_across_newlines() {
        let span = Span::start().advance("FIELD(\"a\")\n\n  ");
        assert_eq!(span.line, 3);
        assert_eq!(span.column, 2);
        assert_eq!(span.offset, 14);
    }

    #[test]
    fn counts_columns_in_chars() {
        let span = Span::start().advance("'é' ");
        assert_eq!(span.column, 4);
        assert_eq!(span.offset, 5);
    }

    #[test]
    fn locates_offsets_in_source() {
        let source = "FIELD(\"a\")\n  TYPE 'é'";

        assert_eq!(Span::locate(source, 0), Span::start());
        assert_eq!(Span::locate(source, 13), Span { offset: 13, line: 2, column: 2 });
        assert_eq!(Span::locate(source, source.len()).column, 10);
    }

    #[test]
    fn locate_clamps_bad_offsets() {
        let source = "'é'";

        assert_eq!(Span::locate(source, 99).offset, source.len());
        // Offset 2 is inside the two-byte `é`.
        assert_eq!(Span::locate(source, 2), Span { offset: 1, line: 1, column: 1 });
    }

    #[test]
    fn locate_agrees_with_lexer_spans() {
        let source = "  FIELD(\"a\")\n TYPE 'x'";
        let tokens = crate::lexer::tokenize(source).unwrap();

        for token in tokens {
            assert_eq!(Span::locate(source, token.span.offset), token.span);
        }
    }

    #[test]
    fn default_span_is_unknown() {
        assert!(!Span::default().is_known());
        assert!(Span::start().is_known());
    }
}
