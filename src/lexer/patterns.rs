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

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexer::token::TokenType;

/// Condition keywords recognised by the lexer.
///
/// Keywords are matched as plain prefixes: `RANGE18` is `RANGE` followed by
/// `18`, and `INSIDE` is `IN` followed by whatever `SIDE` lexes as.
pub const CONDITION_KEYWORDS: &[&str] = &["TYPE", "RANGE", "MATCHES", "IN", "REQUIRED"];

/// Logical connectives recognised by the lexer.
pub const LOGICAL_KEYWORDS: &[&str] = &["AND", "OR", "NOT"];

/// A single entry of the lexer dispatch table.
pub struct Pattern {
    pub token_type: TokenType,
    pub regex: Regex,
}

/// The lexer dispatch table, in **precedence order**.
///
/// At every scan position the lexer walks this slice from the top and takes
/// the first pattern that matches at offset 0 of the remaining input. Every
/// regex is anchored with `^` and none of them can match the empty string,
/// so each accepted match advances the scanner.
///
/// ```text
/// 1. FIELD      FIELD("name")
/// 2. CONDITION  TYPE | RANGE | MATCHES | IN | REQUIRED
/// 3. VALUE      "..." | '...' | number | ( ... )
/// 4. LOGICAL    AND | OR | NOT
/// 5. SEPARATOR  ,
/// ```
pub static PATTERNS: Lazy<Vec<Pattern>> = Lazy::new(|| {
    vec![
        pattern(TokenType::Field, r#"^FIELD\("([^"]+)"\)"#),
        pattern(TokenType::Condition, &keyword_pattern(CONDITION_KEYWORDS)),
        pattern(
            TokenType::Value,
            r#"^(?:"[^"]*"|'[^']*'|-?(?:[0-9]+(?:\.[0-9]+)?|\.[0-9]+)|\([^)]*\))"#,
        ),
        pattern(TokenType::Logical, &keyword_pattern(LOGICAL_KEYWORDS)),
        pattern(TokenType::Separator, r"^,"),
    ]
});

fn keyword_pattern(keywords: &[&str]) -> String {
    format!(r"^(?:{})", keywords.join("|"))
}

fn pattern(token_type: TokenType, source: &str) -> Pattern {
    Pattern {
        token_type,
        // The table is fixed at compile time; a bad pattern is a programming error.
        regex: Regex::new(source).expect("lexer pattern must compile"),
    }
}

/// Returns the first pattern that matches at the very start of `input`,
/// together with the matched text.
pub fn match_at_start(input: &str) -> Option<(TokenType, &str)> {
    PATTERNS.iter().find_map(|p| {
        p.regex
            .find(input)
            .filter(|m| m.start() == 0)
            .map(|m| (p.token_type, m.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_in_precedence_order() {
        let order: Vec<TokenType> = PATTERNS.iter().map(|p| p.token_type).collect();
        assert_eq!(
            order,
            vec![
                TokenType::Field,
                TokenType::Condition,
                TokenType::Value,
                TokenType::Logical,
                TokenType::Separator,
            ]
        );
    }

    #[test]
    fn keywords_match_as_prefixes() {
        assert_eq!(match_at_start("IN (1)"), Some((TokenType::Condition, "IN")));
        assert_eq!(match_at_start("RANGE18"), Some((TokenType::Condition, "RANGE")));
        assert_eq!(match_at_start("INSIDE"), Some((TokenType::Condition, "IN")));
        assert_eq!(match_at_start("ORDER"), Some((TokenType::Logical, "OR")));
        assert_eq!(match_at_start("SIDE"), None);
    }

    #[test]
    fn value_forms() {
        assert_eq!(match_at_start("\"a b\" x"), Some((TokenType::Value, "\"a b\"")));
        assert_eq!(match_at_start("'x'"), Some((TokenType::Value, "'x'")));
        assert_eq!(match_at_start("3.25 "), Some((TokenType::Value, "3.25")));
        assert_eq!(match_at_start("-4"), Some((TokenType::Value, "-4")));
        assert_eq!(match_at_start(".5"), Some((TokenType::Value, ".5")));
        assert_eq!(match_at_start("-.25"), Some((TokenType::Value, "-.25")));
        assert_eq!(match_at_start("."), None);
        assert_eq!(match_at_start("7."), Some((TokenType::Value, "7")));
        assert_eq!(match_at_start("(1, 2)"), Some((TokenType::Value, "(1, 2)")));
    }

    #[test]
    fn field_takes_precedence() {
        assert_eq!(
            match_at_start("FIELD(\"a\") TYPE"),
            Some((TokenType::Field, "FIELD(\"a\")"))
        );
        assert_eq!(match_at_start("FIELD(\"\")"), None);
    }
}
