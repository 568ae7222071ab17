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

use std::fmt;

use crate::error::RuleError;

/// Renders human-friendly, compiler-style diagnostics for rule errors.
///
/// The output is modelled on `rustc` diagnostics, simplified to stay
/// readable without color:
///
/// ```text
/// error[E_UNEXPECTED_TOKEN]: unexpected token: AND
///   --> rules.txt:1:24
///    |
///   1 | FIELD("name") REQUIRED AND FIELD("age") RANGE 18
///    |                        ^
/// help: combining clauses with AND, OR, NOT or commas is not supported yet
/// ```
pub struct DiagnosticPrinter {
    /// Name of the rule source (a file name, `<stdin>`, `<arg>` ...).
    file_name: String,

    /// Full text of the rule source, used to pull out the offending line.
    source: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Pairs `error` with this printer's source, ready to be formatted.
    pub fn diagnostic<'a>(&'a self, error: &'a RuleError) -> Diagnostic<'a> {
        Diagnostic {
            printer: self,
            error,
        }
    }

    /// Formats `error` into a multi-line diagnostic.
    ///
    /// Errors without a source location (such as too few tokens) render
    /// only the header, the file name and the help line.
    pub fn render(&self, error: &RuleError) -> String {
        self.diagnostic(error).to_string()
    }

    /// Prints the rendered diagnostic to stderr.
    pub fn print(&self, error: &RuleError) {
        eprint!("{}", self.diagnostic(error));
    }
}

/// A single error rendered against its source text.
pub struct Diagnostic<'a> {
    printer: &'a DiagnosticPrinter,
    error: &'a RuleError,
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DiagnosticPrinter { file_name, source } = self.printer;
        let error = self.error;

        writeln!(f, "error[{}]: {}", error.code(), error)?;

        match error.span() {
            Some(span) => {
                let src_line = source
                    .lines()
                    .nth(span.line.saturating_sub(1))
                    .unwrap_or("");

                writeln!(f, "  --> {}:{}:{}", file_name, span.line, span.column + 1)?;
                writeln!(f, "   |")?;
                writeln!(f, "{:>3} | {}", span.line, src_line)?;
                writeln!(f, "   | {}^", " ".repeat(span.column))?;
            }
            None => writeln!(f, "  --> {}", file_name)?,
        }

        if let Some(help) = error.help() {
            writeln!(f, "help: {}", help)?;
        }

        Ok(())
    }
}
