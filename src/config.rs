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

use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::PathBuf;

/// How the `rulex` binary prints a compiled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The AST as JSON.
    Json,

    /// The AST as an indented tree.
    Tree,

    /// The token list as JSON, without parsing.
    Tokens,

    /// One `field condition value` line per clause.
    Clauses,
}

/// Runtime configuration, taken from the command line and environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "rulex", version, about = "Lex and parse RULEX field rules", long_about = None)]
pub struct Config {
    /// Rule text, e.g. 'FIELD("age") RANGE 18'
    #[arg(conflicts_with = "file")]
    pub rule: Option<String>,

    /// Read the rule text from a file instead
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Tree)]
    pub format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Maximum log level written to stderr
    #[arg(long, env = "RULEX_LOG", default_value = "warn", value_name = "LEVEL")]
    pub log_level: tracing::Level,
}

impl Config {
    /// Resolves the rule text: the positional argument, then `--file`, then
    /// standard input.
    pub fn source(&self) -> io::Result<String> {
        if let Some(rule) = &self.rule {
            return Ok(rule.clone());
        }

        if let Some(path) = &self.file {
            return std::fs::read_to_string(path);
        }

        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }

    /// Name of the rule source for diagnostics.
    pub fn source_name(&self) -> String {
        match (&self.rule, &self.file) {
            (Some(_), _) => "<arg>".to_string(),
            (None, Some(path)) => path.display().to_string(),
            (None, None) => "<stdin>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tree_output() {
        let config = Config::try_parse_from(["rulex", "FIELD(\"a\") TYPE 1"]).unwrap();

        assert_eq!(config.format, OutputFormat::Tree);
        assert_eq!(config.source_name(), "<arg>");
        assert_eq!(config.source().unwrap(), "FIELD(\"a\") TYPE 1");
    }

    #[test]
    fn parses_format_and_level() {
        let config = Config::try_parse_from([
            "rulex",
            "--format",
            "clauses",
            "--log-level",
            "debug",
            "x",
        ])
        .unwrap();

        assert_eq!(config.format, OutputFormat::Clauses);
        assert_eq!(config.log_level, tracing::Level::DEBUG);
    }

    #[test]
    fn rule_and_file_conflict() {
        assert!(Config::try_parse_from(["rulex", "--file", "r.txt", "x"]).is_err());
    }

    #[test]
    fn file_name_is_the_source_name() {
        let config = Config::try_parse_from(["rulex", "-f", "rules/age.rule"]).unwrap();
        assert_eq!(config.source_name(), "rules/age.rule");
    }
}
