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

use anyhow::Result;
use clap::Parser;
use std::process;

use rulex::config::{Config, OutputFormat};
use rulex::diagnostics::DiagnosticPrinter;
use rulex::{parse_rules, tokenize, RuleError};

fn main() -> Result<()> {
    let config = Config::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .init();

    let source = config.source()?;
    tracing::debug!(source = %config.source_name(), bytes = source.len(), "read rule text");

    match render(&config, &source) {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(err) => match err.downcast::<RuleError>() {
            Ok(rule_err) => {
                DiagnosticPrinter::new(config.source_name(), source).print(&rule_err);
                process::exit(1);
            }
            Err(other) => Err(other),
        },
    }
}

/// Compiles `source` and renders it in the configured format.
fn render(config: &Config, source: &str) -> Result<String> {
    let tokens = tokenize(source)?;

    let output = match config.format {
        OutputFormat::Tokens => to_json(&tokens, config.pretty)? + "\n",
        OutputFormat::Json => to_json(&parse_rules(&tokens)?, config.pretty)? + "\n",
        OutputFormat::Tree => parse_rules(&tokens)?.to_string(),
        OutputFormat::Clauses => parse_rules(&tokens)?
            .clauses()
            .map(|clause| format!("{}\n", clause))
            .collect(),
    };

    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
