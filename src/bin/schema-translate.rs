/*
 * Copyright 2025 Vijaykumar Singh
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

//! schema-translate - print the Hive column list for a Parquet schema

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use schema_translate::{Exporter, Importer, TranslationConfig, UnifiedType};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// One `name type [NOT NULL]` line per column
    Text,
    /// Hive column list as JSON
    Json,
    /// Unified model as JSON
    Model,
}

#[derive(Parser)]
#[command(name = "schema-translate")]
#[command(about = "Translate a Parquet message type into Hive column definitions")]
struct Args {
    /// File holding a Parquet message type (as printed by parquet tooling)
    schema: Option<PathBuf>,

    /// TOML file with import/export policies
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let config = match &args.config {
        Some(path) => TranslationConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => {
            info!("No configuration file given, using defaults");
            TranslationConfig::default()
        }
    };

    if args.print_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let schema_path = args
        .schema
        .context("a schema file is required unless --print-config is given")?;
    let text = std::fs::read_to_string(&schema_path)
        .with_context(|| format!("reading {}", schema_path.display()))?;

    let record = Importer::new(config.import.clone())
        .import_message_type(&text)
        .with_context(|| format!("importing {}", schema_path.display()))?;
    info!(fields = record.len(), "imported {}", schema_path.display());

    match args.format {
        OutputFormat::Model => {
            let model = UnifiedType::Struct(record);
            println!("{}", serde_json::to_string_pretty(&model)?);
        }
        OutputFormat::Json => {
            let columns = Exporter::new(config.export.clone()).export_columns(&record)?;
            println!("{}", serde_json::to_string_pretty(&columns)?);
        }
        OutputFormat::Text => {
            for column in Exporter::new(config.export.clone()).export_columns(&record)? {
                let constraint = if column.nullable { "" } else { " NOT NULL" };
                println!("{} {}{}", column.name, column.data_type, constraint);
            }
        }
    }

    Ok(())
}
