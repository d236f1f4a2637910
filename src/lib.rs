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

//! # schema-translate
//!
//! **one schema, many dialects**
//!
//! A pure, stateless translation layer between schema type systems. Parquet
//! column declarations are imported into a single unified type model, and the
//! model is exported as Hive DDL type strings and column lists.
//!
//! ## Key Features
//!
//! - **Unified Type Model**: closed variant set with validated constructors
//! - **Parquet Import**: physical type + logical annotation, groups, lists and maps
//! - **Hive Export**: type strings and ordered column lists with nullability
//! - **Hive Grammar**: recursive-descent parser for nested type strings
//! - **Explicit Policies**: every lossy gap is widened by a documented rule or rejected
//!
//! ```no_run
//! use schema_translate::{export_columns, import_message_type};
//!
//! let record = import_message_type(
//!     "message m { required int64 id; optional binary name (UTF8); }",
//! )?;
//! for column in export_columns(&record)? {
//!     println!("{} {}", column.name, column.data_type);
//! }
//! # Ok::<(), schema_translate::SchemaError>(())
//! ```

pub mod config;
pub mod conversion;
pub mod errors;
pub mod exporter;
pub mod grammar;
pub mod importer;
pub mod model;

pub use config::{LossyPolicy, TranslationConfig};
pub use conversion::{FromUnified, ToUnified};
pub use errors::{ConfigError, SchemaError, SchemaResult};
pub use exporter::{export, export_columns, import_columns, ExportOptions, Exporter, HiveColumn, HiveType};
pub use grammar::{parse_struct_fields, parse_type};
pub use importer::{
    import, import_message_type, import_parquet, import_schema, Annotation, ImportOptions, Importer,
    PhysicalType, Repetition, SourceType,
};
pub use model::{CharType, DecimalType, EnumType, StructField, StructType, UnifiedType, VarcharType};
