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

//! Target-Dialect Exporter
//!
//! Renders unified types as Hive DDL type strings and record schemas as Hive
//! column lists. Every variant has a rendering or an explicit policy:
//!
//! | Unified            | Hive                     | Policy                                   |
//! |--------------------|--------------------------|------------------------------------------|
//! | `TimestampMicros`  | `timestamp`              | widen (Hive timestamps hold nanoseconds)  |
//! | `TimeMillis`       | `int`                    | reject unless widening is enabled        |
//! | `TimeMicros`       | `bigint`                 | reject unless widening is enabled        |
//! | `Enum`             | `string`                 | widen (symbols are not kept)             |
//! | `Decimal(p > 38)`  | -                        | always rejected                          |
//! | `Char(n > 255)`    | -                        | always rejected                          |
//! | `Varchar(n > 65535)` | -                      | always rejected                          |
//! | `Map` with complex key | -                    | always rejected                          |

mod columns;

pub use columns::{import_columns, HiveColumn, HiveType};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::config::LossyPolicy;
use crate::errors::{SchemaError, SchemaResult};
use crate::grammar::render;
use crate::model::{StructField, StructType, UnifiedType};

const DIALECT: &str = "hive";

pub const HIVE_MAX_DECIMAL_PRECISION: u32 = 38;
pub const HIVE_MAX_CHAR_LENGTH: u32 = 255;
pub const HIVE_MAX_VARCHAR_LENGTH: u32 = 65535;

/// Export-side policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Render microsecond timestamps as `timestamp`
    pub timestamp_micros: LossyPolicy,
    /// Render times of day as integer counts since midnight (`int` millis, `bigint` micros)
    pub time_of_day: LossyPolicy,
    /// Render enumerations as `string`
    pub enums: LossyPolicy,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            timestamp_micros: LossyPolicy::Widen,
            time_of_day: LossyPolicy::Reject,
            enums: LossyPolicy::Widen,
        }
    }
}

/// Stateless unified-to-Hive converter
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Render a single type as a Hive type string
    pub fn export(&self, data_type: &UnifiedType) -> SchemaResult<String> {
        match data_type {
            UnifiedType::Boolean => Ok(render::BOOLEAN.to_string()),
            UnifiedType::Int8 => Ok(render::TINYINT.to_string()),
            UnifiedType::Int16 => Ok(render::SMALLINT.to_string()),
            UnifiedType::Int32 => Ok(render::INT.to_string()),
            UnifiedType::Int64 => Ok(render::BIGINT.to_string()),
            UnifiedType::Float32 => Ok(render::FLOAT.to_string()),
            UnifiedType::Float64 => Ok(render::DOUBLE.to_string()),
            UnifiedType::Decimal(decimal) => {
                if decimal.precision() > HIVE_MAX_DECIMAL_PRECISION {
                    return Err(reject(
                        data_type,
                        format!(
                            "precision {} exceeds the maximum of {}",
                            decimal.precision(),
                            HIVE_MAX_DECIMAL_PRECISION
                        ),
                    ));
                }
                Ok(render::decimal(decimal.precision(), decimal.scale()))
            }
            UnifiedType::String => Ok(render::STRING.to_string()),
            UnifiedType::Char(char_type) => {
                if char_type.size() > HIVE_MAX_CHAR_LENGTH {
                    return Err(reject(
                        data_type,
                        format!("length {} exceeds the maximum of {}", char_type.size(), HIVE_MAX_CHAR_LENGTH),
                    ));
                }
                Ok(render::char(char_type.size()))
            }
            UnifiedType::Varchar(varchar) => {
                if varchar.size() > HIVE_MAX_VARCHAR_LENGTH {
                    return Err(reject(
                        data_type,
                        format!("length {} exceeds the maximum of {}", varchar.size(), HIVE_MAX_VARCHAR_LENGTH),
                    ));
                }
                Ok(render::varchar(varchar.size()))
            }
            UnifiedType::Binary => Ok(render::BINARY.to_string()),
            UnifiedType::Date => Ok(render::DATE.to_string()),
            UnifiedType::TimestampMillis => Ok(render::TIMESTAMP.to_string()),
            UnifiedType::TimestampMicros => {
                self.widen(data_type, self.options.timestamp_micros, render::TIMESTAMP)
            }
            UnifiedType::TimeMillis => self.widen(data_type, self.options.time_of_day, render::INT),
            UnifiedType::TimeMicros => self.widen(data_type, self.options.time_of_day, render::BIGINT),
            UnifiedType::Enum(_) => self.widen(data_type, self.options.enums, render::STRING),
            UnifiedType::Struct(record) => self.export_struct(record),
            UnifiedType::Array { element } => {
                let element = self.export(element).map_err(|e| e.within("element"))?;
                Ok(render::array(&element))
            }
            UnifiedType::Map { key, value } => {
                if !key.is_primitive() {
                    return Err(reject(data_type, "map keys must be primitive"));
                }
                let key = self.export(key).map_err(|e| e.within("key"))?;
                let value = self.export(value).map_err(|e| e.within("value"))?;
                Ok(render::map(&key, &value))
            }
        }
    }

    /// Render a record as an ordered Hive column list
    pub fn export_columns(&self, record: &StructType) -> SchemaResult<Vec<HiveColumn>> {
        check_unique_ignoring_case(record.fields())?;

        let columns = record
            .fields()
            .iter()
            .map(|field| {
                let data_type = self.export(&field.data_type).map_err(|e| e.within(&field.name))?;
                tracing::debug!(
                    column = %field.name,
                    data_type = %data_type,
                    nullable = field.nullable,
                    "exported column"
                );
                Ok(HiveColumn::new(field.name.clone(), data_type, field.nullable))
            })
            .collect::<SchemaResult<Vec<_>>>()?;
        Ok(columns)
    }

    fn export_struct(&self, record: &StructType) -> SchemaResult<String> {
        check_unique_ignoring_case(record.fields())?;

        let members = record
            .fields()
            .iter()
            .map(|field| {
                let rendered = self.export(&field.data_type).map_err(|e| e.within(&field.name))?;
                Ok((field.name.as_str(), rendered))
            })
            .collect::<SchemaResult<Vec<_>>>()?;
        Ok(render::struct_type(
            members.iter().map(|(name, rendered)| (*name, rendered.as_str())),
        ))
    }

    fn widen(&self, data_type: &UnifiedType, policy: LossyPolicy, rendered: &str) -> SchemaResult<String> {
        match policy {
            LossyPolicy::Widen => {
                tracing::warn!(
                    unified = data_type.type_name(),
                    hive = rendered,
                    "no exact hive counterpart, widening"
                );
                Ok(rendered.to_string())
            }
            LossyPolicy::Reject => Err(reject(data_type, "no exact counterpart and widening is disabled")),
        }
    }
}

fn reject(data_type: &UnifiedType, reason: impl Into<String>) -> SchemaError {
    SchemaError::unsupported_target(data_type.type_name(), DIALECT, reason)
}

/// Hive identifiers are case-insensitive, so `id` and `ID` collide
fn check_unique_ignoring_case(fields: &[StructField]) -> SchemaResult<()> {
    let mut seen = HashSet::with_capacity(fields.len());
    for field in fields {
        if !seen.insert(field.name.to_lowercase()) {
            return Err(SchemaError::unsupported_target(
                "struct",
                DIALECT,
                format!("field name '{}' collides case-insensitively", field.name),
            ));
        }
    }
    Ok(())
}

/// Render a single type with default options
pub fn export(data_type: &UnifiedType) -> SchemaResult<String> {
    Exporter::default().export(data_type)
}

/// Render a record as a Hive column list with default options
pub fn export_columns(record: &StructType) -> SchemaResult<Vec<HiveColumn>> {
    Exporter::default().export_columns(record)
}
