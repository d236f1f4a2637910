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

//! Adapter from the `parquet` crate's schema types
//!
//! Logical types take precedence over legacy converted types: a column that
//! only carries a logical type (for example `TIMESTAMP(NANOS)`) has no
//! converted type, and falling back to the bare physical type would silently
//! change its meaning.

use parquet::basic::{
    ConvertedType, LogicalType, Repetition as ParquetRepetition, TimeUnit, Type as ParquetPhysicalType,
};
use parquet::schema::parser::parse_message_type;
use parquet::schema::types::Type as ParquetType;

use super::descriptor::{Annotation, PhysicalType, Repetition, SourceType};
use super::Importer;
use crate::errors::{SchemaError, SchemaResult};
use crate::model::{StructType, UnifiedType};

impl From<&ParquetType> for SourceType {
    fn from(node: &ParquetType) -> Self {
        let info = node.get_basic_info();
        let name = info.name().to_string();
        let repetition = if info.has_repetition() {
            convert_repetition(info.repetition())
        } else {
            // The message root carries no repetition
            Repetition::Required
        };

        match node {
            ParquetType::PrimitiveType {
                physical_type,
                type_length,
                scale,
                precision,
                ..
            } => {
                let annotation = match info.logical_type() {
                    Some(logical) => Some(convert_logical(&logical)),
                    None => convert_converted(info.converted_type(), *precision, *scale),
                };
                SourceType::Primitive {
                    name,
                    repetition,
                    physical: convert_physical(*physical_type, *type_length),
                    annotation,
                }
            }
            ParquetType::GroupType { fields, .. } => {
                let annotation = match info.logical_type() {
                    Some(logical) => Some(convert_logical(&logical)),
                    None => convert_converted(info.converted_type(), -1, -1),
                };
                SourceType::Group {
                    name,
                    repetition,
                    annotation,
                    fields: fields.iter().map(|f| SourceType::from(f.as_ref())).collect(),
                }
            }
        }
    }
}

fn convert_repetition(repetition: ParquetRepetition) -> Repetition {
    match repetition {
        ParquetRepetition::REQUIRED => Repetition::Required,
        ParquetRepetition::OPTIONAL => Repetition::Optional,
        ParquetRepetition::REPEATED => Repetition::Repeated,
    }
}

fn convert_physical(physical: ParquetPhysicalType, type_length: i32) -> PhysicalType {
    match physical {
        ParquetPhysicalType::BOOLEAN => PhysicalType::Boolean,
        ParquetPhysicalType::INT32 => PhysicalType::Int32,
        ParquetPhysicalType::INT64 => PhysicalType::Int64,
        ParquetPhysicalType::INT96 => PhysicalType::Int96,
        ParquetPhysicalType::FLOAT => PhysicalType::Float,
        ParquetPhysicalType::DOUBLE => PhysicalType::Double,
        ParquetPhysicalType::BYTE_ARRAY => PhysicalType::ByteArray,
        ParquetPhysicalType::FIXED_LEN_BYTE_ARRAY => PhysicalType::FixedLenByteArray {
            length: u32::try_from(type_length).unwrap_or(0),
        },
    }
}

/// The parquet crate uses -1 for unset decimal attributes
fn decimal_attr(value: i32) -> Option<u32> {
    u32::try_from(value).ok()
}

#[allow(unreachable_patterns)]
fn convert_logical(logical: &LogicalType) -> Annotation {
    match logical {
        LogicalType::String => Annotation::Utf8,
        LogicalType::Map => Annotation::Map,
        LogicalType::List => Annotation::List,
        LogicalType::Enum => Annotation::Enum,
        LogicalType::Decimal { scale, precision } => Annotation::Decimal {
            precision: decimal_attr(*precision),
            scale: decimal_attr(*scale),
        },
        LogicalType::Date => Annotation::Date,
        LogicalType::Time { unit, .. } => match unit {
            TimeUnit::MILLIS { .. } => Annotation::TimeMillis,
            TimeUnit::MICROS { .. } => Annotation::TimeMicros,
            TimeUnit::NANOS { .. } => Annotation::TimeNanos,
        },
        // UTC adjustment has no counterpart in the model and is dropped
        LogicalType::Timestamp { unit, .. } => match unit {
            TimeUnit::MILLIS { .. } => Annotation::TimestampMillis,
            TimeUnit::MICROS { .. } => Annotation::TimestampMicros,
            TimeUnit::NANOS { .. } => Annotation::TimestampNanos,
        },
        LogicalType::Integer { bit_width, is_signed } => Annotation::Integer {
            bit_width: u8::try_from(*bit_width).unwrap_or(0),
            signed: *is_signed,
        },
        LogicalType::Json => Annotation::Json,
        LogicalType::Bson => Annotation::Bson,
        LogicalType::Uuid => Annotation::Uuid,
        LogicalType::Float16 => Annotation::Float16,
        LogicalType::Unknown => Annotation::Unknown("UNKNOWN".to_string()),
        other => Annotation::Unknown(format!("{:?}", other)),
    }
}

fn convert_converted(converted: ConvertedType, precision: i32, scale: i32) -> Option<Annotation> {
    let annotation = match converted {
        ConvertedType::NONE => return None,
        ConvertedType::UTF8 => Annotation::Utf8,
        ConvertedType::MAP => Annotation::Map,
        ConvertedType::MAP_KEY_VALUE => Annotation::MapKeyValue,
        ConvertedType::LIST => Annotation::List,
        ConvertedType::ENUM => Annotation::Enum,
        ConvertedType::DECIMAL => Annotation::Decimal {
            precision: decimal_attr(precision),
            scale: decimal_attr(scale),
        },
        ConvertedType::DATE => Annotation::Date,
        ConvertedType::TIME_MILLIS => Annotation::TimeMillis,
        ConvertedType::TIME_MICROS => Annotation::TimeMicros,
        ConvertedType::TIMESTAMP_MILLIS => Annotation::TimestampMillis,
        ConvertedType::TIMESTAMP_MICROS => Annotation::TimestampMicros,
        ConvertedType::UINT_8 => Annotation::uint(8),
        ConvertedType::UINT_16 => Annotation::uint(16),
        ConvertedType::UINT_32 => Annotation::uint(32),
        ConvertedType::UINT_64 => Annotation::uint(64),
        ConvertedType::INT_8 => Annotation::int(8),
        ConvertedType::INT_16 => Annotation::int(16),
        ConvertedType::INT_32 => Annotation::int(32),
        ConvertedType::INT_64 => Annotation::int(64),
        ConvertedType::JSON => Annotation::Json,
        ConvertedType::BSON => Annotation::Bson,
        ConvertedType::INTERVAL => Annotation::Interval,
    };
    Some(annotation)
}

impl Importer {
    /// Convert a `parquet` crate schema node
    pub fn import_parquet(&self, node: &ParquetType) -> SchemaResult<UnifiedType> {
        self.import(&SourceType::from(node))
    }

    /// Convert a `parquet` crate message type into a record
    pub fn import_parquet_schema(&self, message: &ParquetType) -> SchemaResult<StructType> {
        self.import_schema(&SourceType::from(message))
    }

    /// Parse Parquet message-type text (as printed by parquet tooling) and convert it
    pub fn import_message_type(&self, text: &str) -> SchemaResult<StructType> {
        let message = parse_message_type(text).map_err(|e| SchemaError::SourceSchema(e.to_string()))?;
        self.import_parquet_schema(&message)
    }
}

/// Convert a `parquet` crate schema node with default options
pub fn import_parquet(node: &ParquetType) -> SchemaResult<UnifiedType> {
    Importer::default().import_parquet(node)
}

/// Parse and convert Parquet message-type text with default options
pub fn import_message_type(text: &str) -> SchemaResult<StructType> {
    Importer::default().import_message_type(text)
}
