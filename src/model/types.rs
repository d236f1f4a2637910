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

//! Unified type variants

use serde::{Deserialize, Serialize};

use super::fields::{StructField, StructType};
use crate::errors::{SchemaError, SchemaResult};

/// Closed set of schema types understood by every dialect converter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UnifiedType {
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// Single-precision floating point
    Float32,
    /// Double-precision floating point
    Float64,
    /// Arbitrary-precision decimal
    Decimal(DecimalType),
    /// UTF-8 string
    String,
    /// Fixed-length character string
    Char(CharType),
    /// Variable-length character string with a maximum length
    Varchar(VarcharType),
    /// Opaque bytes
    Binary,
    /// Days since the Unix epoch
    Date,
    /// Time of day, millisecond resolution
    TimeMillis,
    /// Time of day, microsecond resolution
    TimeMicros,
    /// Instant, millisecond resolution
    TimestampMillis,
    /// Instant, microsecond resolution
    TimestampMicros,
    Boolean,
    /// Enumeration; the symbol list may be empty when the source does not carry it
    Enum(EnumType),
    /// Record of ordered, named, independently nullable fields
    Struct(StructType),
    Array {
        element: Box<UnifiedType>,
    },
    Map {
        key: Box<UnifiedType>,
        value: Box<UnifiedType>,
    },
}

impl UnifiedType {
    /// Validated decimal
    pub fn decimal(precision: u32, scale: u32) -> SchemaResult<Self> {
        Ok(UnifiedType::Decimal(DecimalType::new(precision, scale)?))
    }

    /// Validated fixed-length character string
    pub fn char(size: u32) -> SchemaResult<Self> {
        Ok(UnifiedType::Char(CharType::new(size)?))
    }

    /// Validated bounded character string
    pub fn varchar(size: u32) -> SchemaResult<Self> {
        Ok(UnifiedType::Varchar(VarcharType::new(size)?))
    }

    pub fn enumeration<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        UnifiedType::Enum(EnumType::new(symbols))
    }

    /// Validated record
    pub fn record(fields: Vec<StructField>) -> SchemaResult<Self> {
        Ok(UnifiedType::Struct(StructType::new(fields)?))
    }

    pub fn array(element: UnifiedType) -> Self {
        UnifiedType::Array {
            element: Box::new(element),
        }
    }

    pub fn map(key: UnifiedType, value: UnifiedType) -> Self {
        UnifiedType::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    /// Returns the type name for error messages and logs
    pub fn type_name(&self) -> &'static str {
        match self {
            UnifiedType::Int8 => "int8",
            UnifiedType::Int16 => "int16",
            UnifiedType::Int32 => "int32",
            UnifiedType::Int64 => "int64",
            UnifiedType::Float32 => "float32",
            UnifiedType::Float64 => "float64",
            UnifiedType::Decimal(_) => "decimal",
            UnifiedType::String => "string",
            UnifiedType::Char(_) => "char",
            UnifiedType::Varchar(_) => "varchar",
            UnifiedType::Binary => "binary",
            UnifiedType::Date => "date",
            UnifiedType::TimeMillis => "time_millis",
            UnifiedType::TimeMicros => "time_micros",
            UnifiedType::TimestampMillis => "timestamp_millis",
            UnifiedType::TimestampMicros => "timestamp_micros",
            UnifiedType::Boolean => "boolean",
            UnifiedType::Enum(_) => "enum",
            UnifiedType::Struct(_) => "struct",
            UnifiedType::Array { .. } => "array",
            UnifiedType::Map { .. } => "map",
        }
    }

    /// True for every variant that has no child types
    pub fn is_primitive(&self) -> bool {
        !matches!(
            self,
            UnifiedType::Struct(_) | UnifiedType::Array { .. } | UnifiedType::Map { .. }
        )
    }

    /// Direct child types in declaration order
    pub fn children(&self) -> Vec<&UnifiedType> {
        match self {
            UnifiedType::Struct(record) => record.fields().iter().map(|f| &f.data_type).collect(),
            UnifiedType::Array { element } => vec![element.as_ref()],
            UnifiedType::Map { key, value } => vec![key.as_ref(), value.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Pre-order traversal of this type and all nested types
    pub fn walk<F>(&self, visitor: &mut F)
    where
        F: FnMut(&UnifiedType),
    {
        visitor(self);
        for child in self.children() {
            child.walk(visitor);
        }
    }

    /// Nesting depth; primitives have depth 1
    pub fn depth(&self) -> usize {
        1 + self.children().iter().map(|c| c.depth()).max().unwrap_or(0)
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            UnifiedType::Struct(record) => Some(record),
            _ => None,
        }
    }
}

/// Decimal attributes; `0 < precision` and `scale <= precision`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDecimal")]
pub struct DecimalType {
    precision: u32,
    scale: u32,
}

#[derive(Deserialize)]
struct RawDecimal {
    precision: u32,
    scale: u32,
}

impl TryFrom<RawDecimal> for DecimalType {
    type Error = SchemaError;

    fn try_from(raw: RawDecimal) -> Result<Self, Self::Error> {
        DecimalType::new(raw.precision, raw.scale)
    }
}

impl DecimalType {
    pub fn new(precision: u32, scale: u32) -> SchemaResult<Self> {
        if precision == 0 {
            return Err(SchemaError::invalid_parameters(
                "decimal",
                "precision must be positive",
            ));
        }
        if scale > precision {
            return Err(SchemaError::invalid_parameters(
                "decimal",
                format!("scale {} exceeds precision {}", scale, precision),
            ));
        }
        Ok(Self { precision, scale })
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn scale(&self) -> u32 {
        self.scale
    }
}

/// Fixed-length character string attributes; `size > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSize")]
pub struct CharType {
    size: u32,
}

/// Bounded character string attributes; `size > 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSize")]
pub struct VarcharType {
    size: u32,
}

#[derive(Deserialize)]
struct RawSize {
    size: u32,
}

fn check_size(type_name: &str, size: u32) -> SchemaResult<u32> {
    if size == 0 {
        Err(SchemaError::invalid_parameters(type_name, "size must be positive"))
    } else {
        Ok(size)
    }
}

impl CharType {
    pub fn new(size: u32) -> SchemaResult<Self> {
        Ok(Self {
            size: check_size("char", size)?,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl TryFrom<RawSize> for CharType {
    type Error = SchemaError;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        CharType::new(raw.size)
    }
}

impl VarcharType {
    pub fn new(size: u32) -> SchemaResult<Self> {
        Ok(Self {
            size: check_size("varchar", size)?,
        })
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl TryFrom<RawSize> for VarcharType {
    type Error = SchemaError;

    fn try_from(raw: RawSize) -> Result<Self, Self::Error> {
        VarcharType::new(raw.size)
    }
}

/// Enumeration symbols in declared order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumType {
    pub symbols: Vec<String>,
}

impl EnumType {
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            symbols: symbols.into_iter().map(Into::into).collect(),
        }
    }

    /// No symbol list was available from the source
    pub fn is_unspecified(&self) -> bool {
        self.symbols.is_empty()
    }
}
