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

//! Source-dialect schema descriptors
//!
//! A dialect-level mirror of a Parquet schema tree: physical storage kind,
//! optional logical annotation, and repetition per node. Descriptors can be
//! built directly or converted from the `parquet` crate's schema types (see
//! [`super::parquet_schema`]).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical storage kind of a primitive column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhysicalType {
    Boolean,
    Int32,
    Int64,
    /// 96-bit integer; by convention a legacy timestamp
    Int96,
    Float,
    Double,
    /// Variable-length byte sequence
    ByteArray,
    /// Fixed-length byte sequence of `length` bytes
    FixedLenByteArray { length: u32 },
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicalType::Boolean => write!(f, "BOOLEAN"),
            PhysicalType::Int32 => write!(f, "INT32"),
            PhysicalType::Int64 => write!(f, "INT64"),
            PhysicalType::Int96 => write!(f, "INT96"),
            PhysicalType::Float => write!(f, "FLOAT"),
            PhysicalType::Double => write!(f, "DOUBLE"),
            PhysicalType::ByteArray => write!(f, "BYTE_ARRAY"),
            PhysicalType::FixedLenByteArray { length } => {
                write!(f, "FIXED_LEN_BYTE_ARRAY({})", length)
            }
        }
    }
}

/// Logical annotation refining the meaning of a physical type or group
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Annotation {
    Utf8,
    Enum,
    Json,
    Bson,
    Uuid,
    /// Missing attributes stay `None`; the importer decides what is acceptable
    Decimal {
        precision: Option<u32>,
        scale: Option<u32>,
    },
    Date,
    TimeMillis,
    TimeMicros,
    TimeNanos,
    TimestampMillis,
    TimestampMicros,
    TimestampNanos,
    Integer { bit_width: u8, signed: bool },
    Float16,
    Interval,
    List,
    Map,
    MapKeyValue,
    /// Annotation the descriptor layer does not model; carried for error reporting
    Unknown(String),
}

impl Annotation {
    pub fn decimal(precision: u32, scale: u32) -> Self {
        Annotation::Decimal {
            precision: Some(precision),
            scale: Some(scale),
        }
    }

    pub fn int(bit_width: u8) -> Self {
        Annotation::Integer {
            bit_width,
            signed: true,
        }
    }

    pub fn uint(bit_width: u8) -> Self {
        Annotation::Integer {
            bit_width,
            signed: false,
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Utf8 => write!(f, "UTF8"),
            Annotation::Enum => write!(f, "ENUM"),
            Annotation::Json => write!(f, "JSON"),
            Annotation::Bson => write!(f, "BSON"),
            Annotation::Uuid => write!(f, "UUID"),
            Annotation::Decimal { precision, scale } => {
                let precision = precision.map_or_else(|| "?".to_string(), |p| p.to_string());
                let scale = scale.map_or_else(|| "?".to_string(), |s| s.to_string());
                write!(f, "DECIMAL({},{})", precision, scale)
            }
            Annotation::Date => write!(f, "DATE"),
            Annotation::TimeMillis => write!(f, "TIME_MILLIS"),
            Annotation::TimeMicros => write!(f, "TIME_MICROS"),
            Annotation::TimeNanos => write!(f, "TIME(NANOS)"),
            Annotation::TimestampMillis => write!(f, "TIMESTAMP_MILLIS"),
            Annotation::TimestampMicros => write!(f, "TIMESTAMP_MICROS"),
            Annotation::TimestampNanos => write!(f, "TIMESTAMP(NANOS)"),
            Annotation::Integer { bit_width, signed } => {
                write!(f, "{}INT_{}", if *signed { "" } else { "U" }, bit_width)
            }
            Annotation::Float16 => write!(f, "FLOAT16"),
            Annotation::Interval => write!(f, "INTERVAL"),
            Annotation::List => write!(f, "LIST"),
            Annotation::Map => write!(f, "MAP"),
            Annotation::MapKeyValue => write!(f, "MAP_KEY_VALUE"),
            Annotation::Unknown(label) => write!(f, "{}", label),
        }
    }
}

/// Display helper for an optional annotation
pub(crate) fn annotation_label(annotation: Option<&Annotation>) -> String {
    annotation.map_or_else(|| "NONE".to_string(), |a| a.to_string())
}

/// How a node is contained in its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Repetition {
    Required,
    Optional,
    Repeated,
}

/// A node of a source schema tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceType {
    Primitive {
        name: String,
        repetition: Repetition,
        physical: PhysicalType,
        annotation: Option<Annotation>,
    },
    Group {
        name: String,
        repetition: Repetition,
        annotation: Option<Annotation>,
        fields: Vec<SourceType>,
    },
}

impl SourceType {
    /// Required, unannotated primitive
    pub fn primitive(name: impl Into<String>, physical: PhysicalType) -> Self {
        SourceType::Primitive {
            name: name.into(),
            repetition: Repetition::Required,
            physical,
            annotation: None,
        }
    }

    /// Required, unannotated group
    pub fn group(name: impl Into<String>, fields: Vec<SourceType>) -> Self {
        SourceType::Group {
            name: name.into(),
            repetition: Repetition::Required,
            annotation: None,
            fields,
        }
    }

    pub fn with_annotation(mut self, value: Annotation) -> Self {
        match &mut self {
            SourceType::Primitive { annotation, .. } | SourceType::Group { annotation, .. } => {
                *annotation = Some(value);
            }
        }
        self
    }

    pub fn with_repetition(mut self, value: Repetition) -> Self {
        match &mut self {
            SourceType::Primitive { repetition, .. } | SourceType::Group { repetition, .. } => {
                *repetition = value;
            }
        }
        self
    }

    pub fn optional(self) -> Self {
        self.with_repetition(Repetition::Optional)
    }

    pub fn repeated(self) -> Self {
        self.with_repetition(Repetition::Repeated)
    }

    pub fn name(&self) -> &str {
        match self {
            SourceType::Primitive { name, .. } | SourceType::Group { name, .. } => name,
        }
    }

    pub fn repetition(&self) -> Repetition {
        match self {
            SourceType::Primitive { repetition, .. } | SourceType::Group { repetition, .. } => *repetition,
        }
    }

    pub fn annotation(&self) -> Option<&Annotation> {
        match self {
            SourceType::Primitive { annotation, .. } | SourceType::Group { annotation, .. } => {
                annotation.as_ref()
            }
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, SourceType::Group { .. })
    }
}
