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

//! Primitive column mapping

use super::descriptor::{annotation_label, Annotation, PhysicalType};
use super::Importer;
use crate::errors::{SchemaError, SchemaResult};
use crate::model::UnifiedType;

/// Digits of an unsigned 64-bit maximum (18446744073709551615)
const UINT64_DECIMAL_DIGITS: u32 = 20;

const INT32_MAX_DECIMAL_PRECISION: u32 = 9;
const INT64_MAX_DECIMAL_PRECISION: u32 = 18;

impl Importer {
    pub(super) fn import_primitive(
        &self,
        physical: PhysicalType,
        annotation: Option<&Annotation>,
    ) -> SchemaResult<UnifiedType> {
        use Annotation as A;
        use PhysicalType as P;

        let unsupported = || SchemaError::unsupported_source(physical.to_string(), annotation_label(annotation));

        let unified = match (physical, annotation) {
            // INT96 is always a legacy timestamp regardless of annotation
            (P::Int96, _) => UnifiedType::TimestampMillis,

            (P::Boolean, None) => UnifiedType::Boolean,

            (P::Int32, None) => UnifiedType::Int32,
            (P::Int32, Some(A::Integer { bit_width, signed: true })) => match bit_width {
                8 => UnifiedType::Int8,
                16 => UnifiedType::Int16,
                32 => UnifiedType::Int32,
                _ => return Err(unsupported()),
            },
            (P::Int32, Some(A::Integer { bit_width, signed: false })) => {
                let widened = match bit_width {
                    8 => UnifiedType::Int16,
                    16 => UnifiedType::Int32,
                    32 => UnifiedType::Int64,
                    _ => return Err(unsupported()),
                };
                self.widen_unsigned(physical, annotation, widened)?
            }
            (P::Int32, Some(A::Date)) => UnifiedType::Date,
            (P::Int32, Some(A::TimeMillis)) => UnifiedType::TimeMillis,

            (P::Int64, None) => UnifiedType::Int64,
            (P::Int64, Some(A::Integer { bit_width: 64, signed: true })) => UnifiedType::Int64,
            (P::Int64, Some(A::Integer { bit_width: 64, signed: false })) => {
                let widened = UnifiedType::decimal(UINT64_DECIMAL_DIGITS, 0)?;
                self.widen_unsigned(physical, annotation, widened)?
            }
            (P::Int64, Some(A::TimeMicros)) => UnifiedType::TimeMicros,
            (P::Int64, Some(A::TimestampMillis)) => UnifiedType::TimestampMillis,
            (P::Int64, Some(A::TimestampMicros)) => UnifiedType::TimestampMicros,

            (
                P::Int32 | P::Int64 | P::ByteArray | P::FixedLenByteArray { .. },
                Some(A::Decimal { precision, scale }),
            ) => {
                let precision = precision.ok_or_else(unsupported)?;
                // Parquet defines an absent scale as zero
                let scale = scale.unwrap_or(0);
                if let Some(max) = max_decimal_precision(physical) {
                    if precision > max {
                        return Err(unsupported());
                    }
                }
                UnifiedType::decimal(precision, scale)?
            }

            (P::Float, None) => UnifiedType::Float32,
            (P::Double, None) => UnifiedType::Float64,
            // Every half-precision value is exactly representable as single precision
            (P::FixedLenByteArray { length: 2 }, Some(A::Float16)) => UnifiedType::Float32,

            (P::ByteArray, None) | (P::ByteArray, Some(A::Bson)) => UnifiedType::Binary,
            (P::ByteArray, Some(A::Utf8)) | (P::ByteArray, Some(A::Json)) => UnifiedType::String,
            // Parquet metadata does not carry the symbol list
            (P::ByteArray, Some(A::Enum)) => UnifiedType::enumeration(Vec::<String>::new()),

            (P::FixedLenByteArray { .. }, None) => UnifiedType::Binary,
            (P::FixedLenByteArray { length: 16 }, Some(A::Uuid)) => UnifiedType::Binary,

            _ => return Err(unsupported()),
        };

        tracing::trace!(
            physical = %physical,
            annotation = %annotation_label(annotation),
            unified = unified.type_name(),
            "mapped primitive"
        );
        Ok(unified)
    }

    fn widen_unsigned(
        &self,
        physical: PhysicalType,
        annotation: Option<&Annotation>,
        widened: UnifiedType,
    ) -> SchemaResult<UnifiedType> {
        if !self.options().unsigned.allows_widening() {
            return Err(SchemaError::unsupported_source(
                physical.to_string(),
                annotation_label(annotation),
            ));
        }
        tracing::debug!(
            annotation = %annotation_label(annotation),
            unified = widened.type_name(),
            "widened unsigned integer"
        );
        Ok(widened)
    }
}

/// Largest decimal precision the physical storage can hold, `None` if unbounded
fn max_decimal_precision(physical: PhysicalType) -> Option<u32> {
    match physical {
        PhysicalType::Int32 => Some(INT32_MAX_DECIMAL_PRECISION),
        PhysicalType::Int64 => Some(INT64_MAX_DECIMAL_PRECISION),
        PhysicalType::FixedLenByteArray { length } => Some(fixed_len_max_precision(length)),
        _ => None,
    }
}

/// floor(log10(2^(8n-1) - 1)): digits of the largest signed two's-complement value in n bytes
fn fixed_len_max_precision(length: u32) -> u32 {
    if length == 0 {
        return 0;
    }
    let bits = 8 * u64::from(length) - 1;
    (bits as f64 * std::f64::consts::LOG10_2).floor() as u32
}
