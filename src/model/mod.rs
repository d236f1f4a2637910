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

//! Unified Type Model
//!
//! The single, engine-neutral representation of a tabular/columnar schema.
//! Dialect converters translate into and out of this model and never talk to
//! each other directly.
//!
//! Values are immutable owned trees. Attribute invariants (decimal precision
//! and scale, character sizes, unique record field names) are enforced by the
//! validating constructors, so an invalid value cannot be built or deserialized.

mod fields;
mod types;

pub use fields::{StructField, StructType};
pub use types::{CharType, DecimalType, EnumType, UnifiedType, VarcharType};
