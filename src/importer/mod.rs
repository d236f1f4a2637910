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

//! Source-Dialect Importer
//!
//! Converts a Parquet schema description into the unified type model. The
//! mapping is a two-level dispatch, first on physical storage kind and then on
//! the logical annotation. Any pair without a defined mapping fails with
//! `UnsupportedSourceType`; nothing is approximated.

mod descriptor;
mod nested;
pub mod parquet_schema;
mod primitive;

pub use descriptor::{Annotation, PhysicalType, Repetition, SourceType};
pub use parquet_schema::{import_message_type, import_parquet};

use serde::{Deserialize, Serialize};

use crate::config::LossyPolicy;
use crate::errors::{SchemaError, SchemaResult};
use crate::model::{StructType, UnifiedType};

/// Import-side policies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportOptions {
    /// Unsigned integers have no unified counterpart of the same width.
    /// `Widen` maps UINT_8/16/32 to the next wider signed integer and UINT_64
    /// to `decimal(20,0)`; `Reject` fails the import.
    pub unsigned: LossyPolicy,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            unsigned: LossyPolicy::Widen,
        }
    }
}

/// Stateless Parquet-to-unified converter
#[derive(Debug, Clone, Default)]
pub struct Importer {
    options: ImportOptions,
}

impl Importer {
    pub fn new(options: ImportOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ImportOptions {
        &self.options
    }

    /// Convert one node to its unified type.
    ///
    /// The node's own repetition is a property of its containment edge and is
    /// not reflected in the result; a plain group yields a `Struct`.
    pub fn import(&self, source: &SourceType) -> SchemaResult<UnifiedType> {
        self.import_node(source)
    }

    /// Convert a root group (a Parquet message) into a record
    pub fn import_schema(&self, root: &SourceType) -> SchemaResult<StructType> {
        match root {
            SourceType::Group {
                annotation: None,
                fields,
                ..
            } => {
                let record = self.import_record(root.name(), fields)?;
                tracing::debug!(
                    schema = root.name(),
                    fields = record.len(),
                    "imported source schema"
                );
                Ok(record)
            }
            SourceType::Group { annotation, .. } => Err(SchemaError::unsupported_source(
                "GROUP",
                descriptor::annotation_label(annotation.as_ref()),
            )
            .within(root.name())),
            SourceType::Primitive {
                physical, annotation, ..
            } => Err(SchemaError::unsupported_source(
                physical.to_string(),
                descriptor::annotation_label(annotation.as_ref()),
            )
            .within(root.name())),
        }
    }
}

/// Import a single node with default options
pub fn import(source: &SourceType) -> SchemaResult<UnifiedType> {
    Importer::default().import(source)
}

/// Import a root group with default options
pub fn import_schema(root: &SourceType) -> SchemaResult<StructType> {
    Importer::default().import_schema(root)
}
