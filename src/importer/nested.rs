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

//! Group, list and map handling

use super::descriptor::{annotation_label, Annotation, Repetition, SourceType};
use super::Importer;
use crate::errors::{SchemaError, SchemaResult};
use crate::model::{StructField, StructType, UnifiedType};

impl Importer {
    pub(super) fn import_node(&self, source: &SourceType) -> SchemaResult<UnifiedType> {
        match source {
            SourceType::Primitive {
                physical, annotation, ..
            } => self.import_primitive(*physical, annotation.as_ref()),
            SourceType::Group {
                name,
                annotation,
                fields,
                ..
            } => match annotation {
                None => Ok(UnifiedType::Struct(self.import_record(name, fields)?)),
                Some(Annotation::List) => self.import_list(name, fields),
                Some(Annotation::Map) | Some(Annotation::MapKeyValue) => {
                    self.import_map(annotation.as_ref(), fields)
                }
                Some(other) => Err(SchemaError::unsupported_source("GROUP", other.to_string())),
            },
        }
    }

    /// Type of a node as seen from its parent: a bare repeated node is a list
    fn field_type(&self, source: &SourceType) -> SchemaResult<UnifiedType> {
        let element = self.import_node(source)?;
        Ok(match source.repetition() {
            Repetition::Repeated => UnifiedType::array(element),
            Repetition::Required | Repetition::Optional => element,
        })
    }

    fn import_field(&self, source: &SourceType) -> SchemaResult<StructField> {
        let data_type = self
            .field_type(source)
            .map_err(|e| e.within(source.name()))?;
        let nullable = source.repetition() == Repetition::Optional;
        tracing::debug!(
            field = source.name(),
            unified = data_type.type_name(),
            nullable,
            "imported field"
        );
        Ok(StructField::new(source.name(), data_type, nullable))
    }

    pub(super) fn import_record(&self, name: &str, fields: &[SourceType]) -> SchemaResult<StructType> {
        if fields.is_empty() {
            return Err(SchemaError::unsupported_source(
                "GROUP",
                format!("NONE (group '{}' has no fields)", name),
            ));
        }
        let fields = fields
            .iter()
            .map(|field| self.import_field(field))
            .collect::<SchemaResult<Vec<_>>>()?;
        StructType::new(fields)
    }

    /// LIST groups, including the legacy two-level layouts:
    ///
    /// ```text
    /// <rep> group name (LIST) { repeated group list { <rep> <type> element; } }
    /// <rep> group name (LIST) { repeated <type> element; }
    /// <rep> group name (LIST) { repeated group array { ...record fields... } }
    /// ```
    fn import_list(&self, name: &str, fields: &[SourceType]) -> SchemaResult<UnifiedType> {
        let malformed = || SchemaError::unsupported_source("GROUP", "LIST");
        let repeated = match fields {
            [only] if only.repetition() == Repetition::Repeated => only,
            _ => return Err(malformed()),
        };

        let element = match repeated {
            SourceType::Primitive { .. } => self.import_node(repeated)?,
            SourceType::Group {
                name: repeated_name,
                annotation,
                fields: inner,
                ..
            } => {
                let legacy_record = inner.len() > 1
                    || repeated_name == "array"
                    || *repeated_name == format!("{}_tuple", name);
                if annotation.is_some() {
                    self.import_node(repeated)?
                } else if legacy_record {
                    UnifiedType::Struct(self.import_record(repeated_name, inner)?)
                } else {
                    match inner.as_slice() {
                        [element] => self
                            .field_type(element)
                            .map_err(|e| e.within(element.name()))?,
                        _ => return Err(malformed()),
                    }
                }
            }
        };
        Ok(UnifiedType::array(element))
    }

    /// MAP / MAP_KEY_VALUE groups: `<rep> group name (MAP) { repeated group key_value { required <k> key; <rep> <v> value; } }`
    fn import_map(&self, annotation: Option<&Annotation>, fields: &[SourceType]) -> SchemaResult<UnifiedType> {
        let malformed = || SchemaError::unsupported_source("GROUP", annotation_label(annotation));
        let entries = match fields {
            [only] if only.repetition() == Repetition::Repeated => only,
            _ => return Err(malformed()),
        };
        let (key, value) = match entries {
            SourceType::Group { fields: kv, .. } => match kv.as_slice() {
                [key, value] => (key, value),
                // A key without a value is a set, which the model cannot express
                _ => return Err(malformed()),
            },
            SourceType::Primitive { .. } => return Err(malformed()),
        };

        let key_type = self.field_type(key).map_err(|e| e.within(key.name()))?;
        let value_type = self.field_type(value).map_err(|e| e.within(value.name()))?;
        Ok(UnifiedType::map(key_type, value_type))
    }
}
