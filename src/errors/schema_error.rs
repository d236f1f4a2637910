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

//! Core translation error type

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ConfigError;

/// Result alias used by every conversion in the crate
pub type SchemaResult<T> = std::result::Result<T, SchemaError>;

/// Main schema translation error type
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SchemaError {
    /// A unified type was constructed with attributes that violate its invariants
    #[error("Invalid type parameters for {type_name}: {reason}")]
    InvalidTypeParameters { type_name: String, reason: String },

    /// A source physical type / annotation pair has no unified mapping
    #[error("Unsupported source type: {physical} annotated {annotation}{}", display_path(.path))]
    UnsupportedSourceType {
        physical: String,
        annotation: String,
        path: String,
    },

    /// A unified type has no rendering in the target dialect under the active policy
    #[error("Unsupported target type: {type_name} cannot be rendered as {dialect} ({reason}){}", display_path(.path))]
    UnsupportedTargetType {
        type_name: String,
        dialect: String,
        reason: String,
        path: String,
    },

    /// A dialect type string could not be parsed
    #[error("Malformed type string '{input}' at position {position}: {reason}")]
    MalformedTypeString {
        input: String,
        position: usize,
        reason: String,
    },

    /// The parquet crate rejected a schema description
    #[error("Source schema error: {0}")]
    SourceSchema(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        String::new()
    } else {
        format!(" at '{}'", path)
    }
}

impl SchemaError {
    pub fn invalid_parameters(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        SchemaError::InvalidTypeParameters {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    pub fn unsupported_source(physical: impl Into<String>, annotation: impl Into<String>) -> Self {
        SchemaError::UnsupportedSourceType {
            physical: physical.into(),
            annotation: annotation.into(),
            path: String::new(),
        }
    }

    pub fn unsupported_target(
        type_name: impl Into<String>,
        dialect: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SchemaError::UnsupportedTargetType {
            type_name: type_name.into(),
            dialect: dialect.into(),
            reason: reason.into(),
            path: String::new(),
        }
    }

    pub fn malformed(input: impl Into<String>, position: usize, reason: impl Into<String>) -> Self {
        SchemaError::MalformedTypeString {
            input: input.into(),
            position,
            reason: reason.into(),
        }
    }

    /// Prefix the field path of an unsupported-type error with `segment`.
    ///
    /// Conversions call this while unwinding out of a nested field, so the
    /// final error names the full dotted path of the offending field.
    pub fn within(self, segment: &str) -> Self {
        match self {
            SchemaError::UnsupportedSourceType {
                physical,
                annotation,
                path,
            } => SchemaError::UnsupportedSourceType {
                physical,
                annotation,
                path: join_path(segment, &path),
            },
            SchemaError::UnsupportedTargetType {
                type_name,
                dialect,
                reason,
                path,
            } => SchemaError::UnsupportedTargetType {
                type_name,
                dialect,
                reason,
                path: join_path(segment, &path),
            },
            other => other,
        }
    }

    /// Dotted field path carried by unsupported-type errors, if any
    pub fn path(&self) -> Option<&str> {
        match self {
            SchemaError::UnsupportedSourceType { path, .. }
            | SchemaError::UnsupportedTargetType { path, .. } => Some(path.as_str()),
            _ => None,
        }
    }

    pub fn is_unsupported_source(&self) -> bool {
        matches!(self, SchemaError::UnsupportedSourceType { .. })
    }

    pub fn is_unsupported_target(&self) -> bool {
        matches!(self, SchemaError::UnsupportedTargetType { .. })
    }

    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, SchemaError::InvalidTypeParameters { .. })
    }
}

fn join_path(segment: &str, rest: &str) -> String {
    if rest.is_empty() {
        segment.to_string()
    } else {
        format!("{}.{}", segment, rest)
    }
}
