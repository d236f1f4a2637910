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

//! Translation configuration
//!
//! Every gap between a dialect and the unified model is closed by an explicit
//! policy rather than a silent guess. The defaults here are the documented
//! behaviour; a TOML file can tighten or relax them:
//!
//! ```toml
//! [import]
//! unsigned = "widen"
//!
//! [export]
//! timestamp_micros = "widen"
//! time_of_day = "reject"
//! enums = "widen"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{ConfigError, SchemaResult};
use crate::exporter::ExportOptions;
use crate::importer::ImportOptions;

/// How a converter handles a type with no exact counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LossyPolicy {
    /// Substitute the documented value-preserving wider type
    Widen,
    /// Fail with an unsupported-type error
    Reject,
}

impl LossyPolicy {
    pub fn allows_widening(&self) -> bool {
        matches!(self, LossyPolicy::Widen)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationConfig {
    pub import: ImportOptions,
    pub export: ExportOptions,
}

impl TranslationConfig {
    /// Load from a TOML file; missing keys keep their defaults
    pub fn from_file(path: impl AsRef<Path>) -> SchemaResult<Self> {
        let path = path.as_ref();
        let settings = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::Load {
                source_name: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Self::deserialize_settings(settings, &path.display().to_string())
    }

    pub fn from_toml_str(contents: &str) -> SchemaResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::Load {
                source_name: "<inline>".to_string(),
                reason: e.to_string(),
            })?;
        Self::deserialize_settings(settings, "<inline>")
    }

    fn deserialize_settings(settings: config::Config, source_name: &str) -> SchemaResult<Self> {
        let loaded = settings
            .try_deserialize::<TranslationConfig>()
            .map_err(|e| ConfigError::Load {
                source_name: source_name.to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(source = source_name, config = ?loaded, "loaded translation config");
        Ok(loaded)
    }

    pub fn to_toml_string(&self) -> SchemaResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::TomlRenderError(e.to_string()).into())
    }
}
