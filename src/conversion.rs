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

//! Conversion traits for dialect type transformation
//!
//! Every dialect representation converts through the unified model; no
//! dialect converts directly into another.

use parquet::schema::types::Type as ParquetType;

use crate::errors::SchemaResult;
use crate::exporter::{Exporter, HiveType};
use crate::grammar;
use crate::importer::{Importer, SourceType};
use crate::model::UnifiedType;

/// Trait for converting dialect types to unified types
pub trait ToUnified {
    fn to_unified(&self) -> SchemaResult<UnifiedType>;
}

/// Trait for converting unified types to dialect types
pub trait FromUnified: Sized {
    fn from_unified(unified: &UnifiedType) -> SchemaResult<Self>;
}

impl ToUnified for SourceType {
    fn to_unified(&self) -> SchemaResult<UnifiedType> {
        Importer::default().import(self)
    }
}

impl ToUnified for ParquetType {
    fn to_unified(&self) -> SchemaResult<UnifiedType> {
        Importer::default().import_parquet(self)
    }
}

impl ToUnified for HiveType {
    fn to_unified(&self) -> SchemaResult<UnifiedType> {
        grammar::parse_type(self.as_str())
    }
}

impl FromUnified for HiveType {
    fn from_unified(unified: &UnifiedType) -> SchemaResult<Self> {
        Exporter::default().export(unified).map(HiveType::new)
    }
}

/// Utility for batch conversion; the first unmappable item fails the batch
pub fn convert_all<'a, T, I>(items: I) -> SchemaResult<Vec<UnifiedType>>
where
    T: ToUnified + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(|item| item.to_unified()).collect()
}

/// Convert between two dialects through the unified model
pub fn translate<S, D>(source: &S) -> SchemaResult<D>
where
    S: ToUnified,
    D: FromUnified,
{
    D::from_unified(&source.to_unified()?)
}
