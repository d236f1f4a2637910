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

//! Hive type-string rendering helpers

use std::borrow::Cow;

pub const STRING: &str = "string";
pub const BOOLEAN: &str = "boolean";
pub const BINARY: &str = "binary";
pub const TINYINT: &str = "tinyint";
pub const SMALLINT: &str = "smallint";
pub const INT: &str = "int";
pub const BIGINT: &str = "bigint";
pub const FLOAT: &str = "float";
pub const DOUBLE: &str = "double";
pub const DATE: &str = "date";
pub const TIMESTAMP: &str = "timestamp";

pub fn decimal(precision: u32, scale: u32) -> String {
    format!("decimal({},{})", precision, scale)
}

pub fn varchar(size: u32) -> String {
    format!("varchar({})", size)
}

pub fn char(size: u32) -> String {
    format!("char({})", size)
}

pub fn array(element: &str) -> String {
    format!("array<{}>", element)
}

pub fn map(key: &str, value: &str) -> String {
    format!("map<{},{}>", key, value)
}

/// `struct<name:type,...>` from already rendered member types, in the given order
pub fn struct_type<'a, I>(fields: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let members: Vec<String> = fields
        .into_iter()
        .map(|(name, data_type)| format!("{}:{}", quote_field_name(name), data_type))
        .collect();
    format!("struct<{}>", members.join(","))
}

/// Back-quote a struct member name unless it is a plain identifier.
///
/// Plain names are emitted byte-for-byte; quoting is only applied where the
/// dialect would otherwise misread the name. A back-quote inside a quoted name
/// is doubled.
pub fn quote_field_name(name: &str) -> Cow<'_, str> {
    if is_plain_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{}`", name.replace('`', "``")))
    }
}

pub(crate) fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
