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

//! Dialect String Grammar
//!
//! Construction and parsing of parameterized Hive type strings such as
//! `decimal(p,s)`, `varchar(n)`, `char(n)`, `array<...>`, `map<...>` and
//! `struct<...>`. Rendering helpers live in [`render`]; the reverse direction
//! is a small tokenizer plus a recursive-descent parser.

mod lexer;
mod parser;
pub mod render;

pub use parser::{parse_struct_fields, parse_type};
