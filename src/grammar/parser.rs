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

//! Recursive-descent parser for Hive type strings
//!
//! ```text
//! type    := scalar | decimal | char | varchar | array | map | struct
//! decimal := ("decimal" | "numeric") [ "(" INT [ "," INT ] ")" ]
//! char    := "char" "(" INT ")"
//! varchar := "varchar" "(" INT ")"
//! array   := "array" "<" type ">"
//! map     := "map" "<" type "," type ">"
//! struct  := "struct" "<" field { "," field } ">"
//! field   := (WORD | QUOTED) ":" type
//! ```
//!
//! Nested member types are parsed by recursion, never by splitting on commas,
//! so `struct<a:map<string,int>,b:int>` has exactly two members.

use super::lexer::{tokenize, Token, TokenKind};
use crate::errors::{SchemaError, SchemaResult};
use crate::model::{StructField, StructType, UnifiedType};

/// Hive's default decimal precision when none is given
const DEFAULT_DECIMAL_PRECISION: u32 = 10;

/// Guards the recursion against pathological nesting
const MAX_NESTING_DEPTH: usize = 128;

/// Parse a single Hive type string into a unified type.
///
/// Keywords are case-insensitive. Struct members parse as nullable fields,
/// because Hive types carry no nullability.
pub fn parse_type(input: &str) -> SchemaResult<UnifiedType> {
    let mut parser = Parser::new(input)?;
    let parsed = parser.parse_type(0)?;
    parser.expect_end()?;
    tracing::trace!(input, unified = parsed.type_name(), "parsed hive type");
    Ok(parsed)
}

/// Parse the members of a struct, given either the full `struct<...>` type
/// or just the member list between the angle brackets
pub fn parse_struct_fields(input: &str) -> SchemaResult<Vec<(String, UnifiedType)>> {
    let mut parser = Parser::new(input)?;
    // `struct:int` is a member named struct, `struct<` opens the wrapper
    let wrapped = parser.next_is_word("struct")
        && matches!(
            parser.tokens.get(parser.cursor + 1),
            Some(Token {
                kind: TokenKind::LAngle,
                ..
            })
        );
    let fields = if wrapped {
        parser.expect_word("struct")?;
        parser.expect(TokenKind::LAngle, "'<'")?;
        let fields = parser.parse_field_list(1)?;
        parser.expect(TokenKind::RAngle, "'>'")?;
        fields
    } else {
        parser.parse_field_list(0)?
    };
    parser.expect_end()?;
    Ok(fields)
}

struct Parser<'a> {
    input: &'a str,
    tokens: Vec<Token>,
    cursor: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> SchemaResult<Self> {
        Ok(Self {
            input,
            tokens: tokenize(input)?,
            cursor: 0,
        })
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned();
        if token.is_some() {
            self.cursor += 1;
        }
        token
    }

    /// Position of the next token, or the end of input
    fn position(&self) -> usize {
        self.peek().map_or(self.input.len(), |t| t.position)
    }

    fn error(&self, position: usize, reason: impl Into<String>) -> SchemaError {
        SchemaError::malformed(self.input, position, reason)
    }

    fn expect(&mut self, expected: TokenKind, what: &str) -> SchemaResult<()> {
        let position = self.position();
        match self.next() {
            Some(token) if token.kind == expected => Ok(()),
            Some(_) => Err(self.error(position, format!("expected {}", what))),
            None => Err(self.error(position, format!("expected {}, found end of input", what))),
        }
    }

    fn expect_end(&self) -> SchemaResult<()> {
        match self.peek() {
            None => Ok(()),
            Some(token) => Err(self.error(token.position, "unexpected trailing input")),
        }
    }

    fn next_is_word(&self, word: &str) -> bool {
        matches!(self.peek(), Some(Token { kind: TokenKind::Word(w), .. }) if w.eq_ignore_ascii_case(word))
    }

    fn expect_word(&mut self, word: &str) -> SchemaResult<()> {
        if self.next_is_word(word) {
            self.cursor += 1;
            Ok(())
        } else {
            Err(self.error(self.position(), format!("expected '{}'", word)))
        }
    }

    fn expect_number(&mut self) -> SchemaResult<u32> {
        let position = self.position();
        match self.next() {
            Some(Token {
                kind: TokenKind::Word(word),
                ..
            }) => word
                .parse::<u32>()
                .map_err(|_| self.error(position, format!("expected a number, found '{}'", word))),
            _ => Err(self.error(position, "expected a number")),
        }
    }

    fn parse_type(&mut self, depth: usize) -> SchemaResult<UnifiedType> {
        if depth > MAX_NESTING_DEPTH {
            return Err(self.error(self.position(), "type nesting too deep"));
        }

        let position = self.position();
        let keyword = match self.next() {
            Some(Token {
                kind: TokenKind::Word(word),
                ..
            }) => word.to_ascii_lowercase(),
            Some(_) => return Err(self.error(position, "expected a type name")),
            None => return Err(self.error(position, "expected a type name, found end of input")),
        };

        let parsed = match keyword.as_str() {
            "tinyint" => UnifiedType::Int8,
            "smallint" => UnifiedType::Int16,
            "int" | "integer" => UnifiedType::Int32,
            "bigint" => UnifiedType::Int64,
            "float" => UnifiedType::Float32,
            "double" => {
                if self.next_is_word("precision") {
                    self.cursor += 1;
                }
                UnifiedType::Float64
            }
            "boolean" => UnifiedType::Boolean,
            "string" => UnifiedType::String,
            "binary" => UnifiedType::Binary,
            "date" => UnifiedType::Date,
            "timestamp" => {
                if self.next_is_word("with") {
                    return Err(SchemaError::unsupported_source("hive", "timestamp with local time zone"));
                }
                UnifiedType::TimestampMillis
            }
            "decimal" | "numeric" => self.parse_decimal_params()?,
            "char" => UnifiedType::char(self.parse_size()?)?,
            "varchar" => UnifiedType::varchar(self.parse_size()?)?,
            "array" => {
                self.expect(TokenKind::LAngle, "'<'")?;
                let element = self.parse_type(depth + 1)?;
                self.expect(TokenKind::RAngle, "'>'")?;
                UnifiedType::array(element)
            }
            "map" => {
                self.expect(TokenKind::LAngle, "'<'")?;
                let key = self.parse_type(depth + 1)?;
                self.expect(TokenKind::Comma, "','")?;
                let value = self.parse_type(depth + 1)?;
                self.expect(TokenKind::RAngle, "'>'")?;
                UnifiedType::map(key, value)
            }
            "struct" => {
                self.expect(TokenKind::LAngle, "'<'")?;
                let fields = self.parse_field_list(depth + 1)?;
                self.expect(TokenKind::RAngle, "'>'")?;
                let fields = fields
                    .into_iter()
                    .map(|(name, data_type)| StructField::optional(name, data_type))
                    .collect();
                UnifiedType::Struct(StructType::new(fields)?)
            }
            "uniontype" | "void" | "interval" | "interval_year_month" | "interval_day_time" => {
                return Err(SchemaError::unsupported_source("hive", keyword.clone()));
            }
            other => return Err(self.error(position, format!("unknown type '{}'", other))),
        };
        Ok(parsed)
    }

    fn parse_decimal_params(&mut self) -> SchemaResult<UnifiedType> {
        if !matches!(self.peek(), Some(Token { kind: TokenKind::LParen, .. })) {
            return UnifiedType::decimal(DEFAULT_DECIMAL_PRECISION, 0);
        }
        self.cursor += 1;
        let precision = self.expect_number()?;
        let scale = if matches!(self.peek(), Some(Token { kind: TokenKind::Comma, .. })) {
            self.cursor += 1;
            self.expect_number()?
        } else {
            0
        };
        self.expect(TokenKind::RParen, "')'")?;
        UnifiedType::decimal(precision, scale)
    }

    fn parse_size(&mut self) -> SchemaResult<u32> {
        self.expect(TokenKind::LParen, "'('")?;
        let size = self.expect_number()?;
        self.expect(TokenKind::RParen, "')'")?;
        Ok(size)
    }

    fn parse_field_list(&mut self, depth: usize) -> SchemaResult<Vec<(String, UnifiedType)>> {
        let mut fields = Vec::new();
        loop {
            let position = self.position();
            let name = match self.next() {
                Some(Token {
                    kind: TokenKind::Word(name),
                    ..
                })
                | Some(Token {
                    kind: TokenKind::Quoted(name),
                    ..
                }) => name,
                _ => return Err(self.error(position, "expected a field name")),
            };
            self.expect(TokenKind::Colon, "':'")?;
            let data_type = self.parse_type(depth).map_err(|e| e.within(&name))?;
            fields.push((name, data_type));

            match self.peek() {
                Some(Token {
                    kind: TokenKind::Comma,
                    ..
                }) => self.cursor += 1,
                _ => break,
            }
        }
        Ok(fields)
    }
}
