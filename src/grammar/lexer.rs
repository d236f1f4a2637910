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

//! Tokenizer for Hive type strings

use crate::errors::{SchemaError, SchemaResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TokenKind {
    /// Bare word: keyword, plain identifier or number
    Word(String),
    /// Back-quoted identifier with escapes resolved
    Quoted(String),
    LAngle,
    RAngle,
    LParen,
    RParen,
    Comma,
    Colon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    /// Byte offset of the token in the input
    pub position: usize,
}

pub(crate) fn tokenize(input: &str) -> SchemaResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(position, c)) = chars.peek() {
        let kind = match c {
            c if c.is_whitespace() => {
                chars.next();
                continue;
            }
            '<' => TokenKind::LAngle,
            '>' => TokenKind::RAngle,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '`' => {
                chars.next();
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some((_, '`')) => {
                            if matches!(chars.peek(), Some(&(_, '`'))) {
                                chars.next();
                                name.push('`');
                            } else {
                                break;
                            }
                        }
                        Some((_, ch)) => name.push(ch),
                        None => {
                            return Err(SchemaError::malformed(input, position, "unterminated quoted identifier"))
                        }
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Quoted(name),
                    position,
                });
                continue;
            }
            c if c.is_ascii_alphanumeric() || c == '_' => {
                let mut word = String::new();
                while let Some(&(_, ch)) = chars.peek() {
                    if ch.is_ascii_alphanumeric() || ch == '_' {
                        word.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Word(word),
                    position,
                });
                continue;
            }
            other => {
                return Err(SchemaError::malformed(
                    input,
                    position,
                    format!("unexpected character '{}'", other),
                ))
            }
        };
        chars.next();
        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}
