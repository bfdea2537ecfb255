// pathcross/svg/src/lexer.rs
//
// Copyright © 2020 The Pathcross Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Splits path text into command records.

use crate::error::ParseError;
use pathcross_content::command::{CommandKind, PathCommand};

/// A command record together with the byte offset of its letter.
pub(crate) type Token = (PathCommand, usize);

pub(crate) struct Lexer<'a> {
    source: &'a str,
    position: usize,
}

impl<'a> Lexer<'a> {
    pub(crate) fn new(source: &'a str) -> Lexer<'a> {
        Lexer { source, position: 0 }
    }

    /// Splits the whole source into one token per explicit command letter.
    pub(crate) fn tokens(mut self) -> Result<Vec<Token>, ParseError> {
        let mut tokens = vec![];
        loop {
            self.skip_whitespace();
            let (letter, position) = match self.peek() {
                None => break,
                Some(ch) if starts_number(ch) => {
                    return Err(ParseError::UnexpectedNumber { position: self.position });
                }
                Some(ch) => (ch, self.position),
            };
            let kind = match CommandKind::from_letter(letter) {
                Some(kind) => kind,
                None => return Err(ParseError::UnknownCommand { command: letter, position }),
            };
            self.position += letter.len_utf8();

            let params = self.params(kind)?;
            tokens.push((PathCommand::new(letter, params), position));
        }
        Ok(tokens)
    }

    /// Reads every number up to the next command letter.
    fn params(&mut self, kind: CommandKind) -> Result<Vec<f64>, ParseError> {
        let arity = kind.arity();
        let mut params = vec![];
        loop {
            self.skip_separators();
            match self.peek() {
                Some(ch) if starts_number(ch) => {}
                _ => return Ok(params),
            }
            if arity == 0 {
                return Err(ParseError::UnexpectedNumber { position: self.position });
            }

            let slot = params.len() % arity;
            if kind == CommandKind::Arc && (slot == 3 || slot == 4) {
                params.push(if self.flag()? { 1.0 } else { 0.0 });
            } else {
                params.push(self.number()?);
            }
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// Skips whitespace, at most one comma, and any whitespace after it.
    fn skip_separators(&mut self) {
        self.skip_whitespace();
        if self.peek() == Some(',') {
            self.position += 1;
            self.skip_whitespace();
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.source.as_bytes();
        while self.position < bytes.len() && bytes[self.position].is_ascii_whitespace() {
            self.position += 1;
        }
    }

    /// Reads the longest numeric literal at the current position.
    ///
    /// A literal ends as soon as another character could not continue it, so `0.5.5` reads as
    /// `0.5` followed by `.5`, and `10-5` as `10` followed by `-5`.
    fn number(&mut self) -> Result<f64, ParseError> {
        let bytes = self.source.as_bytes();
        let start = self.position;
        let invalid = ParseError::InvalidNumber { position: start };

        let mut end = start;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let mut digits = skip_digits(bytes, &mut end);
        if end < bytes.len() && bytes[end] == b'.' {
            end += 1;
            digits += skip_digits(bytes, &mut end);
        }
        if digits == 0 {
            return Err(invalid);
        }

        if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
            end += 1;
            if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
                end += 1;
            }
            if skip_digits(bytes, &mut end) == 0 {
                return Err(invalid);
            }
        }

        let value = self.source[start..end].parse::<f64>().map_err(|_| invalid)?;
        self.position = end;
        Ok(value)
    }

    /// Reads a single-digit arc flag. Flags need no separator after them.
    fn flag(&mut self) -> Result<bool, ParseError> {
        let value = match self.peek() {
            Some('0') => false,
            Some('1') => true,
            _ => return Err(ParseError::InvalidFlag { position: self.position }),
        };
        self.position += 1;
        Ok(value)
    }
}

#[inline]
fn starts_number(ch: char) -> bool {
    ch.is_ascii_digit() || ch == '.' || ch == '-' || ch == '+'
}

fn skip_digits(bytes: &[u8], end: &mut usize) -> usize {
    let start = *end;
    while *end < bytes.len() && bytes[*end].is_ascii_digit() {
        *end += 1;
    }
    *end - start
}
