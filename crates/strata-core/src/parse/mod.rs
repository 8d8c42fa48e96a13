// Copyright 2025 the Strata Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stream tokenization for level loading.
//!
//! Level data is a flat sequence of whitespace-separated tokens. The
//! [`TokenReader`] consumes an [`io::BufRead`] cursor linearly, one token
//! at a time, so each record grammar composes by simply reading its own
//! tokens in order.

use std::fmt;
use std::io::{self, BufRead};

/// An error produced while loading level data from a stream.
#[derive(Debug)]
pub enum LoadError {
    /// The stream ended before the expected token.
    UnexpectedEof,
    /// A token was present but did not parse as the expected value.
    Malformed {
        /// The offending token as read from the stream.
        token: String,
        /// A description of what was expected instead.
        expected: &'static str,
    },
    /// The underlying reader failed.
    Io(io::Error),
    /// A record inside a counted sequence failed to parse.
    BodyRecord {
        /// Zero-based index of the failing record.
        index: usize,
        /// The underlying parse failure.
        source: Box<LoadError>,
    },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::UnexpectedEof => {
                write!(f, "Unexpected end of stream")
            }
            LoadError::Malformed { token, expected } => {
                write!(f, "Malformed token '{token}': expected {expected}")
            }
            LoadError::Io(err) => {
                write!(f, "Stream read failed: {err}")
            }
            LoadError::BodyRecord { index, source } => {
                write!(f, "Record {index} failed to parse: {source}")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(err) => Some(err),
            LoadError::BodyRecord { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        LoadError::Io(err)
    }
}

/// A whitespace-delimited token scanner over a buffered reader.
///
/// The cursor only moves forward: every `next_*` call consumes exactly the
/// bytes of one token plus the whitespace before it.
pub struct TokenReader<R> {
    inner: R,
}

impl<R: BufRead> TokenReader<R> {
    /// Wraps a buffered reader.
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next whitespace-delimited token.
    ///
    /// Returns [`LoadError::UnexpectedEof`] if the stream ends before any
    /// token byte is seen.
    pub fn next_token(&mut self) -> Result<String, LoadError> {
        let mut token = String::new();
        loop {
            let buf = self.inner.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut consumed = 0;
            let mut terminated = false;
            for &byte in buf {
                if byte.is_ascii_whitespace() {
                    consumed += 1;
                    if !token.is_empty() {
                        terminated = true;
                        break;
                    }
                } else {
                    token.push(byte as char);
                    consumed += 1;
                }
            }
            self.inner.consume(consumed);
            if terminated {
                break;
            }
        }
        if token.is_empty() {
            Err(LoadError::UnexpectedEof)
        } else {
            Ok(token)
        }
    }

    /// Reads the next token and parses it as an unsigned integer.
    pub fn next_usize(&mut self) -> Result<usize, LoadError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| LoadError::Malformed {
            token,
            expected: "an unsigned integer",
        })
    }

    /// Reads the next token and parses it as an `f32`.
    pub fn next_f32(&mut self) -> Result<f32, LoadError> {
        let token = self.next_token()?;
        token.parse().map_err(|_| LoadError::Malformed {
            token,
            expected: "a number",
        })
    }
}
