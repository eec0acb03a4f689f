// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use crate::{Error, FixedField};

/// A fixed-width part of a WELT2000 record.
///
/// The record itself has no fixed layout as a whole. The short identifier
/// leads the line, the [tail](crate::blocks::Tail) is anchored to its end and
/// the [feature block](crate::blocks::FeatureBlock) is embedded in the name.
/// Each of those parts is fixed-width once it has been located.
pub trait Block<'a>: Sized {
    /// The name of the block used in error messages.
    const NAME: &'static str;

    /// The fixed length of this block in bytes.
    const LENGTH: usize;

    /// Parse this block type from a field iterator.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer is too short or contains invalid data.
    fn parse(fields: Fields<'a>) -> Result<Self, Error>;

    /// Parse this block type from bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if there are not exactly [`LENGTH`](Block::LENGTH)
    /// bytes or any error returned by [`parse`][Block::parse].
    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        if bytes.len() == Self::LENGTH {
            Self::parse(Fields::new(bytes))
        } else {
            Err(Error::InvalidBlockLength {
                block: Self::NAME,
                expected: Self::LENGTH,
                actual: bytes.len(),
            })
        }
    }
}

pub struct Fields<'a> {
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Fields<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, index: 0 }
    }

    /// Reads the next field, and advances the position by the field's length.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing the field fails.
    #[inline]
    pub fn next<F>(&mut self) -> Result<F, Error>
    where
        F: FixedField<'a>,
    {
        let field = F::from_bytes(self.bytes.get(self.index..).unwrap_or_default())?;
        self.index += F::LENGTH;
        Ok(field)
    }
}
