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

use crate::{Classifier, Error, FixedField};

/// The character which opens a feature block.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Marker {
    /// `#`
    Hash,
    /// `*`
    Asterisk,
}

impl Marker {
    /// Returns `true` if the byte opens a feature block.
    #[inline]
    pub fn is_marker(byte: u8) -> bool {
        matches!(byte, b'#' | b'*')
    }
}

impl FixedField<'_> for Marker {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes.first() {
            Some(b'#') => Ok(Self::Hash),
            Some(b'*') => Ok(Self::Asterisk),
            Some(&byte) => Err(Error::InvalidCharacter {
                field: "Marker",
                byte,
                expected: "# or *",
            }),
            None => Err(Error::InvalidFieldLength {
                expected: 1,
                actual: 0,
            }),
        }
    }
}

/// Site codes with a meaning other than an ICAO location indicator.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Special {
    /// `GLD`
    Glidersite,
    /// `ULM`
    Ultralight,
}

impl Special {
    /// Looks up a three letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "GLD" => Some(Self::Glidersite),
            "ULM" => Some(Self::Ultralight),
            _ => None,
        }
    }

    /// The classifiers a site with this code carries.
    pub fn classifiers(&self) -> &'static [Classifier] {
        match self {
            Self::Glidersite => &[Classifier::Airfield, Classifier::Glidersite],
            Self::Ultralight => &[Classifier::Ulm],
        }
    }
}

/// What the code of a feature block designates.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Designator<'a> {
    /// A four letter ICAO location indicator.
    Icao(&'a str),
    /// A three letter special code followed by filler.
    Special(Special),
    /// Any other code, e.g. a catalogue reference.
    Unlisted,
}

/// The four character code following the marker of a feature block.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Code<'a>(&'a [u8; 4]);

impl<'a> Code<'a> {
    pub fn designator(&self) -> Designator<'a> {
        if self.0.iter().all(u8::is_ascii_uppercase) {
            // all bytes are ASCII
            return Designator::Icao(std::str::from_utf8(self.0).unwrap_or_default());
        }

        let code = std::str::from_utf8(self.0)
            .unwrap_or_default()
            .trim_matches(|c: char| !c.is_ascii_alphanumeric());

        Special::from_code(code).map_or(Designator::Unlisted, Designator::Special)
    }
}

impl<'a> FixedField<'a> for Code<'a> {
    const LENGTH: usize = 4;

    fn from_bytes(bytes: &'a [u8]) -> Result<Self, Error> {
        bytes
            .get(..4)
            .and_then(|b| b.try_into().ok())
            .map(Self)
            .ok_or(Error::InvalidFieldLength {
                expected: 4,
                actual: bytes.len(),
            })
    }
}
