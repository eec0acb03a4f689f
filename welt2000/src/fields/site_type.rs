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

/// The letter and digit closing a record.
///
/// They classify a site which has no feature block, see
/// [`tables::site_type`](crate::tables::site_type).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SiteType {
    pub letter: u8,
    pub digit: u8,
}

impl FixedField<'_> for SiteType {
    const LENGTH: usize = 2;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        match bytes {
            [letter, digit, ..] => Ok(Self {
                letter: *letter,
                digit: *digit,
            }),
            _ => Err(Error::InvalidFieldLength {
                expected: 2,
                actual: bytes.len(),
            }),
        }
    }
}
