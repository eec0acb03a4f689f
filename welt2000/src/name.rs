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

//! The name region between the short identifier and the tail of a record.

use crate::blocks::{locate, FEATURE_BLOCK_LENGTH};
use crate::tables::tokens;

/// The name region split into display text and feature block.
#[derive(Clone, PartialEq, Debug)]
pub struct NameRegion {
    /// The cleaned display name.
    pub name: String,
    /// The raw feature block padded with blanks.
    pub block: Option<[u8; FEATURE_BLOCK_LENGTH]>,
}

impl NameRegion {
    pub fn new(region: &[u8]) -> Self {
        match locate(region) {
            Some((position, block)) => Self {
                name: clean_name(&region[..position]),
                block: Some(block),
            },
            None => Self {
                name: clean_name(region),
                block: None,
            },
        }
    }
}

/// Collapses whitespace and strips continuation marks from the end.
pub fn clean_name(text: &[u8]) -> String {
    let text = String::from_utf8_lossy(text);
    let mut name = text.split_whitespace().collect::<Vec<_>>().join(" ");

    let len = name
        .trim_end_matches(|c: char| matches!(c, '!' | '?' | '+') || c.is_whitespace())
        .len();
    name.truncate(len);

    name
}

/// Returns the first number of one or two digits standing alone in a name.
pub fn field_number(name: &str) -> Option<u8> {
    tokens(name)
        .filter(|token| token.len() <= 2 && token.bytes().all(|b| b.is_ascii_digit()))
        .find_map(|token| token.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_name_and_block() {
        let region = NameRegion::new(b"MARCOUX CHAMP 8!*FL08S 2513131    ");

        assert_eq!(region.name, "MARCOUX CHAMP 8");
        assert_eq!(region.block.as_ref(), Some(b"*FL08S 2513131    "));
    }

    #[test]
    fn keeps_name_without_block() {
        let region = NameRegion::new(b"EDDLN0 EDDL N  PFLICHTMELDEPUNKT  ");

        assert_eq!(region.name, "EDDLN0 EDDL N PFLICHTMELDEPUNKT");
        assert_eq!(region.block, None);
    }

    #[test]
    fn strips_continuation_marks() {
        assert_eq!(clean_name(b"FOO BAR ?"), "FOO BAR");
        assert_eq!(clean_name(b"FOO BAR !"), "FOO BAR");
        assert_eq!(clean_name(b"FOO+ !  "), "FOO");
        assert_eq!(clean_name(b"   "), "");
    }

    #[test]
    fn finds_field_number() {
        assert_eq!(field_number("MARCOUX CHAMP 8"), Some(8));
        assert_eq!(field_number("CHAMP 12 NORD"), Some(12));
        assert_eq!(field_number("WEISWEILER KW 1011FT"), None);
        assert_eq!(field_number("EDDLN0"), None);
    }
}
