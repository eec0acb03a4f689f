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

use crate::fields::*;
use crate::Block;

/// The width of the tail which closes every record.
pub const TAIL_LENGTH: usize = 23;

/// The right-anchored end of a record with the position and country of the
/// site.
#[derive(Block, Debug)]
#[welt2000(length = 23)]
pub struct Tail<'a> {
    pub altitude: Altitude<'a>,
    pub latitude: Latitude<'a>,
    pub longitude: Longitude<'a>,
    pub country: Country<'a>,
    pub site_type: SiteType,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::Error;

    #[test]
    fn tail_block() {
        let tail = Tail::try_from(b"   6S335646E1511038AUQ0".as_slice()).expect("tail should parse");

        assert_eq!(tail.altitude.as_meters(), Ok(6));
        assert_approx_eq!(
            tail.latitude.as_decimal().expect("latitude is valid"),
            -33.94611111111111
        );
        assert_approx_eq!(
            tail.longitude.as_decimal().expect("longitude is valid"),
            151.1772222222222
        );
        assert_eq!(tail.country.code(), Ok("AU"));
        assert_eq!(
            tail.site_type,
            SiteType {
                letter: b'Q',
                digit: b'0'
            }
        );
    }

    #[test]
    fn fail_on_short_tail() {
        assert_eq!(
            Tail::try_from(b"N511759E0065723DEP0".as_slice()).err(),
            Some(Error::InvalidBlockLength {
                block: "Tail",
                expected: TAIL_LENGTH,
                actual: 19,
            })
        );
    }

    #[test]
    fn length_matches_fields() {
        assert_eq!(<Tail as Block>::LENGTH, TAIL_LENGTH);
    }
}
