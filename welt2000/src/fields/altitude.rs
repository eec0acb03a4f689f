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

use crate::{Alphanumeric, Error};

/// Elevation of the site in meters, right-justified and blank padded.
pub type Altitude<'a> = Alphanumeric<'a, 4>;

impl<'a> Altitude<'a> {
    /// Returns the altitude in meters in the range -999 to 9999.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a signed number.
    pub fn as_meters(&self) -> Result<i16, Error> {
        let meters = self
            .as_str()
            .parse::<i16>()
            .map_err(|_| Error::NotANumber {
                bytes: self.0.to_vec(),
            })?;

        if (-999..=9999).contains(&meters) {
            Ok(meters)
        } else {
            Err(Error::OutOfRange {
                field: "Altitude",
                value: meters.into(),
                expected: "between -999 and 9999 meters",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_padded_altitude() {
        let alt = Altitude::from_bytes(b"   6").expect("altitude should parse");
        assert_eq!(alt.as_meters(), Ok(6));

        let alt = Altitude::from_bytes(b"1011").expect("altitude should parse");
        assert_eq!(alt.as_meters(), Ok(1011));
    }

    #[test]
    fn parses_below_sea_level() {
        let alt = Altitude::from_bytes(b" -12").expect("altitude should parse");
        assert_eq!(alt.as_meters(), Ok(-12));
    }

    #[test]
    #[should_panic(expected = "NotANumber")]
    fn fail_on_garbage() {
        let alt = Altitude::from_bytes(b"12X4").expect("altitude should parse");
        alt.as_meters().unwrap();
    }
}
