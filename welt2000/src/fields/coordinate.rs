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

/// The hemisphere of a coordinate which gives its sign.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Hemisphere {
    North,
    South,
    East,
    West,
}

impl Hemisphere {
    /// Returns `-1.0` for south and west, `1.0` otherwise.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Self::North | Self::East => 1.0,
            Self::South | Self::West => -1.0,
        }
    }
}

/// Converts degrees, minutes and seconds into signed decimal degrees.
pub fn to_decimal(hemisphere: Hemisphere, degrees: u16, minutes: u8, seconds: u8) -> f64 {
    let decimal = degrees as f64 + minutes as f64 / 60.0 + seconds as f64 / 3600.0;
    hemisphere.sign() * decimal
}

/// Checks the unit ranges of a position with `max` being 90 or 180 degrees.
fn check_range(
    field: &'static str,
    max: u16,
    degrees: u16,
    minutes: u8,
    seconds: u8,
) -> Result<(), Error> {
    if minutes >= 60 {
        return Err(Error::OutOfRange {
            field,
            value: minutes.into(),
            expected: "minutes below 60",
        });
    }

    if seconds >= 60 {
        return Err(Error::OutOfRange {
            field,
            value: seconds.into(),
            expected: "seconds below 60",
        });
    }

    if degrees > max || (degrees == max && (minutes > 0 || seconds > 0)) {
        return Err(Error::OutOfRange {
            field,
            value: degrees.into(),
            expected: if max == 90 {
                "at most 90 degrees"
            } else {
                "at most 180 degrees"
            },
        });
    }

    Ok(())
}

pub type Latitude<'a> = Alphanumeric<'a, 7>;

impl<'a> Latitude<'a> {
    /// Returns the latitude as decimal in the range -90.0 (south) to 90.0 (north).
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `N` nor `S` or if degrees,
    /// minutes or seconds are not a number within their range.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hemisphere = match self.first() {
            b'N' => Hemisphere::North,
            b'S' => Hemisphere::South,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Latitude",
                    byte,
                    expected: "N or S",
                })
            }
        };

        let deg = parse_numeric!(2, u16, &self.0[1..3])?;
        let min = parse_numeric!(2, u8, &self.0[3..5])?;
        let sec = parse_numeric!(2, u8, &self.0[5..7])?;
        check_range("Latitude", 90, deg, min, sec)?;

        Ok(to_decimal(hemisphere, deg, min, sec))
    }
}

pub type Longitude<'a> = Alphanumeric<'a, 8>;

impl<'a> Longitude<'a> {
    /// Returns the longitude as decimal in the range -180.0 (west) to 180.0 (east).
    ///
    /// # Errors
    ///
    /// Returns an error if the hemisphere is neither `E` nor `W` or if degrees,
    /// minutes or seconds are not a number within their range.
    pub fn as_decimal(&self) -> Result<f64, Error> {
        let hemisphere = match self.first() {
            b'E' => Hemisphere::East,
            b'W' => Hemisphere::West,
            byte => {
                return Err(Error::InvalidCharacter {
                    field: "Longitude",
                    byte,
                    expected: "E or W",
                })
            }
        };

        let deg = parse_numeric!(3, u16, &self.0[1..4])?;
        let min = parse_numeric!(2, u8, &self.0[4..6])?;
        let sec = parse_numeric!(2, u8, &self.0[6..8])?;
        check_range("Longitude", 180, deg, min, sec)?;

        Ok(to_decimal(hemisphere, deg, min, sec))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use crate::FixedField;

    use super::*;

    #[test]
    fn parses_latitude() {
        let lat = Latitude::from_bytes(b"N511759").expect("latitude should parse");
        assert_approx_eq!(lat.as_decimal().expect("latitude is valid"), 51.29972222222222);

        let lat = Latitude::from_bytes(b"S335646").expect("latitude should parse");
        assert_approx_eq!(lat.as_decimal().expect("latitude is valid"), -33.94611111111111);
    }

    #[test]
    fn parses_longitude() {
        let lon = Longitude::from_bytes(b"E1511038").expect("longitude should parse");
        assert_approx_eq!(lon.as_decimal().expect("longitude is valid"), 151.1772222222222);

        let lon = Longitude::from_bytes(b"W0065723").expect("longitude should parse");
        assert_approx_eq!(lon.as_decimal().expect("longitude is valid"), -6.956388888888889);
    }

    #[test]
    fn converts_poles_and_antimeridian() {
        assert_eq!(to_decimal(Hemisphere::South, 90, 0, 0), -90.0);
        assert_eq!(to_decimal(Hemisphere::East, 180, 0, 0), 180.0);
        assert_eq!(to_decimal(Hemisphere::North, 0, 30, 0), 0.5);
    }

    #[test]
    fn fails_on_wrong_hemisphere() {
        let lat = Latitude::from_bytes(b"E511759").expect("latitude should parse");
        assert_eq!(
            lat.as_decimal(),
            Err(Error::InvalidCharacter {
                field: "Latitude",
                byte: b'E',
                expected: "N or S",
            })
        );
    }

    #[test]
    #[should_panic(expected = "OutOfRange")]
    fn fail_on_minutes_out_of_range() {
        let lon = Longitude::from_bytes(b"E0066123").expect("longitude should parse");
        lon.as_decimal().unwrap();
    }

    #[test]
    fn fail_on_degrees_beyond_pole() {
        let lat = Latitude::from_bytes(b"N900100").expect("latitude should parse");
        assert!(lat.as_decimal().is_err());
    }
}
