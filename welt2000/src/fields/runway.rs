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

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, FixedField, Numeric};

/// The surface of a runway.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Surface {
    Asphalt,
    Concrete,
    Grass,
    Sand,
    Loam,
    Clay,
    Gravel,
    Dirt,
}

impl Surface {
    /// Looks up the surface letter of a feature block.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'A' => Some(Self::Asphalt),
            b'C' => Some(Self::Concrete),
            b'G' => Some(Self::Grass),
            b'S' => Some(Self::Sand),
            b'L' => Some(Self::Loam),
            b'Y' => Some(Self::Clay),
            b'V' => Some(Self::Gravel),
            b'D' => Some(Self::Dirt),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asphalt => "asphalt",
            Self::Concrete => "concrete",
            Self::Grass => "grass",
            Self::Sand => "sand",
            Self::Loam => "loam",
            Self::Clay => "clay",
            Self::Gravel => "gravel",
            Self::Dirt => "dirt",
        }
    }
}

impl fmt::Display for Surface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The surface letter of a feature block.
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SurfaceCode(u8);

impl SurfaceCode {
    /// Returns the surface the letter stands for.
    ///
    /// # Errors
    ///
    /// Returns an error if the letter is unknown.
    pub fn surface(&self) -> Result<Surface, Error> {
        Surface::from_code(self.0).ok_or_else(|| Error::InvalidVariant {
            field: "Surface",
            bytes: vec![self.0],
            expected: "one of A, C, G, S, L, Y, V or D",
        })
    }
}

impl FixedField<'_> for SurfaceCode {
    const LENGTH: usize = 1;

    fn from_bytes(bytes: &'_ [u8]) -> Result<Self, Error> {
        bytes
            .first()
            .map(|&b| Self(b))
            .ok_or(Error::InvalidFieldLength {
                expected: 1,
                actual: 0,
            })
    }
}

/// Runway length in tens of meters.
pub type RunwayLength<'a> = Numeric<'a, 3>;

impl<'a> RunwayLength<'a> {
    /// Returns the length in meters.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number or the length is zero.
    pub fn meters(&self) -> Result<u16, Error> {
        match self.as_u16()? * 10 {
            0 => Err(Error::OutOfRange {
                field: "Runway Length",
                value: 0,
                expected: "between 1 and 9999 meters",
            }),
            meters => Ok(meters),
        }
    }
}

/// Runway heading in tens of degrees.
pub type Heading<'a> = Numeric<'a, 2>;

impl<'a> Heading<'a> {
    /// Returns the heading in whole degrees from 10 to 360.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number or not a heading. `00`
    /// marks an unknown heading.
    pub fn degrees(&self) -> Result<u16, Error> {
        let tens = self.as_u16()?;

        if (1..=36).contains(&tens) {
            Ok(tens * 10)
        } else {
            Err(Error::OutOfRange {
                field: "Runway Heading",
                value: tens.into(),
                expected: "between 01 and 36",
            })
        }
    }
}

/// Returns the heading of the opposite runway end.
pub fn reciprocal(degrees: u16) -> u16 {
    if degrees <= 180 {
        degrees + 180
    } else {
        degrees - 180
    }
}
