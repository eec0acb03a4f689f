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

use crate::{Error, Frequency, Numeric};

/// Radio frequency as `MMMkk`, megahertz followed by the first two digits of
/// the kilohertz.
pub type FrequencyCode<'a> = Numeric<'a, 5>;

impl<'a> FrequencyCode<'a> {
    /// Returns the airband frequency.
    ///
    /// The third kilohertz digit is implied by the 25 kHz raster: `5` if the
    /// second digit is a 2 or 7, `0` otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the field is not a number or outside of the airband
    /// from 118 to 137.975 MHz.
    pub fn frequency(&self) -> Result<Frequency, Error> {
        let code = self.as_u32()?;
        let mhz = code / 100;
        let khz = code % 100;

        if !(118..=137).contains(&mhz) {
            return Err(Error::OutOfRange {
                field: "Frequency",
                value: mhz as i32,
                expected: "between 118 and 137 MHz",
            });
        }

        let last = match khz % 10 {
            2 | 7 => 5,
            _ => 0,
        };

        Ok(Frequency::new(format!("{mhz:03}.{khz:02}{last}")))
    }
}
