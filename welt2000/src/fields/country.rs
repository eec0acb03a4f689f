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

/// The two letter country code as written in the record.
pub type Country<'a> = Alphanumeric<'a, 2>;

impl<'a> Country<'a> {
    /// Returns the country code.
    ///
    /// # Errors
    ///
    /// Returns an error if the code is not made of two ASCII letters.
    pub fn code(&self) -> Result<&'a str, Error> {
        if self.0.iter().all(u8::is_ascii_alphabetic) {
            Ok(self.as_str())
        } else {
            Err(Error::InvalidVariant {
                field: "Country",
                bytes: self.0.to_vec(),
                expected: "two letters",
            })
        }
    }
}
