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

//! The fields of a WELT2000 record.

mod altitude;
mod code;
mod coordinate;
mod country;
mod frequency;
mod runway;
mod site_type;

pub use altitude::Altitude;
pub use code::{Code, Designator, Marker, Special};
pub use coordinate::{to_decimal, Hemisphere, Latitude, Longitude};
pub use country::Country;
pub use frequency::FrequencyCode;
pub use runway::{reciprocal, Heading, RunwayLength, Surface, SurfaceCode};
pub use site_type::SiteType;
