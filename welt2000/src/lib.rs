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

//! WELT2000 waypoint decoder.
//!
//! WELT2000 is a database of glider waypoints where each site is one line of
//! fixed columns. Besides the name and position, a landable site has a
//! feature block embedded in its name with an ICAO or special code, the runway
//! surface, length and headings and a radio frequency. This crate decodes
//! such a line into a [`Waypoint`].
//!
//! # Examples
//!
//! Lets decode Sydney with its two crossing runways:
//!
//! ```
//! use welt2000::{Classifier, Surface};
//!
//! let line = "SYDNE1 SYDNEY NSW KINSS#YSSYA395160712050   6S335646E1511038AUQ0";
//! let wp = welt2000::decode(line).expect("line is a waypoint");
//!
//! assert_eq!(wp.icao.as_deref(), Some("YSSY"));
//! assert!(wp.is(Classifier::Airfield));
//! assert_eq!(wp.runways[0].surface, Some(Surface::Asphalt));
//! assert_eq!(wp.runways[0].directions, vec![160, 340]);
//! assert_eq!(wp.runways[1].directions, vec![70, 250]);
//! ```
//!
//! Reading the file and handling its encoding is up to the caller. Each line
//! is decoded on its own, comments and blank lines are skipped:
//!
//! ```
//! # fn main() -> Result<(), welt2000::Error> {
//! let data = "$ WELT2000 sample\n\
//!             ULMHBF ULM H BF                           480N482358E0095859DEJ0\n";
//!
//! for line in data.lines() {
//!     if let Some(wp) = welt2000::try_decode(line)? {
//!         println!("{} ({})", wp.name, wp.shortname); // => "ULM H BF (ULMHBF)"
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[macro_use]
mod macros;

mod block;
mod builder;
mod decode;
mod error;
mod field;
mod name;
mod waypoint;

// Re-export the derive macro for convenience
pub(crate) use welt2000_derive::Block;

pub mod blocks;
pub mod fields;
pub mod tables;

pub use block::{Block, Fields};
pub use builder::WaypointBuilder;
pub use decode::{decode, try_decode, SHORTNAME_LENGTH};
pub use error::Error;
pub use field::{Alphanumeric, FixedField, Numeric};
pub use fields::Surface;
pub use name::{clean_name, field_number, NameRegion};
pub use waypoint::{Classifier, Frequency, Runway, Waypoint};
