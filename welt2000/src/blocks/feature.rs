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

use log::trace;

use crate::builder::optional;
use crate::fields::*;
use crate::{Block, FixedField, Frequency, Runway};

/// The width of a feature block including its marker.
pub const FEATURE_BLOCK_LENGTH: usize = 18;

/// The landing information embedded in the name of a site.
///
/// A marker opens the block, followed by a code, the surface letter, the
/// runway length in tens of meters, up to two runway headings in tens of
/// degrees and a radio frequency:
///
/// ```text
/// #GLD!G 80133113012
/// ^^   ^^  ^ ^ ^
/// ||   ||  | | frequency 130.125
/// ||   ||  | heading 310
/// ||   ||  heading 130
/// ||   |length 800 m
/// ||   surface grass
/// |code GLD with filler
/// marker
/// ```
#[derive(Block, Debug)]
#[welt2000(length = 18)]
pub struct FeatureBlock<'a> {
    pub marker: Marker,
    pub code: Code<'a>,
    pub surface: SurfaceCode,
    pub length: RunwayLength<'a>,
    pub heading_1: Heading<'a>,
    pub heading_2: Heading<'a>,
    pub frequency: FrequencyCode<'a>,
}

impl<'a> FeatureBlock<'a> {
    pub fn designator(&self) -> Designator<'a> {
        self.code.designator()
    }

    /// Returns up to two runways.
    ///
    /// Two headings which are neither equal nor opposite describe two
    /// independent strips. The second strip carries only its directions.
    pub fn runways(&self) -> Vec<Runway> {
        let surface = optional("Surface", self.surface.surface());
        let length = optional("Runway Length", self.length.meters());
        let first = optional("Runway Heading", self.heading_1.degrees());
        let second = optional("Runway Heading", self.heading_2.degrees());

        let (directions, crossing) = match (first, second) {
            (Some(a), Some(b)) if a == b => (vec![a], None),
            (Some(a), Some(b)) if a.abs_diff(b) == 180 => (vec![a, b], None),
            (Some(a), Some(b)) => (vec![a, reciprocal(a)], Some(vec![b, reciprocal(b)])),
            (Some(h), None) | (None, Some(h)) => (vec![h], None),
            (None, None) => (Vec::new(), None),
        };

        let mut runways = Vec::with_capacity(2);

        let runway = Runway {
            surface,
            length,
            directions,
        };

        if runway.surface.is_some() || runway.length.is_some() || !runway.directions.is_empty() {
            runways.push(runway);
        }

        if let Some(directions) = crossing {
            runways.push(Runway {
                surface: None,
                length: None,
                directions,
            });
        }

        runways
    }

    /// Returns the radio frequency if there is a valid one.
    pub fn frequency(&self) -> Option<Frequency> {
        optional("Frequency", self.frequency.frequency())
    }
}

/// Locates the feature block within the name region of a record.
///
/// In a well-formed record the block fills the last
/// [`FEATURE_BLOCK_LENGTH`] bytes of the region. Otherwise the right-most
/// marker which opens a plausible block is taken: its code must be an ICAO
/// or special code, or a known surface letter and runway length must follow.
/// Returns the position of the marker and the block padded with blanks.
pub fn locate(region: &[u8]) -> Option<(usize, [u8; FEATURE_BLOCK_LENGTH])> {
    let anchored = region
        .len()
        .checked_sub(FEATURE_BLOCK_LENGTH)
        .filter(|&pos| Marker::is_marker(region[pos]));

    if let Some(pos) = anchored {
        return Some((pos, padded(region, pos)));
    }

    let (pos, block) = (0..region.len())
        .rev()
        .filter(|&pos| Marker::is_marker(region[pos]))
        .filter(|&pos| pos + Marker::LENGTH + Code::LENGTH <= region.len())
        .map(|pos| (pos, padded(region, pos)))
        .find(|(_, block)| is_plausible(block))?;

    trace!("feature block off column at position {pos}");

    Some((pos, block))
}

/// Copies the block starting at `pos` and pads it with blanks.
fn padded(region: &[u8], pos: usize) -> [u8; FEATURE_BLOCK_LENGTH] {
    let end = region.len().min(pos + FEATURE_BLOCK_LENGTH);
    let mut block = [b' '; FEATURE_BLOCK_LENGTH];
    block[..end - pos].copy_from_slice(&region[pos..end]);
    block
}

fn is_plausible(bytes: &[u8; FEATURE_BLOCK_LENGTH]) -> bool {
    let Ok(block) = FeatureBlock::try_from(bytes.as_slice()) else {
        return false;
    };

    match block.designator() {
        Designator::Icao(_) | Designator::Special(_) => true,
        Designator::Unlisted => block.surface.surface().is_ok() && block.length.as_u16().is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(bytes: &[u8]) -> FeatureBlock<'_> {
        FeatureBlock::try_from(bytes).expect("feature block should parse")
    }

    #[test]
    fn glidersite_block() {
        let fb = block(b"#GLD!G 80133113012");

        assert_eq!(fb.marker, Marker::Hash);
        assert_eq!(fb.designator(), Designator::Special(Special::Glidersite));
        assert_eq!(
            fb.runways(),
            vec![Runway {
                surface: Some(Surface::Grass),
                length: Some(800),
                directions: vec![130, 310],
            }]
        );
        assert_eq!(fb.frequency().map(|f| f.to_string()), Some("130.125".into()));
    }

    #[test]
    fn crossing_runways() {
        let fb = block(b"#YSSYA395160712050");

        assert_eq!(fb.designator(), Designator::Icao("YSSY"));
        assert_eq!(
            fb.runways(),
            vec![
                Runway {
                    surface: Some(Surface::Asphalt),
                    length: Some(3950),
                    directions: vec![160, 340],
                },
                Runway {
                    surface: None,
                    length: None,
                    directions: vec![70, 250],
                },
            ]
        );
    }

    #[test]
    fn single_direction_without_frequency() {
        let fb = block(b"*FL08S 2513131    ");

        assert_eq!(fb.marker, Marker::Asterisk);
        assert_eq!(fb.designator(), Designator::Unlisted);
        assert_eq!(
            fb.runways(),
            vec![Runway {
                surface: Some(Surface::Sand),
                length: Some(250),
                directions: vec![130],
            }]
        );
        assert_eq!(fb.frequency(), None);
    }

    #[test]
    fn empty_block_has_no_runway() {
        let fb = block(b"*ULM              ");

        assert_eq!(fb.designator(), Designator::Special(Special::Ultralight));
        assert!(fb.runways().is_empty());
        assert_eq!(fb.frequency(), None);
    }

    #[test]
    fn locates_anchored_block() {
        let region = b"MEIERSBERG      #GLD!G 80133113012";
        let (pos, bytes) = locate(region).expect("block should be found");

        assert_eq!(pos, 16);
        assert_eq!(&bytes, b"#GLD!G 80133113012");
    }

    #[test]
    fn locates_block_off_column() {
        let region = b"SOMEWHERE #ULM!G 38";
        let (pos, bytes) = locate(region).expect("block should be found");

        assert_eq!(pos, 10);
        assert_eq!(&bytes, b"#ULM!G 38         ");
    }

    #[test]
    fn skips_stray_markers() {
        // the asterisk is part of the name, the hash opens the block
        let region = b"A*B FIELD #ULM!G 38153312097       ";
        let (pos, bytes) = locate(region).expect("block should be found");

        assert_eq!(pos, 10);
        assert_eq!(&bytes, b"#ULM!G 38153312097");
    }

    #[test]
    fn takes_rightmost_plausible_block() {
        let region = b"X #EDDK FIELD *GLD!G 80          ";
        let (pos, _) = locate(region).expect("block should be found");

        assert_eq!(pos, 14);
    }

    #[test]
    fn accepts_unlisted_code_with_runway() {
        let region = b"CHAMP 8 *FL08S 25";
        let (pos, bytes) = locate(region).expect("block should be found");

        assert_eq!(pos, 8);
        assert_eq!(&bytes, b"*FL08S 25         ");
    }

    #[test]
    fn ignores_implausible_markers() {
        assert_eq!(locate(b"SOME * NAME WITH MARKER           "), None);
        assert_eq!(locate(b"NAME * 12 ABC"), None);
    }

    #[test]
    fn ignores_regions_without_marker() {
        assert_eq!(locate(b"MANOSQUE PONT D907XDURANCE        "), None);
        // a trailing marker has no room for a code
        assert_eq!(locate(b"NAME *"), None);
    }

    #[test]
    fn length_matches_fields() {
        assert_eq!(<FeatureBlock as Block>::LENGTH, FEATURE_BLOCK_LENGTH);
    }
}
