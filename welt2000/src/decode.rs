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

use log::{debug, trace};

use crate::blocks::{FeatureBlock, Tail, TAIL_LENGTH};
use crate::name::NameRegion;
use crate::{Error, Waypoint, WaypointBuilder};

/// The width of the short identifier leading every record in characters.
pub const SHORTNAME_LENGTH: usize = 6;

/// Decodes one line of a WELT2000 file.
///
/// Returns `None` for comments (lines starting with `$`) and blank lines.
/// Every other line gives a waypoint even if parts of it are malformed:
/// optional fields which can't be decoded are omitted and mandatory ones are
/// left empty. Use [`try_decode`] or [`Waypoint::validate`] to reject those.
///
/// # Examples
///
/// ```
/// use welt2000::{decode, Classifier};
///
/// let line = "MEIER1 MEIERSBERG      #GLD!G 80133113012 164N511759E0065723DEP0";
/// let wp = decode(line).expect("line is a waypoint");
///
/// assert_eq!(wp.name, "MEIERSBERG");
/// assert_eq!(wp.altitude, Some(164));
/// assert!(wp.is(Classifier::Glidersite));
/// assert_eq!(wp.frequencies[0].as_str(), "130.125");
/// ```
pub fn decode(line: &str) -> Option<Waypoint> {
    let builder = parse(line)?;

    for e in builder.errors() {
        debug!("decoding {:?}: {e}", line.trim_end());
    }

    Some(builder.build())
}

/// Decodes one line of a WELT2000 file, failing on malformed mandatory fields.
///
/// Returns `Ok(None)` for comments and blank lines.
///
/// # Errors
///
/// Returns the first error of the name, altitude, position or country.
pub fn try_decode(line: &str) -> Result<Option<Waypoint>, Error> {
    let Some(builder) = parse(line) else {
        return Ok(None);
    };

    match builder.errors().first() {
        Some(e) => Err(e.clone()),
        None => Ok(Some(builder.build())),
    }
}

fn parse(line: &str) -> Option<WaypointBuilder> {
    let line = line.trim_end();

    if line.trim_start().is_empty() || line.trim_start().starts_with('$') {
        trace!("skipping {line:?}");
        return None;
    }

    let mut builder = WaypointBuilder::new();
    builder.shortname(shortname(line));

    // the name starts after the identifier and a blank, which may hold
    // multi-byte characters
    let name_offset = line
        .char_indices()
        .nth(SHORTNAME_LENGTH + 1)
        .map_or(line.len(), |(i, _)| i);

    let bytes = line.as_bytes();

    // the tail is anchored to the end, everything in between is the name
    let (region, tail) = match bytes.len().checked_sub(TAIL_LENGTH) {
        Some(start) if start >= name_offset => {
            (&bytes[name_offset..start], Tail::try_from(&bytes[start..]))
        }
        _ => {
            // too short for a tail, so the error reports the missing bytes
            let region = &bytes[name_offset..];
            (region, Tail::try_from(region))
        }
    };

    match tail {
        Ok(tail) => {
            builder.tail(&tail);
        }
        Err(e) => builder.add_error(e),
    }

    let region = NameRegion::new(region);
    builder.name(region.name);

    if let Some(bytes) = region.block {
        match FeatureBlock::try_from(bytes.as_slice()) {
            Ok(block) => {
                builder.feature_block(&block);
            }
            Err(e) => trace!("omitting feature block: {e}"),
        }
    }

    Some(builder)
}

/// Returns the short identifier padded to its full width.
fn shortname(line: &str) -> String {
    let ident = line.chars().take(SHORTNAME_LENGTH).collect::<String>();
    format!("{ident:<width$}", width = SHORTNAME_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_comments_and_blank_lines() {
        assert_eq!(decode("$ this is a comment"), None);
        assert_eq!(decode(""), None);
        assert_eq!(decode("   \r\n"), None);
        assert_eq!(try_decode("$"), Ok(None));
    }

    #[test]
    fn pads_short_identifier() {
        assert_eq!(shortname("ABC"), "ABC   ");
        assert_eq!(shortname("MEIER1 MEIERSBERG"), "MEIER1");
    }

    #[test]
    fn counts_identifier_in_characters() {
        let line = "MÜNCH1 MUENCHEN RIEM                      520N480800E0114200DEP0";
        let wp = decode(line).expect("line is a waypoint");

        assert_eq!(wp.shortname, "MÜNCH1");
        assert_eq!(wp.shortname.chars().count(), SHORTNAME_LENGTH);
        assert_eq!(wp.name, "MUENCHEN RIEM");
        assert_eq!(wp.altitude, Some(520));
        assert_eq!(shortname("MÜ"), "MÜ    ");
    }

    #[test]
    fn tolerates_line_terminators() {
        let line = "ULMHBF ULM H BF                           480N482358E0095859DEJ0\r\n";
        let wp = decode(line).expect("line is a waypoint");

        assert_eq!(wp.country.as_deref(), Some("DE"));
        assert_eq!(wp.altitude, Some(480));
    }

    #[test]
    fn decodes_short_line_partially() {
        let wp = decode("SHORT1 SHORT LINE").expect("line is a waypoint");

        assert_eq!(wp.shortname, "SHORT1");
        assert_eq!(wp.name, "SHORT LINE");
        assert_eq!(wp.altitude, None);
        assert_eq!(wp.latitude, None);
        assert!(wp.validate().is_err());
    }

    #[test]
    fn strict_decoding_fails_on_bad_altitude() {
        let line = "MEIER1 MEIERSBERG      #GLD!G 80133113012 1X4N511759E0065723DEP0";

        assert!(matches!(
            try_decode(line),
            Err(Error::NotANumber { .. })
        ));
        assert_eq!(decode(line).and_then(|wp| wp.altitude), None);
    }
}
