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

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::Surface;
use crate::Error;

/// A category tag of a waypoint.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Classifier {
    Airfield,
    Glidersite,
    /// An ultralight field.
    Ulm,
    /// The site has landing information.
    Landable,
    /// The site is numbered in a landing field catalogue.
    Catalogued,
    Bridge,
    PowerPlant,
    RailwayStation,
    ReportingPoint,
}

impl Classifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Airfield => "airfield",
            Self::Glidersite => "glidersite",
            Self::Ulm => "ulm",
            Self::Landable => "landable",
            Self::Catalogued => "catalogued",
            Self::Bridge => "bridge",
            Self::PowerPlant => "power-plant",
            Self::RailwayStation => "railway-station",
            Self::ReportingPoint => "reporting-point",
        }
    }
}

impl fmt::Display for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A runway strip of a landable site.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Runway {
    pub surface: Option<Surface>,
    /// Length in meters.
    pub length: Option<u16>,
    /// The headings of the runway ends in whole degrees.
    pub directions: Vec<u16>,
}

/// A radio frequency formatted as `nnn.nnn` MHz.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Frequency(String);

impl Frequency {
    pub(crate) fn new(frequency: String) -> Self {
        Self(frequency)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A decoded WELT2000 record.
///
/// Altitude, position and country are `None` if their part of the record
/// couldn't be decoded. Use [`validate`](Waypoint::validate) to reject such
/// partial waypoints.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    /// The name with single spaces.
    pub name: String,
    /// The six character short identifier.
    pub shortname: String,
    pub icao: Option<String>,
    /// The number of a catalogued landing field.
    pub field_number: Option<u8>,
    pub classifiers: BTreeSet<Classifier>,
    pub runways: Vec<Runway>,
    pub frequencies: Vec<Frequency>,
    /// Altitude in meters.
    pub altitude: Option<i16>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub country: Option<String>,
}

impl Waypoint {
    /// Returns `true` if the waypoint has the classifier.
    pub fn is(&self, classifier: Classifier) -> bool {
        self.classifiers.contains(&classifier)
    }

    /// Checks that all mandatory fields are present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] naming the first missing field.
    pub fn validate(&self) -> Result<(), Error> {
        let missing = |field| Err(Error::MissingField { field });

        if self.name.is_empty() {
            return missing("name");
        }

        if self.altitude.is_none() {
            return missing("altitude");
        }

        if self.latitude.is_none() {
            return missing("latitude");
        }

        if self.longitude.is_none() {
            return missing("longitude");
        }

        if self.country.is_none() {
            return missing("country");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waypoint() -> Waypoint {
        Waypoint {
            name: "ULM H BF".into(),
            shortname: "ULMHBF".into(),
            icao: None,
            field_number: None,
            classifiers: BTreeSet::from([Classifier::RailwayStation]),
            runways: Vec::new(),
            frequencies: Vec::new(),
            altitude: Some(480),
            latitude: Some(48.39944444444444),
            longitude: Some(9.983055555555556),
            country: Some("DE".into()),
        }
    }

    #[test]
    fn validates_complete_waypoint() {
        let wp = waypoint();
        assert_eq!(wp.validate(), Ok(()));
        assert!(wp.is(Classifier::RailwayStation));
        assert!(!wp.is(Classifier::Landable));
    }

    #[test]
    fn reports_missing_field() {
        let wp = Waypoint {
            longitude: None,
            ..waypoint()
        };
        assert_eq!(
            wp.validate(),
            Err(Error::MissingField { field: "longitude" })
        );
    }

    #[test]
    fn displays_classifier_tags() {
        assert_eq!(Classifier::PowerPlant.to_string(), "power-plant");
        assert_eq!(Classifier::Ulm.as_str(), "ulm");
    }
}
