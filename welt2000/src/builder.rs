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

use log::trace;

use crate::blocks::{FeatureBlock, Tail};
use crate::fields::{Designator, SiteType};
use crate::name::field_number;
use crate::tables;
use crate::{Classifier, Error, Frequency, Runway, Waypoint};

/// Drops an optional field which couldn't be decoded.
pub(crate) fn optional<T>(field: &'static str, value: Result<T, Error>) -> Option<T> {
    match value {
        Ok(v) => Some(v),
        Err(e) => {
            trace!("omitting {field}: {e}");
            None
        }
    }
}

/// Waypoint factory, which collects the fields of a record one at a time.
///
/// Each mandatory field is set from a `Result`. Failures leave the field empty
/// and are kept in [`errors`](WaypointBuilder::errors), so a partial waypoint
/// can still be built.
#[derive(Default)]
pub struct WaypointBuilder {
    name: String,
    shortname: String,
    icao: Option<String>,
    classifiers: BTreeSet<Classifier>,
    runways: Vec<Runway>,
    frequencies: Vec<Frequency>,
    altitude: Option<i16>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    country: Option<String>,
    site_type: Option<SiteType>,
    landable: bool,
    errors: Vec<Error>,
}

impl WaypointBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(mut self) -> Waypoint {
        let mut field_nr = None;

        if self.landable {
            self.classifiers.insert(Classifier::Landable);

            if self.icao.is_none() {
                field_nr = field_number(&self.name);
            }

            if field_nr.is_some() {
                self.classifiers.insert(Classifier::Catalogued);
            }
        } else {
            self.classifiers.extend(tables::keywords(&self.name));
            if let Some(site_type) = self.site_type {
                self.classifiers.extend(tables::site_type(site_type));
            }
        }

        Waypoint {
            name: self.name,
            shortname: self.shortname,
            icao: self.icao,
            field_number: field_nr,
            classifiers: self.classifiers,
            runways: self.runways,
            frequencies: self.frequencies,
            altitude: self.altitude,
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country,
        }
    }

    pub fn shortname(&mut self, shortname: String) -> &mut Self {
        self.shortname = shortname;
        self
    }

    pub fn name(&mut self, name: String) -> &mut Self {
        if name.is_empty() {
            self.add_error(Error::MissingField { field: "name" });
        }
        self.name = name;
        self
    }

    pub fn altitude(&mut self, altitude: Result<i16, Error>) -> &mut Self {
        self.altitude = self.required(altitude);
        self
    }

    pub fn latitude(&mut self, latitude: Result<f64, Error>) -> &mut Self {
        self.latitude = self.required(latitude);
        self
    }

    pub fn longitude(&mut self, longitude: Result<f64, Error>) -> &mut Self {
        self.longitude = self.required(longitude);
        self
    }

    pub fn country(&mut self, country: Result<&str, Error>) -> &mut Self {
        self.country = self.required(country).map(str::to_owned);
        self
    }

    pub fn site_type(&mut self, site_type: SiteType) -> &mut Self {
        self.site_type = Some(site_type);
        self
    }

    /// Sets altitude, position, country and site type from the tail.
    pub fn tail(&mut self, tail: &Tail<'_>) -> &mut Self {
        self.altitude(tail.altitude.as_meters())
            .latitude(tail.latitude.as_decimal())
            .longitude(tail.longitude.as_decimal())
            .country(tail.country.code())
            .site_type(tail.site_type)
    }

    /// Sets the designation, runways and frequency from a feature block.
    ///
    /// Sites with a feature block are landable.
    pub fn feature_block(&mut self, block: &FeatureBlock<'_>) -> &mut Self {
        self.landable = true;

        match block.designator() {
            Designator::Icao(icao) => {
                self.icao = Some(icao.to_owned());
                self.classifiers.insert(Classifier::Airfield);
            }
            Designator::Special(special) => {
                self.classifiers.extend(special.classifiers());
            }
            Designator::Unlisted => {}
        }

        self.runways = block.runways();
        self.frequencies = block.frequency().into_iter().collect();
        self
    }

    pub fn add_error<E>(&mut self, e: E)
    where
        E: Into<Error>,
    {
        self.errors.push(e.into());
    }

    /// The errors of mandatory fields.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    fn required<T>(&mut self, value: Result<T, Error>) -> Option<T> {
        match value {
            Ok(v) => Some(v),
            Err(e) => {
                self.add_error(e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_errors_of_mandatory_fields() {
        let mut builder = WaypointBuilder::new();
        builder
            .name("SOMEWHERE".into())
            .altitude(Err(Error::NotANumber {
                bytes: b"12X4".to_vec(),
            }))
            .latitude(Ok(51.0))
            .longitude(Ok(7.0))
            .country(Ok("DE"));

        assert_eq!(
            builder.errors(),
            &[Error::NotANumber {
                bytes: b"12X4".to_vec()
            }]
        );

        let wp = builder.build();
        assert_eq!(wp.altitude, None);
        assert_eq!(wp.latitude, Some(51.0));
        assert_eq!(wp.validate(), Err(Error::MissingField { field: "altitude" }));
    }

    #[test]
    fn classifies_by_keywords_without_block() {
        let mut builder = WaypointBuilder::new();
        builder.name("WEISWEILER KW".into()).site_type(SiteType {
            letter: b'P',
            digit: b'5',
        });

        let wp = builder.build();
        assert_eq!(wp.classifiers, BTreeSet::from([Classifier::PowerPlant]));
    }

    #[test]
    fn ignores_keywords_of_landable_sites() {
        let block = FeatureBlock::try_from(b"*FL08S 2513131    ".as_slice())
            .expect("feature block should parse");

        let mut builder = WaypointBuilder::new();
        builder
            .name("PONT 8".into())
            .site_type(SiteType {
                letter: b'J',
                digit: b'4',
            })
            .feature_block(&block);

        let wp = builder.build();
        assert_eq!(wp.field_number, Some(8));
        assert_eq!(
            wp.classifiers,
            BTreeSet::from([Classifier::Landable, Classifier::Catalogued])
        );
    }

    #[test]
    fn empty_name_is_an_error() {
        let mut builder = WaypointBuilder::new();
        builder.name(String::new());
        assert_eq!(builder.errors(), &[Error::MissingField { field: "name" }]);
    }
}
