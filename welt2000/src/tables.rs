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

//! Lookup tables classifying sites without a feature block.

use crate::fields::SiteType;
use crate::Classifier;

/// Name tokens and the classifier they imply.
const KEYWORDS: &[(&str, Classifier)] = &[
    ("BR", Classifier::Bridge),
    ("BRIDGE", Classifier::Bridge),
    ("BRUECKE", Classifier::Bridge),
    ("PONT", Classifier::Bridge),
    ("PONTE", Classifier::Bridge),
    ("PUENTE", Classifier::Bridge),
    ("AKW", Classifier::PowerPlant),
    ("HKW", Classifier::PowerPlant),
    ("KKW", Classifier::PowerPlant),
    ("KRAFTWERK", Classifier::PowerPlant),
    ("KW", Classifier::PowerPlant),
    ("BAHNHOF", Classifier::RailwayStation),
    ("BF", Classifier::RailwayStation),
    ("BHF", Classifier::RailwayStation),
    ("GARE", Classifier::RailwayStation),
    ("HBF", Classifier::RailwayStation),
    ("MELDEPUNKT", Classifier::ReportingPoint),
    ("PFLICHTMELDEPUNKT", Classifier::ReportingPoint),
    ("PMP", Classifier::ReportingPoint),
];

/// Looks up the classifier of a single name token.
pub fn keyword(token: &str) -> Option<Classifier> {
    KEYWORDS
        .iter()
        .find(|(kw, _)| *kw == token)
        .map(|&(_, classifier)| classifier)
}

/// Splits a name into its alphanumeric tokens.
pub fn tokens(name: &str) -> impl Iterator<Item = &str> {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
}

/// Returns the classifiers implied by the tokens of a name.
pub fn keywords(name: &str) -> impl Iterator<Item = Classifier> + '_ {
    tokens(name).filter_map(keyword)
}

/// Returns the classifiers implied by the site type closing a record.
pub fn site_type(site_type: SiteType) -> impl Iterator<Item = Classifier> {
    let letter = match site_type.letter {
        b'J' => Some(Classifier::RailwayStation),
        _ => None,
    };

    let digit = match site_type.digit {
        b'4' => Some(Classifier::ReportingPoint),
        b'5' => Some(Classifier::PowerPlant),
        _ => None,
    };

    letter.into_iter().chain(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_name_tokens() {
        let found: Vec<_> = keywords("WEISWEILER KW 1011FT WESTL KUEHLT").collect();
        assert_eq!(found, vec![Classifier::PowerPlant]);

        let found: Vec<_> = keywords("MANOSQUE PONT D907XDURANCE").collect();
        assert_eq!(found, vec![Classifier::Bridge]);

        let found: Vec<_> = keywords("ULM H BF").collect();
        assert_eq!(found, vec![Classifier::RailwayStation]);
    }

    #[test]
    fn matches_whole_tokens_only() {
        assert_eq!(keywords("KWIK BFORD").count(), 0);
        assert_eq!(keyword("kw"), None);
    }

    #[test]
    fn splits_on_punctuation() {
        let found: Vec<_> = tokens("EDDL-N/PMP.").collect();
        assert_eq!(found, vec!["EDDL", "N", "PMP"]);
    }

    #[test]
    fn classifies_site_types() {
        let st = |letter, digit| site_type(SiteType { letter, digit }).collect::<Vec<_>>();

        assert_eq!(st(b'J', b'0'), vec![Classifier::RailwayStation]);
        assert_eq!(st(b'Q', b'4'), vec![Classifier::ReportingPoint]);
        assert_eq!(st(b'P', b'5'), vec![Classifier::PowerPlant]);
        assert!(st(b'Q', b'0').is_empty());
    }
}
