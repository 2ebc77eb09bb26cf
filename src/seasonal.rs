// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Seasonal revenue multipliers derived from twelve months of gross sales.

use crate::models::InputSource;
use crate::utils::parse_cell;
use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// July 2025 trading income; the anchor the gross figures are measured against.
const JULY_2025_TRADE: Decimal = dec!(201972.61);
/// Year-on-year growth from July 2024 to July 2025.
const YOY_GROWTH: Decimal = dec!(1.267);
/// Ratio of gross sales to trading income.
const GROSS_TO_TRADE: Decimal = dec!(1.0445);

const JULY: u32 = 7;
const FEBRUARY: u32 = 2;
const MARCH: u32 = 3;
const APRIL: u32 = 4;
/// 2025 months that replace the 2024 reading once deflated by a year of growth.
const OVERRIDE_2025: [u32; 6] = [1, 2, 4, 5, 6, 7];

static MONTH_KEY: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^(\d{4})-(\d{2})$").ok());

#[derive(Debug, Clone, Serialize)]
pub struct SeasonalFactors {
    factors: BTreeMap<u32, Decimal>,
    source: InputSource,
}

impl SeasonalFactors {
    /// Hardcoded factors used when no gross-sales history is available.
    pub fn embedded() -> Self {
        let feb = dec!(0.708);
        let apr = dec!(0.732);
        let factors = BTreeMap::from([
            (1, dec!(0.830)),
            (2, feb),
            (3, (feb + apr) / dec!(2)),
            (4, apr),
            (5, dec!(1.003)),
            (6, dec!(1.014)),
            (7, Decimal::ONE),
            (8, dec!(0.825)),
            (9, dec!(0.875)),
            (10, dec!(0.577)),
            (11, dec!(0.545)),
            (12, dec!(0.544)),
        ]);
        Self {
            factors,
            source: InputSource::Embedded,
        }
    }

    pub fn from_factors(factors: BTreeMap<u32, Decimal>) -> Self {
        Self {
            factors,
            source: InputSource::File,
        }
    }

    /// Reads `YYYY-MM,gross` rows; falls back to the embedded table when the
    /// file is missing or carries no usable rows.
    pub fn load(path: &Path) -> Self {
        let mut rdr = match ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)
        {
            Ok(r) => r,
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "gross sales history unavailable, using embedded seasonal factors");
                return Self::embedded();
            }
        };

        let mut gross: Vec<(i32, u32, Decimal)> = Vec::new();
        for (line, result) in rdr.records().enumerate() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    tracing::debug!(line = line + 1, error = %e, "skipping unreadable gross sales row");
                    continue;
                }
            };
            let key = rec.get(0).unwrap_or("");
            let value = rec.get(1).unwrap_or("");
            if key.is_empty() || value.is_empty() {
                continue;
            }
            let Some(amount) = parse_cell(value) else {
                tracing::debug!(line = line + 1, value, "skipping non-numeric gross sales row");
                continue;
            };
            let Some(caps) = (*MONTH_KEY).as_ref().and_then(|re| re.captures(key)) else {
                continue;
            };
            let (Ok(year), Ok(month)) = (caps[1].parse::<i32>(), caps[2].parse::<u32>()) else {
                continue;
            };
            if (1..=12).contains(&month) {
                gross.push((year, month, amount));
            }
        }

        match Self::derive(&gross) {
            Some(factors) => Self::from_factors(factors),
            None => {
                tracing::info!(path = %path.display(), "no usable gross sales rows, using embedded seasonal factors");
                Self::embedded()
            }
        }
    }

    /// Turns monthly gross sales into factors relative to an estimated July 2024.
    fn derive(gross: &[(i32, u32, Decimal)]) -> Option<BTreeMap<u32, Decimal>> {
        let july_2024_gross = JULY_2025_TRADE / YOY_GROWTH * GROSS_TO_TRADE;
        let mut factors = BTreeMap::new();

        for (year, month, amount) in gross {
            if *year == 2024 {
                factors.insert(*month, *amount / july_2024_gross);
            }
        }
        for (year, month, amount) in gross {
            if *year == 2025 && OVERRIDE_2025.contains(month) {
                factors.insert(*month, *amount / YOY_GROWTH / july_2024_gross);
            }
        }
        if factors.is_empty() {
            return None;
        }

        if let (Some(feb), Some(apr)) = (factors.get(&FEBRUARY), factors.get(&APRIL)) {
            let march = (*feb + *apr) / dec!(2);
            factors.insert(MARCH, march);
        }
        factors.insert(JULY, Decimal::ONE);
        Some(factors)
    }

    /// Factor for a calendar month (1-12); 1.0 when the month is unknown.
    pub fn factor(&self, month: u32) -> Decimal {
        self.factors.get(&month).copied().unwrap_or(Decimal::ONE)
    }

    pub fn source(&self) -> InputSource {
        self.source
    }
}
