// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Historical FY25 and July 2025 actuals keyed by account display name.

use crate::accounts;
use crate::baseline::Baseline;
use crate::models::InputSource;
use crate::utils::parse_cell;
use csv::{ReaderBuilder, Trim};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Actuals {
    pub fy25: BTreeMap<String, Decimal>,
    pub jul25: BTreeMap<String, Decimal>,
    pub source: InputSource,
}

impl Actuals {
    /// Defaults derived from the baseline month: July as booked, FY25 as twelve Julys.
    pub fn embedded(baseline: &Baseline) -> Self {
        let mut fy25 = BTreeMap::new();
        let mut jul25 = BTreeMap::new();
        for l in baseline.lines() {
            let Some(name) = accounts::display_name(l.section, l.key) else {
                continue;
            };
            jul25.insert(name.to_string(), l.amount);
            fy25.insert(name.to_string(), l.amount * dec!(12));
        }
        Self {
            fy25,
            jul25,
            source: InputSource::Embedded,
        }
    }

    /// Reads `account,FY25,Jul-25` rows. Rows with an unparsable amount are
    /// skipped; a missing or empty file yields the embedded defaults.
    pub fn load(path: &Path, baseline: &Baseline) -> Self {
        let mut rdr = match ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(Trim::All)
            .from_path(path)
        {
            Ok(r) => r,
            Err(e) => {
                tracing::info!(path = %path.display(), error = %e, "P&L actuals unavailable, using embedded defaults");
                return Self::embedded(baseline);
            }
        };

        let mut fy25 = BTreeMap::new();
        let mut jul25 = BTreeMap::new();
        for (line, result) in rdr.records().enumerate() {
            let rec = match result {
                Ok(rec) => rec,
                Err(e) => {
                    tracing::debug!(line = line + 1, error = %e, "skipping unreadable actuals row");
                    continue;
                }
            };
            if rec.len() < 3 {
                continue;
            }
            let account = rec.get(0).unwrap_or("");
            if account.is_empty() {
                continue;
            }
            let (Some(fy), Some(jul)) = (amount_or_zero(&rec[1]), amount_or_zero(&rec[2])) else {
                tracing::debug!(line = line + 1, account, "skipping actuals row with non-numeric amount");
                continue;
            };
            fy25.insert(account.to_string(), fy);
            jul25.insert(account.to_string(), jul);
        }

        if fy25.is_empty() {
            tracing::info!(path = %path.display(), "no usable actuals rows, using embedded defaults");
            return Self::embedded(baseline);
        }
        Self {
            fy25,
            jul25,
            source: InputSource::File,
        }
    }

    pub fn fy25(&self, account: &str) -> Decimal {
        self.fy25.get(account).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn jul25(&self, account: &str) -> Decimal {
        self.jul25.get(account).copied().unwrap_or(Decimal::ZERO)
    }
}

fn amount_or_zero(cell: &str) -> Option<Decimal> {
    if cell.is_empty() {
        Some(Decimal::ZERO)
    } else {
        parse_cell(cell)
    }
}
