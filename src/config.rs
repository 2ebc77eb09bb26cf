// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::Assumptions;
use crate::utils::parse_decimal;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const ACTUALS_FILE: &str = "p-l-fy25-and-july-2025.csv";
pub const GROSS_SALES_FILE: &str = "12-month-gross-sales.csv";
pub const FORECAST_CSV: &str = "trade-forecast.csv";
pub const SUMMARY_MD: &str = "trade-forecast-summary.md";

pub const DEFAULT_INPUT_DIR: &str = "input";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Per-run settings resolved from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub assumptions: Assumptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            assumptions: Assumptions::default(),
        }
    }
}

impl RunConfig {
    pub fn from_matches(m: &clap::ArgMatches) -> Result<Self> {
        let mut cfg = Self::default();
        if let Some(dir) = m.get_one::<String>("input-dir") {
            cfg.input_dir = PathBuf::from(dir.trim());
        }
        if let Some(dir) = m.get_one::<String>("output-dir") {
            cfg.output_dir = PathBuf::from(dir.trim());
        }
        if let Some(fee) = m.get_one::<String>("admission-fee") {
            cfg.assumptions.admission_fee_from_december = parse_decimal(fee)?;
        }
        Ok(cfg)
    }

    pub fn actuals_path(&self) -> PathBuf {
        self.input_dir.join(ACTUALS_FILE)
    }

    pub fn gross_sales_path(&self) -> PathBuf {
        self.input_dir.join(GROSS_SALES_FILE)
    }

    pub fn forecast_csv_path(&self) -> PathBuf {
        self.output_dir.join(FORECAST_CSV)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.output_dir.join(SUMMARY_MD)
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}
