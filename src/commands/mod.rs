// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod generate;
pub mod margin;
pub mod summary;

use crate::actuals::Actuals;
use crate::config::RunConfig;
use crate::engine::ForecastEngine;
use crate::seasonal::SeasonalFactors;
use anyhow::{Context, Result};

/// Inputs shared by every command: the configured engine and the actuals.
pub struct Workspace {
    pub config: RunConfig,
    pub engine: ForecastEngine,
    pub actuals: Actuals,
}

impl Workspace {
    /// Loads optional inputs and validates the expense configuration.
    pub fn open(config: RunConfig) -> Result<Self> {
        let seasonal = SeasonalFactors::load(&config.gross_sales_path());
        let engine = ForecastEngine::standard(seasonal, config.assumptions.clone())
            .context("Inconsistent forecast configuration")?;
        let actuals = Actuals::load(&config.actuals_path(), engine.baseline());
        Ok(Self {
            config,
            engine,
            actuals,
        })
    }
}
