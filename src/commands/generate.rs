// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Workspace;
use crate::matrix::AccountMatrix;
use crate::narrative::{self, Provenance};
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Paths written by a generate run.
#[derive(Debug, Clone)]
pub struct Generated {
    pub csv: PathBuf,
    pub summary: PathBuf,
}

pub fn run(ws: &Workspace) -> Result<Generated> {
    let forecast = ws.engine.run().context("Forecast failed")?;

    let out_dir = ws.config.output_dir();
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Create output dir {}", out_dir.display()))?;

    let csv_path = ws.config.forecast_csv_path();
    AccountMatrix::build(&forecast, &ws.actuals).write_csv(&csv_path)?;
    tracing::info!(path = %csv_path.display(), "wrote forecast matrix");

    let provenance = Provenance {
        actuals: ws.actuals.source,
        seasonal: ws.engine.seasonal().source(),
    };
    let report = narrative::render(&forecast, &ws.actuals, ws.engine.assumptions(), provenance)
        .context("Render summary report")?;
    let summary_path = ws.config.summary_path();
    fs::write(&summary_path, report)
        .with_context(|| format!("Write summary {}", summary_path.display()))?;
    tracing::info!(path = %summary_path.display(), "wrote summary report");

    Ok(Generated {
        csv: csv_path,
        summary: summary_path,
    })
}

pub fn handle(ws: &Workspace) -> Result<()> {
    let out = run(ws)?;
    println!("Generated {}", out.csv.display());
    println!("Generated {}", out.summary.display());
    Ok(())
}
