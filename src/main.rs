// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use rivermill_forecast::{cli, commands, config::RunConfig, utils};

fn main() -> Result<()> {
    utils::init_tracing();

    let matches = cli::build_cli().get_matches();
    let scope = matches.subcommand().map(|(_, sub)| sub).unwrap_or(&matches);
    let ws = commands::Workspace::open(RunConfig::from_matches(scope)?)?;

    match matches.subcommand() {
        None | Some(("generate", _)) => commands::generate::handle(&ws)?,
        Some(("summary", sub)) => commands::summary::handle(&ws, sub)?,
        Some(("margin", sub)) => commands::margin::margin(&ws, sub)?,
        Some(("solve-fee", sub)) => commands::margin::solve(&ws, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
