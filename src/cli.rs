// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("rivermill-forecast")
        .version(clap::crate_version!())
        .about("24-month trade forecast for Historic Rivermill")
        .arg(
            Arg::new("input-dir")
                .long("input-dir")
                .global(true)
                .value_name("DIR")
                .help("Directory holding the optional P&L and gross sales CSVs (default: input)"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .global(true)
                .value_name("DIR")
                .help("Directory for the generated files (default: output)"),
        )
        .arg(
            Arg::new("admission-fee")
                .long("admission-fee")
                .global(true)
                .value_name("FEE")
                .help("Admission fee charged from December 2025 (default: 4.70)"),
        )
        .subcommand(
            Command::new("generate").about("Write trade-forecast.csv and trade-forecast-summary.md"),
        )
        .subcommand(json_flags(
            Command::new("summary")
                .about("Print fiscal-year totals")
                .arg(
                    Arg::new("monthly")
                        .long("monthly")
                        .action(ArgAction::SetTrue)
                        .help("Show every month instead of fiscal-year totals"),
                ),
        ))
        .subcommand(json_flags(
            Command::new("margin").about("Print the FY25/26 net margin at the configured admission fee"),
        ))
        .subcommand(json_flags(
            Command::new("solve-fee")
                .about("Find the admission fee that reaches a target FY25/26 net margin")
                .arg(
                    Arg::new("target")
                        .long("target")
                        .value_name("PCT")
                        .default_value("5.0")
                        .help("Target net margin in percent"),
                )
                .arg(
                    Arg::new("tolerance")
                        .long("tolerance")
                        .value_name("PP")
                        .default_value("0.1")
                        .help("Acceptable distance from the target in percentage points"),
                ),
        ))
}
