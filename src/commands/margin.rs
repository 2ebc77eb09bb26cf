// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Workspace;
use crate::engine::{fy2526_margin, solve_admission_fee};
use crate::utils::{maybe_print_json, parse_decimal, percent_str};
use anyhow::Result;
use serde_json::json;

pub fn margin(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    let fee = ws.engine.assumptions().admission_fee_from_december;
    let margin = fy2526_margin(&ws.engine, fee)?;
    let v = json!({ "admission_fee": fee, "fy2526_net_margin": margin });
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &v)? {
        println!(
            "FY25/26 margin with ${:.2} admission fee: {}",
            fee,
            percent_str(margin)
        );
    }
    Ok(())
}

pub fn solve(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    let target = parse_decimal(m.get_one::<String>("target").map(String::as_str).unwrap_or("5.0"))?;
    let tolerance =
        parse_decimal(m.get_one::<String>("tolerance").map(String::as_str).unwrap_or("0.1"))?;
    let solution = solve_admission_fee(&ws.engine, target, tolerance)?;
    if !maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &solution)? {
        println!(
            "Admission fee ${:.2} gives FY25/26 margin {} (target {}, {} probes)",
            solution.fee.round_dp(2),
            percent_str(solution.margin),
            percent_str(target),
            solution.iterations
        );
    }
    Ok(())
}
