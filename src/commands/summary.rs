// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::Workspace;
use crate::models::FiscalYear;
use crate::utils::{maybe_print_json, money_str, percent_str, pretty_table};
use anyhow::Result;

pub fn handle(ws: &Workspace, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let forecast = ws.engine.run()?;

    if m.get_flag("monthly") {
        let months: Vec<_> = forecast.buckets().collect();
        if maybe_print_json(json_flag, jsonl_flag, &months)? {
            return Ok(());
        }
        let data = months
            .iter()
            .map(|r| {
                vec![
                    r.label.clone(),
                    money_str(r.total_trading_income),
                    money_str(r.gross_profit),
                    money_str(r.total_operating_expenses),
                    money_str(r.net_profit),
                    percent_str(r.net_profit_margin),
                    percent_str(r.revenue_growth),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Month", "Revenue", "Gross Profit", "OpEx", "Net Profit", "Margin", "Growth"],
                data
            )
        );
        return Ok(());
    }

    let summaries: Vec<_> = FiscalYear::ALL.iter().map(|fy| forecast.summary(*fy)).collect();
    if maybe_print_json(json_flag, jsonl_flag, &summaries)? {
        return Ok(());
    }
    let data = summaries
        .iter()
        .map(|s| {
            vec![
                s.year.label().to_string(),
                money_str(s.revenue),
                money_str(s.cost_of_sales),
                money_str(s.gross_profit),
                money_str(s.operating_expenses),
                money_str(s.net_profit),
                percent_str(s.net_margin),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Year", "Revenue", "COGS", "Gross Profit", "OpEx", "Net Profit", "Margin"],
            data
        )
    );
    Ok(())
}
