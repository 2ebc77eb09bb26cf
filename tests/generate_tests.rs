// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rivermill_forecast::cli;
use rivermill_forecast::commands::{generate, Workspace};
use rivermill_forecast::config::RunConfig;
use rivermill_forecast::models::InputSource;
use rivermill_forecast::utils::{fmt_dollars, money_str, percent_str, round_money};
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn workspace(input: &Path, output: &Path) -> Workspace {
    let matches = cli::build_cli().get_matches_from([
        "rivermill-forecast",
        "generate",
        "--input-dir",
        input.to_str().unwrap(),
        "--output-dir",
        output.to_str().unwrap(),
    ]);
    let (_, sub) = matches.subcommand().unwrap();
    Workspace::open(RunConfig::from_matches(sub).unwrap()).unwrap()
}

#[test]
fn global_args_reach_the_subcommand() {
    let matches = cli::build_cli().get_matches_from([
        "rivermill-forecast",
        "--admission-fee",
        "9.5",
        "--output-dir",
        "out",
        "margin",
        "--json",
    ]);
    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "margin");
    let cfg = RunConfig::from_matches(sub).unwrap();
    assert_eq!(cfg.assumptions.admission_fee_from_december, dec!(9.5));
    assert_eq!(cfg.output_dir, Path::new("out"));
    assert_eq!(cfg.input_dir, Path::new("input"));
    assert!(sub.get_flag("json"));
}

#[test]
fn invalid_admission_fee_is_rejected() {
    let matches =
        cli::build_cli().get_matches_from(["rivermill-forecast", "--admission-fee", "lots"]);
    assert!(RunConfig::from_matches(&matches).is_err());
}

#[test]
fn generate_writes_both_outputs_without_inputs() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let out_dir = output.path().join("nested");
    let ws = workspace(input.path(), &out_dir);
    assert_eq!(ws.actuals.source, InputSource::Embedded);

    let generated = generate::run(&ws).unwrap();
    assert_eq!(generated.csv, out_dir.join("trade-forecast.csv"));
    assert_eq!(generated.summary, out_dir.join("trade-forecast-summary.md"));

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&generated.csv)
        .unwrap();
    let records: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert!(records.iter().all(|r| r.len() == 30));
    assert_eq!(&records[0][0], "Trading forecast (conservative)");
    assert_eq!(&records[5][3], "Aug-25");
    assert_eq!(&records[5][26], "Jul-27");
    let income = records
        .iter()
        .find(|r| &r[0] == "Total Trading Income")
        .unwrap();
    assert_eq!(&income[2], "201972.61");

    let summary = fs::read_to_string(&generated.summary).unwrap();
    assert!(summary.starts_with("# Trade Forecast Summary Report"));
    assert!(summary.contains("FY25/26"));
    assert!(summary.contains("FY26/27"));
    assert!(summary.contains("P&L actuals: embedded defaults"));
}

#[test]
fn generate_is_deterministic() {
    let input = tempdir().unwrap();
    let first = tempdir().unwrap();
    let second = tempdir().unwrap();
    let a = generate::run(&workspace(input.path(), first.path())).unwrap();
    let b = generate::run(&workspace(input.path(), second.path())).unwrap();
    assert_eq!(fs::read(&a.csv).unwrap(), fs::read(&b.csv).unwrap());
    assert_eq!(fs::read(&a.summary).unwrap(), fs::read(&b.summary).unwrap());
}

#[test]
fn supplied_actuals_are_used() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(
        input.path().join("p-l-fy25-and-july-2025.csv"),
        "Account,FY25,Jul-25\nSquare Sales,1000,100\n",
    )
    .unwrap();
    let ws = workspace(input.path(), output.path());
    assert_eq!(ws.actuals.source, InputSource::File);
    let generated = generate::run(&ws).unwrap();
    let csv = fs::read_to_string(&generated.csv).unwrap();
    let line = csv
        .lines()
        .find(|l| l.starts_with("Total Trading Income,"))
        .unwrap();
    assert!(line.starts_with("Total Trading Income,1000.00,100.00,"));
}

#[test]
fn disagreeing_supplied_totals_are_replaced_by_recomputed_sums() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(
        input.path().join("p-l-fy25-and-july-2025.csv"),
        "Account,FY25,Jul-25\n\
         Square Sales,1000,100\n\
         Wedding,500,50\n\
         Total Trading Income,99999,9999\n\
         Rent Expense,300,25\n\
         Total Operating Expenses,1,1\n\
         Net Profit,42,42\n",
    )
    .unwrap();
    let ws = workspace(input.path(), output.path());
    assert_eq!(ws.actuals.fy25("Total Trading Income"), dec!(99999));

    let generated = generate::run(&ws).unwrap();
    let csv = fs::read_to_string(&generated.csv).unwrap();
    let row = |name: &str| {
        csv.lines()
            .find(|l| l.starts_with(&format!("{name},")))
            .unwrap()
            .to_string()
    };
    assert!(row("Total Trading Income").starts_with("Total Trading Income,1500.00,150.00,"));
    assert!(row("Total Operating Expenses").starts_with("Total Operating Expenses,300.00,25.00,"));
    assert!(row("Net Profit").starts_with("Net Profit,1200.00,125.00,"));
    assert!(generated.summary.exists());
}

#[test]
fn money_formatting() {
    assert_eq!(round_money(dec!(1.005)), dec!(1.01));
    assert_eq!(round_money(dec!(-1.005)), dec!(-1.01));
    assert_eq!(money_str(dec!(-0.001)), "0.00");
    assert_eq!(money_str(dec!(12271)), "12271.00");
    assert_eq!(percent_str(dec!(70.109)), "70.1%");
    assert_eq!(fmt_dollars(dec!(1234567.6)), "$1,234,568");
    assert_eq!(fmt_dollars(dec!(-950)), "-$950");
}
