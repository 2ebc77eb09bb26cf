// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rivermill_forecast::actuals::Actuals;
use rivermill_forecast::baseline::Baseline;
use rivermill_forecast::engine::{Assumptions, ForecastEngine};
use rivermill_forecast::matrix::{AccountMatrix, Column};
use rivermill_forecast::models::InputSource;
use rivermill_forecast::seasonal::SeasonalFactors;
use rivermill_forecast::utils::{parse_cell, parse_decimal};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fs;
use tempfile::tempdir;

fn close(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < dec!(0.0000001)
}

#[test]
fn missing_gross_sales_uses_embedded_factors() {
    let dir = tempdir().unwrap();
    let s = SeasonalFactors::load(&dir.path().join("absent.csv"));
    assert_eq!(s.source(), InputSource::Embedded);
    assert_eq!(s.factor(7), Decimal::ONE);
    assert_eq!(s.factor(8), dec!(0.825));
    assert_eq!(s.factor(3), dec!(0.72));
}

#[test]
fn gross_sales_history_derives_factors() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gross.csv");
    fs::write(
        &path,
        "Month,Gross\n\
         2024-01,500\n\
         2024-02,1000\n\
         2024-04,3000\n\
         2024-07,99999\n\
         2024-08,4000\n\
         2024-09,2000\n\
         2025-01,1267\n\
         2025-07,12345\n",
    )
    .unwrap();
    let s = SeasonalFactors::load(&path);
    assert_eq!(s.source(), InputSource::File);
    assert_eq!(s.factor(7), Decimal::ONE);
    assert!(close(s.factor(8), s.factor(9) * dec!(2)));
    // 2025 January deflated by a year of growth equals the 2024-09 reading
    assert!(close(s.factor(1), s.factor(9) / dec!(2)));
    assert!(close(s.factor(3), (s.factor(2) + s.factor(4)) / dec!(2)));
    assert!(close(s.factor(4), s.factor(2) * dec!(3)));
    // months absent from the history stay neutral
    assert_eq!(s.factor(11), Decimal::ONE);
}

#[test]
fn malformed_gross_sales_rows_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gross.csv");
    fs::write(
        &path,
        "2024-08,abc\n\
         August,1000\n\
         2024-13,1000\n\
         ,\n\
         2024-09,2000\n",
    )
    .unwrap();
    let s = SeasonalFactors::load(&path);
    assert_eq!(s.source(), InputSource::File);
    assert_eq!(s.factor(8), Decimal::ONE);
    assert!(s.factor(9) > Decimal::ZERO && s.factor(9) != Decimal::ONE);
}

#[test]
fn unusable_gross_sales_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gross.csv");
    fs::write(&path, "Month,Gross\n2023-05,1000\n").unwrap();
    let s = SeasonalFactors::load(&path);
    assert_eq!(s.source(), InputSource::Embedded);
}

#[test]
fn embedded_actuals_mirror_the_baseline_month() {
    let a = Actuals::embedded(&Baseline::july_2025());
    assert_eq!(a.source, InputSource::Embedded);
    assert_eq!(a.jul25("Square Sales"), dec!(202175.34));
    assert_eq!(a.fy25("Square Sales"), dec!(2426104.08));
    assert_eq!(a.jul25("Rent Expense"), dec!(12271.43));
    assert_eq!(a.jul25("Not An Account"), Decimal::ZERO);
}

#[test]
fn actuals_file_rows_are_parsed_and_bad_rows_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actuals.csv");
    fs::write(
        &path,
        "Account,FY25,Jul-25\n\
         Square Sales,1200000.50,100000.25\n\
         Wedding,,2375\n\
         Broken Row,abc,1\n\
         Short,1\n\
         ,5,5\n",
    )
    .unwrap();
    let a = Actuals::load(&path, &Baseline::july_2025());
    assert_eq!(a.source, InputSource::File);
    assert_eq!(a.fy25("Square Sales"), dec!(1200000.50));
    assert_eq!(a.jul25("Square Sales"), dec!(100000.25));
    assert_eq!(a.fy25("Wedding"), Decimal::ZERO);
    assert_eq!(a.jul25("Wedding"), dec!(2375));
    assert!(!a.fy25.contains_key("Broken Row"));
    assert!(!a.fy25.contains_key("Short"));
    assert!(!a.fy25.contains_key(""));
}

#[test]
fn empty_actuals_file_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actuals.csv");
    fs::write(&path, "").unwrap();
    let a = Actuals::load(&path, &Baseline::july_2025());
    assert_eq!(a.source, InputSource::Embedded);
    assert_eq!(a.jul25("Square Sales"), dec!(202175.34));
}

#[test]
fn oversized_actuals_cells_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actuals.csv");
    fs::write(
        &path,
        "Square Sales,50000000000000000000000000000,1\n\
         Wedding,50000000000000000000000000000,1\n\
         Venue Hire,1000000000000000,5\n",
    )
    .unwrap();
    let a = Actuals::load(&path, &Baseline::july_2025());
    assert_eq!(a.source, InputSource::File);
    assert!(!a.fy25.contains_key("Square Sales"));
    assert!(!a.fy25.contains_key("Wedding"));
    assert_eq!(a.fy25("Venue Hire"), dec!(1000000000000000));

    let forecast = ForecastEngine::standard(SeasonalFactors::embedded(), Assumptions::default())
        .unwrap()
        .run()
        .unwrap();
    let m = AccountMatrix::build(&forecast, &a);
    assert_eq!(
        m.value("Total Trading Income", Column::ActualFy25),
        Some(dec!(1000000000000000))
    );
}

#[test]
fn only_oversized_actuals_falls_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("actuals.csv");
    fs::write(&path, "Square Sales,50000000000000000000000000000,1\n").unwrap();
    let a = Actuals::load(&path, &Baseline::july_2025());
    assert_eq!(a.source, InputSource::Embedded);
}

#[test]
fn oversized_gross_sales_rows_are_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gross.csv");
    fs::write(
        &path,
        "2024-08,70000000000000000000000000000\n2024-09,2000\n",
    )
    .unwrap();
    let s = SeasonalFactors::load(&path);
    assert_eq!(s.source(), InputSource::File);
    assert_eq!(s.factor(8), Decimal::ONE);

    let forecast = ForecastEngine::standard(s, Assumptions::default())
        .unwrap()
        .run()
        .unwrap();
    assert_eq!(forecast.months.len(), 24);
}

#[test]
fn largest_accepted_gross_sales_still_forecasts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("gross.csv");
    fs::write(&path, "2024-08,1000000000000000\n").unwrap();
    let s = SeasonalFactors::load(&path);
    let engine = ForecastEngine::standard(s, Assumptions::default()).unwrap();
    let forecast = engine.run().unwrap();
    let m = AccountMatrix::build(&forecast, &Actuals::embedded(engine.baseline()));
    assert!(m.value("Net Profit", Column::Month(0)).is_some());
}

#[test]
fn numeric_parsing_rejects_out_of_range_values() {
    assert_eq!(parse_cell("1e15"), Some(dec!(1000000000000000)));
    assert_eq!(parse_cell("-1000000000000001"), None);
    assert_eq!(parse_cell("5e40"), None);
    assert!(parse_decimal("20000000000000000").is_err());
    assert_eq!(parse_decimal(" 4.70 ").unwrap(), dec!(4.70));
}
