// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rivermill_forecast::baseline::ExpensePlan;
use rivermill_forecast::engine::{
    fy2526_margin, solve_admission_fee, Assumptions, ForecastEngine, FEE_SEARCH_HIGH,
    FEE_SEARCH_LOW,
};
use rivermill_forecast::error::ForecastError;
use rivermill_forecast::models::{FiscalYear, Period, Section};
use rivermill_forecast::schedules::HORIZON;
use rivermill_forecast::seasonal::SeasonalFactors;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn engine() -> ForecastEngine {
    ForecastEngine::standard(SeasonalFactors::embedded(), Assumptions::default()).unwrap()
}

fn opex(engine: &ForecastEngine, i: usize, key: &str) -> Decimal {
    engine
        .record(Period::Forecast(i))
        .unwrap()
        .amount(Section::OperatingExpenses, key)
}

#[test]
fn baseline_record_reproduces_july_trading_income() {
    let rec = engine().record(Period::Baseline).unwrap();
    assert_eq!(rec.label, "Jul-25");
    assert_eq!(rec.total_trading_income, dec!(201972.61));
    assert_eq!(rec.total_cost_of_sales, dec!(60371.39));
    assert_eq!(rec.revenue_growth, Decimal::ZERO);
}

#[test]
fn profit_identities_hold_for_every_bucket() {
    let forecast = engine().run().unwrap();
    let buckets: Vec<_> = forecast.buckets().collect();
    assert_eq!(buckets.len(), HORIZON + 1);
    for rec in buckets {
        let income: Decimal = rec.revenue.values().copied().sum();
        let cogs: Decimal = rec.cost_of_sales.values().copied().sum();
        let opex: Decimal = rec.operating_expenses.values().copied().sum();
        assert_eq!(rec.total_trading_income, income, "{}", rec.label);
        assert_eq!(rec.total_cost_of_sales, cogs, "{}", rec.label);
        assert_eq!(rec.total_operating_expenses, opex, "{}", rec.label);
        assert_eq!(
            rec.gross_profit,
            rec.total_trading_income - rec.total_cost_of_sales,
            "{}",
            rec.label
        );
        assert_eq!(
            rec.net_profit,
            rec.gross_profit - rec.total_operating_expenses,
            "{}",
            rec.label
        );
    }
}

#[test]
fn every_declared_category_present_in_every_month() {
    let engine = engine();
    let plan = engine.plan();
    let forecast = engine.run().unwrap();
    for rec in forecast.buckets() {
        for cat in plan.categories() {
            assert!(
                rec.operating_expenses.contains_key(cat),
                "{} missing {}",
                rec.label,
                cat
            );
        }
        assert_eq!(rec.operating_expenses.len(), plan.categories().len());
    }
}

#[test]
fn categories_without_a_policy_keep_their_default() {
    let e = engine();
    let plan = e.plan();
    assert_eq!(plan.default_for("accounting"), Some(dec!(500)));
    assert_eq!(plan.default_for("yacht"), None);
    for i in 0..HORIZON {
        for cat in ["accounting", "cleaning_expense", "repairs_maintenance", "shipping_postage"] {
            assert_eq!(opex(&e, i, cat), plan.default_for(cat).unwrap(), "{cat} month {i}");
        }
    }
    // marketing falls back to its default once the first-month downpayment is over
    assert_eq!(opex(&e, 1, "marketing"), plan.default_for("marketing").unwrap());
}

#[test]
fn month_labels_span_aug_25_to_jul_27() {
    let forecast = engine().run().unwrap();
    assert_eq!(forecast.months.len(), 24);
    assert_eq!(forecast.months[0].label, "Aug-25");
    assert_eq!(forecast.months[4].label, "Dec-25");
    assert_eq!(forecast.months[11].label, "Jul-26");
    assert_eq!(forecast.months[23].label, "Jul-27");
}

#[test]
fn rent_and_director_start_in_september() {
    let e = engine();
    assert_eq!(opex(&e, 0, "rent_expense"), Decimal::ZERO);
    assert_eq!(opex(&e, 0, "director_salary"), Decimal::ZERO);
    assert_eq!(opex(&e, 1, "rent_expense"), dec!(12271));
    assert_eq!(opex(&e, 1, "director_salary"), dec!(9167));
    assert_eq!(opex(&e, 23, "rent_expense"), dec!(12271));
}

#[test]
fn insurance_and_permits_only_in_july() {
    let e = engine();
    for i in 0..HORIZON {
        let insurance = opex(&e, i, "insurance");
        let permits = opex(&e, i, "property_permits");
        if i == 11 || i == 23 {
            assert_eq!(insurance, dec!(5488.19));
            assert_eq!(permits, dec!(2565.80));
        } else {
            assert_eq!(insurance, Decimal::ZERO, "month {}", i);
            assert_eq!(permits, Decimal::ZERO, "month {}", i);
        }
    }
}

#[test]
fn international_travel_follows_schedule() {
    let e = engine();
    let expected = [
        0, 3000, 2000, 1000, 3000, 0, 0, 0, 0, 0, 0, 0, 2000, 2000, 2000, 2000, 2000, 2000,
        2000, 2000, 2000, 2000, 2000, 2000,
    ];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(opex(&e, i, "travel_international"), Decimal::from(*want));
    }
}

#[test]
fn first_month_policy_overrides() {
    let e = engine();
    assert_eq!(opex(&e, 0, "marketing"), dec!(19136.67));
    assert_eq!(opex(&e, 1, "marketing"), dec!(15000));
    assert_eq!(opex(&e, 0, "utilities"), dec!(1423));
    assert_eq!(opex(&e, 1, "utilities"), dec!(3301.5));
    assert_eq!(opex(&e, 7, "utilities"), dec!(3000));
    assert_eq!(opex(&e, 8, "utilities"), dec!(2698.5));
    assert_eq!(opex(&e, 0, "employee_wages_others"), dec!(20117.63));
    assert_eq!(opex(&e, 2, "employee_wages_others"), dec!(15000));
    assert_eq!(opex(&e, 5, "bank_fees"), dec!(275));
}

#[test]
fn wedding_sales_expense_phases_in() {
    let e = engine();
    assert_eq!(opex(&e, 2, "wedding_sales_expense"), Decimal::ZERO);
    assert_eq!(opex(&e, 3, "wedding_sales_expense"), dec!(2167));
    assert_eq!(opex(&e, 11, "wedding_sales_expense"), dec!(2167));
    assert_eq!(opex(&e, 12, "wedding_sales_expense"), dec!(3333));
}

#[test]
fn farmstay_costs_track_farmstay_revenue() {
    let forecast = engine().run().unwrap();
    for rec in &forecast.months {
        let farm = rec.amount(Section::TradingIncome, "farmstay");
        assert_eq!(
            rec.amount(Section::OperatingExpenses, "farmstay_costs"),
            farm * dec!(0.20)
        );
    }
}

#[test]
fn superannuation_is_twelve_percent_of_wages() {
    let forecast = engine().run().unwrap();
    let rec = &forecast.months[6];
    let wages = rec.amount(Section::CostOfSales, "kitchen_wages")
        + rec.amount(Section::OperatingExpenses, "front_house_wages")
        + rec.amount(Section::OperatingExpenses, "employee_wages_others")
        + rec.amount(Section::OperatingExpenses, "director_salary");
    assert_eq!(
        rec.amount(Section::OperatingExpenses, "superannuation"),
        wages * dec!(0.12)
    );
}

#[test]
fn single_record_growth_matches_full_run() {
    let e = engine();
    let forecast = e.run().unwrap();
    for i in [0, 1, 12, 23] {
        let rec = e.record(Period::Forecast(i)).unwrap();
        assert_eq!(rec.revenue_growth, forecast.months[i].revenue_growth);
        assert_eq!(rec.net_profit, forecast.months[i].net_profit);
    }
}

#[test]
fn record_outside_horizon_is_rejected() {
    let err = engine().record(Period::Forecast(24)).unwrap_err();
    assert!(matches!(err, ForecastError::OutOfHorizon(24)));
}

#[test]
fn higher_december_fee_raises_fy2526_margin() {
    let e = engine();
    let low = fy2526_margin(&e, dec!(4.70)).unwrap();
    let high = fy2526_margin(&e, dec!(12.00)).unwrap();
    assert!(high > low);
}

#[test]
fn fee_solver_stays_within_search_bounds() {
    let e = engine();
    let solution = solve_admission_fee(&e, dec!(5.0), dec!(0.1)).unwrap();
    assert!(solution.fee >= FEE_SEARCH_LOW && solution.fee <= FEE_SEARCH_HIGH);
    assert!(solution.iterations > 0);
    assert_eq!(solution.margin, fy2526_margin(&e, solution.fee).unwrap());
}

#[test]
fn fiscal_summaries_cover_twelve_months_each() {
    let forecast = engine().run().unwrap();
    for fy in FiscalYear::ALL {
        let months = forecast.fiscal_year(fy);
        assert_eq!(months.len(), 12);
        let summary = forecast.summary(fy);
        let revenue: Decimal = months.iter().map(|m| m.total_trading_income).sum();
        assert_eq!(summary.revenue, revenue);
        assert_eq!(
            summary.net_profit,
            summary.revenue - summary.cost_of_sales - summary.operating_expenses
        );
    }
}

#[test]
fn expense_plan_rejects_missing_default() {
    let err = ExpensePlan::new(
        vec!["accounting", "legal"],
        vec![("accounting", dec!(500))],
    )
    .unwrap_err();
    match err {
        ForecastError::MissingDefaults(missing) => assert_eq!(missing, vec!["legal"]),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn expense_plan_rejects_orphaned_default() {
    let err = ExpensePlan::new(
        vec!["accounting"],
        vec![("accounting", dec!(500)), ("yacht", dec!(1))],
    )
    .unwrap_err();
    assert!(matches!(err, ForecastError::OrphanedDefaults(ref v) if v == &["yacht"]));
}

#[test]
fn expense_plan_rejects_duplicate_category() {
    let err = ExpensePlan::new(
        vec!["accounting", "accounting"],
        vec![("accounting", dec!(500))],
    )
    .unwrap_err();
    assert!(matches!(err, ForecastError::DuplicateCategory(_)));
}

#[test]
fn engine_surfaces_undeclared_category() {
    let plan = ExpensePlan::new(vec!["accounting"], vec![("accounting", dec!(500))]).unwrap();
    let e = ForecastEngine::new(
        rivermill_forecast::baseline::Baseline::july_2025(),
        plan,
        SeasonalFactors::embedded(),
        Assumptions::default(),
    );
    let err = e.record(Period::Forecast(0)).unwrap_err();
    assert!(matches!(err, ForecastError::UndeclaredCategory(_)));
}
