// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Markdown summary written next to the CSV matrix.

use crate::accounts;
use crate::actuals::Actuals;
use crate::engine::{Assumptions, Forecast};
use crate::matrix::{AccountMatrix, Column};
use crate::models::{FiscalYear, InputSource, MonthRecord, Section};
use crate::schedules;
use crate::utils::{fmt_dollars, percent_str, ratio_pct};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::fmt::{self, Write};

/// Provenance of the optional inputs, reported at the end of the summary.
#[derive(Debug, Clone, Copy)]
pub struct Provenance {
    pub actuals: InputSource,
    pub seasonal: InputSource,
}

fn source_label(s: InputSource) -> &'static str {
    match s {
        InputSource::File => "input file",
        InputSource::Embedded => "embedded defaults",
    }
}

fn range_of(values: &[Decimal]) -> (Decimal, Decimal) {
    let min = values.iter().copied().min().unwrap_or_default();
    let max = values.iter().copied().max().unwrap_or_default();
    (min, max)
}

fn average_labour(months: &[MonthRecord]) -> (Decimal, Decimal) {
    if months.is_empty() {
        return (Decimal::ZERO, Decimal::ZERO);
    }
    let n = Decimal::from(months.len());
    let labour: Decimal = months.iter().map(MonthRecord::labour_cost).sum();
    let revenue: Decimal = months.iter().map(|m| m.total_trading_income).sum();
    (labour / n, ratio_pct(labour, revenue))
}

pub fn render(
    forecast: &Forecast,
    actuals: &Actuals,
    assumptions: &Assumptions,
    provenance: Provenance,
) -> Result<String, fmt::Error> {
    let fy1 = forecast.summary(FiscalYear::Fy2526);
    let fy2 = forecast.summary(FiscalYear::Fy2627);
    let twelve = dec!(12);
    let months = Decimal::from(schedules::HORIZON);

    // FY24/25 trading income as reported in the matrix (sum of income accounts).
    let fy25_income = AccountMatrix::declare()
        .fill_actuals(actuals)
        .compute_totals()
        .value(accounts::total_name(Section::TradingIncome), Column::ActualFy25)
        .unwrap_or_default();

    let total_revenue = fy1.revenue + fy2.revenue;
    let total_net = fy1.net_profit + fy2.net_profit;
    let peak_revenue = forecast.peak_by(|m| m.total_trading_income);
    let peak_profit = forecast.peak_by(|m| m.net_profit);
    let peak_label = |m: Option<&MonthRecord>| m.map(|m| m.label.clone()).unwrap_or_default();

    let baseline_labour = forecast.baseline.labour_cost();
    let baseline_labour_pct = ratio_pct(baseline_labour, forecast.baseline.total_trading_income);
    let (fy1_labour, fy1_labour_pct) = average_labour(forecast.fiscal_year(FiscalYear::Fy2526));
    let labour_saving = baseline_labour - fy1_labour;

    let (wedding_min, wedding_max) = range_of(&schedules::WEDDING_REVENUE);
    let (farm_min, farm_max) = range_of(
        &schedules::FARMSTAY_REVENUE
            .iter()
            .copied()
            .filter(|v| !v.is_zero())
            .collect::<Vec<_>>(),
    );

    let mut s = String::new();
    writeln!(s, "# Trade Forecast Summary Report - Historic Rivermill Transformation")?;
    writeln!(s)?;
    writeln!(s, "## Executive Summary")?;
    writeln!(
        s,
        "24-month trade forecast (Aug 2025 - Jul 2027) for Colourful.Land Pty Ltd, anchored on the July 2025 baseline of {} trading income.",
        fmt_dollars(forecast.baseline.total_trading_income)
    )?;
    writeln!(s)?;

    writeln!(s, "## Financial Performance Overview")?;
    writeln!(s)?;
    writeln!(s, "### Revenue Performance by Financial Year")?;
    writeln!(s, "| Period | Total Revenue | Average Monthly | Peak Month |")?;
    writeln!(s, "|--------|---------------|-----------------|------------|")?;
    writeln!(
        s,
        "| **FY24/25** (Aug 2024 - Jul 2025) | {} | {} | N/A |",
        fmt_dollars(fy25_income),
        fmt_dollars(fy25_income / twelve)
    )?;
    for (summary, span) in [
        (&fy1, "(Aug 2025 - Jul 2026)"),
        (&fy2, "(Aug 2026 - Jul 2027)"),
    ] {
        let peak = forecast
            .fiscal_year(summary.year)
            .iter()
            .fold(None, |best: Option<&MonthRecord>, m| match best {
                Some(b) if b.total_trading_income >= m.total_trading_income => Some(b),
                _ => Some(m),
            });
        writeln!(
            s,
            "| **{}** {} | {} | {} | {} |",
            summary.year.label(),
            span,
            fmt_dollars(summary.revenue),
            fmt_dollars(summary.revenue / twelve),
            peak_label(peak)
        )?;
    }
    writeln!(
        s,
        "| **Total 24 Months** | {} | {} | {} ({}) |",
        fmt_dollars(total_revenue),
        fmt_dollars(total_revenue / months),
        peak_label(peak_revenue),
        fmt_dollars(peak_revenue.map(|m| m.total_trading_income).unwrap_or_default())
    )?;
    writeln!(s)?;

    writeln!(s, "### Profitability Analysis by Financial Year")?;
    writeln!(s, "| Period | Total Net Profit | Average Monthly | Average Margin |")?;
    writeln!(s, "|--------|------------------|-----------------|----------------|")?;
    for (summary, span) in [
        (&fy1, "(Aug 2025 - Jul 2026)"),
        (&fy2, "(Aug 2026 - Jul 2027)"),
    ] {
        writeln!(
            s,
            "| **{}** {} | {} | {} | {} |",
            summary.year.label(),
            span,
            fmt_dollars(summary.net_profit),
            fmt_dollars(summary.net_profit / twelve),
            percent_str(summary.net_margin)
        )?;
    }
    writeln!(
        s,
        "| **Total 24 Months** | {} | {} | {} |",
        fmt_dollars(total_net),
        fmt_dollars(total_net / months),
        percent_str(ratio_pct(total_net, total_revenue))
    )?;
    writeln!(s)?;
    writeln!(
        s,
        "**Peak Profit Month:** {} ({})",
        peak_label(peak_profit),
        fmt_dollars(peak_profit.map(|m| m.net_profit).unwrap_or_default())
    )?;
    writeln!(s)?;

    writeln!(s, "## Transformation Success Metrics")?;
    writeln!(s)?;
    writeln!(s, "### Labour Cost Optimisation (Site-Wide)")?;
    writeln!(
        s,
        "- **Previous Structure (Jul 2025):** {} per month, {} of trading income",
        fmt_dollars(baseline_labour),
        percent_str(baseline_labour_pct)
    )?;
    writeln!(
        s,
        "  - Back of house wages: {}",
        fmt_dollars(forecast.baseline.amount(Section::CostOfSales, "kitchen_wages"))
    )?;
    writeln!(
        s,
        "  - Front of house wages: {}",
        fmt_dollars(forecast.baseline.amount(Section::OperatingExpenses, "front_house_wages"))
    )?;
    writeln!(
        s,
        "  - Other employee wages: {}",
        fmt_dollars(forecast.baseline.amount(Section::OperatingExpenses, "employee_wages_others"))
    )?;
    writeln!(
        s,
        "- **Restructured Model (FY25/26 average):** {} per month, {} of trading income",
        fmt_dollars(fy1_labour),
        percent_str(fy1_labour_pct)
    )?;
    writeln!(
        s,
        "- **Labour Cost Savings:** {} monthly, {} annually",
        fmt_dollars(labour_saving),
        fmt_dollars(labour_saving * twelve)
    )?;
    writeln!(s, "- **Implementation:** September 2025 onwards")?;
    writeln!(s)?;

    writeln!(s, "### Revenue Diversification")?;
    writeln!(s, "- **Tourism Operations:** core revenue driver with seasonal shape from historical gross sales")?;
    writeln!(
        s,
        "- **Wedding Services:** phased recovery from {} to {} monthly",
        fmt_dollars(wedding_min),
        fmt_dollars(wedding_max)
    )?;
    writeln!(
        s,
        "- **Farmstay Accommodation:** {} to {} monthly progression",
        fmt_dollars(farm_min),
        fmt_dollars(farm_max)
    )?;
    writeln!(
        s,
        "- **Admission Fee Strategy:** A${:.2} -> A${:.2} (Sep 2025) -> A${:.2} (Dec 2025)",
        schedules::BASELINE_ADMISSION_FEE,
        schedules::SEPTEMBER_ADMISSION_FEE,
        assumptions.admission_fee_from_december
    )?;
    writeln!(s)?;

    writeln!(s, "### Operational Efficiency")?;
    writeln!(
        s,
        "- **Solar Energy:** {} annual savings from August 2025",
        fmt_dollars(schedules::MONTHLY_SOLAR_SAVINGS * twelve)
    )?;
    let marketing: Decimal = forecast
        .fiscal_year(FiscalYear::Fy2526)
        .iter()
        .map(|m| m.amount(Section::OperatingExpenses, "marketing"))
        .sum();
    writeln!(s, "- **Marketing Investment:** {} in FY25/26", fmt_dollars(marketing))?;
    writeln!(
        s,
        "- **Rent Management:** holiday through August 2025, then {} monthly",
        fmt_dollars(schedules::RENT_FROM_SEPTEMBER)
    )?;
    writeln!(s)?;

    writeln!(s, "## Seasonal Performance Analysis")?;
    writeln!(s)?;
    writeln!(s, "### Peak Tourism Periods (Sep-Feb)")?;
    writeln!(s, "- Higher revenue through admission fees and tourism activities")?;
    writeln!(s, "- Lower labour ratios and higher utilities load")?;
    writeln!(s)?;
    writeln!(s, "### Traditional Dining Periods (Apr-Aug)")?;
    writeln!(s, "- Stable operations with tourism support")?;
    writeln!(s, "- Higher labour ratios reflecting service focus")?;
    writeln!(s)?;

    writeln!(s, "## Growth Trajectory")?;
    writeln!(s)?;
    writeln!(s, "### FY25/26 (First Year)")?;
    writeln!(
        s,
        "- **Target Growth:** +{} beyond the July 2025 baseline",
        percent_str(assumptions.fy2526_growth_target * Decimal::ONE_HUNDRED)
    )?;
    writeln!(s, "- **Key Drivers:** admission fee changes, tourism expansion, operational restructuring")?;
    writeln!(s)?;
    writeln!(s, "### FY26/27 (Second Year)")?;
    writeln!(
        s,
        "- **Target Growth:** +{} building on first year achievements",
        percent_str(assumptions.fy2627_growth_target * Decimal::ONE_HUNDRED)
    )?;
    writeln!(s, "- **Key Drivers:** established tourism operations, wedding service maturity, farmstay expansion")?;
    writeln!(s)?;

    writeln!(s, "## Risk Mitigation")?;
    writeln!(s, "- Excludes chalet development revenue (pending DA approval)")?;
    writeln!(s, "- Excludes wildlife licence premium pricing")?;
    writeln!(s, "- Seasonal working capital management and phased implementation")?;
    writeln!(s)?;

    writeln!(s, "## Inputs")?;
    writeln!(s, "- P&L actuals: {}", source_label(provenance.actuals))?;
    writeln!(s, "- Seasonal factors: {}", source_label(provenance.seasonal))?;
    Ok(s)
}
