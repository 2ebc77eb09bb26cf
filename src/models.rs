// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// P&L section an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    TradingIncome,
    CostOfSales,
    OtherIncome,
    OperatingExpenses,
}

/// Operating season used to pick labour ratios and utility levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    PeakTourism,
    TraditionalDining,
    Transition,
}

/// One time bucket: the July 2025 actual month or a forecast month offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    Baseline,
    Forecast(usize),
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthRecord {
    pub label: String,
    pub period: Period,
    pub revenue: BTreeMap<&'static str, Decimal>,
    pub total_trading_income: Decimal,
    pub cost_of_sales: BTreeMap<&'static str, Decimal>,
    pub total_cost_of_sales: Decimal,
    pub gross_profit: Decimal,
    pub operating_expenses: BTreeMap<&'static str, Decimal>,
    pub total_operating_expenses: Decimal,
    pub net_profit: Decimal,
    pub net_profit_margin: Decimal, // percent
    pub revenue_growth: Decimal,    // percent vs previous bucket
}

impl MonthRecord {
    /// Amount booked against `key` in the given section, zero when absent.
    pub fn amount(&self, section: Section, key: &str) -> Decimal {
        let lines = match section {
            Section::TradingIncome => &self.revenue,
            Section::CostOfSales => &self.cost_of_sales,
            Section::OperatingExpenses => &self.operating_expenses,
            Section::OtherIncome => return Decimal::ZERO,
        };
        lines.get(key).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn labour_cost(&self) -> Decimal {
        self.amount(Section::CostOfSales, "kitchen_wages")
            + self.amount(Section::OperatingExpenses, "front_house_wages")
            + self.amount(Section::OperatingExpenses, "employee_wages_others")
            + self.amount(Section::OperatingExpenses, "director_salary")
    }
}

/// The two forecast fiscal years (August through July).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FiscalYear {
    #[serde(rename = "FY25/26")]
    Fy2526,
    #[serde(rename = "FY26/27")]
    Fy2627,
}

impl FiscalYear {
    pub const ALL: [FiscalYear; 2] = [FiscalYear::Fy2526, FiscalYear::Fy2627];

    pub fn label(&self) -> &'static str {
        match self {
            FiscalYear::Fy2526 => "FY25/26",
            FiscalYear::Fy2627 => "FY26/27",
        }
    }

    /// Forecast month offsets covered by this fiscal year.
    pub fn months(&self) -> std::ops::Range<usize> {
        match self {
            FiscalYear::Fy2526 => 0..12,
            FiscalYear::Fy2627 => 12..24,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct FiscalSummary {
    pub year: FiscalYear,
    pub revenue: Decimal,
    pub cost_of_sales: Decimal,
    pub gross_profit: Decimal,
    pub operating_expenses: Decimal,
    pub net_profit: Decimal,
    pub net_margin: Decimal,
}

/// Where an optional input came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    File,
    Embedded,
}
