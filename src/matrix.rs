// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Account matrix behind `trade-forecast.csv`.
//!
//! Built in stages, each taking and returning the matrix:
//! `declare -> fill_actuals -> fill_forecasts -> compute_totals -> annotate`.

use crate::accounts::{self, AccountDef, RowKind, CHART, EXPLANATIONS};
use crate::actuals::Actuals;
use crate::engine::Forecast;
use crate::models::{FiscalYear, Section};
use crate::schedules::{self, HORIZON};
use crate::utils::{money_str, percent_str, ratio_pct, round_money};
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::path::Path;

pub const TITLE: [&str; 3] = [
    "Trading forecast (conservative)",
    "Colourful.Land Pty Ltd",
    "August 2025 to July 2027",
];

/// FY25 actual, Jul-25 actual, 24 months, two FY totals.
pub const VALUE_COLUMNS: usize = 2 + HORIZON + 2;
/// Account name + values + explanation.
pub const WIDTH: usize = VALUE_COLUMNS + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    ActualFy25,
    ActualJul25,
    Month(usize),
    FyTotal(FiscalYear),
}

impl Column {
    pub fn index(&self) -> usize {
        match self {
            Column::ActualFy25 => 0,
            Column::ActualJul25 => 1,
            Column::Month(i) => 2 + i,
            Column::FyTotal(FiscalYear::Fy2526) => 2 + HORIZON,
            Column::FyTotal(FiscalYear::Fy2627) => 3 + HORIZON,
        }
    }

    pub fn all() -> impl Iterator<Item = Column> {
        [Column::ActualFy25, Column::ActualJul25]
            .into_iter()
            .chain((0..HORIZON).map(Column::Month))
            .chain(FiscalYear::ALL.into_iter().map(Column::FyTotal))
    }

    pub fn name(&self) -> String {
        match self {
            Column::ActualFy25 => "FY25".to_string(),
            Column::ActualJul25 => schedules::BASELINE_LABEL.to_string(),
            Column::Month(i) => schedules::month_label(*i),
            Column::FyTotal(fy) => format!("{} Total", fy.label()),
        }
    }

    fn kind_label(&self) -> String {
        match self {
            Column::ActualFy25 | Column::ActualJul25 => "Actual".to_string(),
            Column::Month(_) => "Forecast".to_string(),
            Column::FyTotal(_) => self.name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Money(Decimal),
    Percent(Decimal),
}

impl Cell {
    pub fn money(&self) -> Decimal {
        match self {
            Cell::Money(d) => *d,
            _ => Decimal::ZERO,
        }
    }

    fn render(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Money(d) => money_str(*d),
            Cell::Percent(d) => percent_str(*d),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AccountRow {
    pub name: &'static str,
    pub kind: RowKind,
    pub cells: Vec<Cell>,
    pub note: String,
}

#[derive(Debug, Clone)]
pub struct AccountMatrix {
    rows: Vec<AccountRow>,
}

impl AccountMatrix {
    /// Declares every chart row with zeroed cells (headings stay empty).
    pub fn declare() -> Self {
        Self::declare_from(&CHART)
    }

    pub fn declare_from(chart: &[AccountDef]) -> Self {
        let rows = chart
            .iter()
            .map(|def| {
                let blank = match def.kind {
                    RowKind::Heading(_) => Cell::Empty,
                    RowKind::GrossMargin => Cell::Percent(Decimal::ZERO),
                    _ => Cell::Money(Decimal::ZERO),
                };
                AccountRow {
                    name: def.name,
                    kind: def.kind,
                    cells: vec![blank; VALUE_COLUMNS],
                    note: String::new(),
                }
            })
            .collect();
        Self { rows }
    }

    /// Places FY25 and Jul-25 actuals on line rows by display name.
    pub fn fill_actuals(mut self, actuals: &Actuals) -> Self {
        for row in self.rows.iter_mut() {
            if let RowKind::Line { .. } = row.kind {
                row.cells[Column::ActualFy25.index()] = Cell::Money(round_money(actuals.fy25(row.name)));
                row.cells[Column::ActualJul25.index()] =
                    Cell::Money(round_money(actuals.jul25(row.name)));
            }
        }
        self
    }

    /// Places each forecast month on line rows via their internal key.
    pub fn fill_forecasts(mut self, forecast: &Forecast) -> Self {
        for (i, month) in forecast.months.iter().enumerate().take(HORIZON) {
            let col = Column::Month(i).index();
            for row in self.rows.iter_mut() {
                if let RowKind::Line {
                    section,
                    key: Some(key),
                } = row.kind
                {
                    row.cells[col] = Cell::Money(round_money(month.amount(section, key)));
                }
            }
        }
        self
    }

    /// Fills FY total columns for line rows, then every derived row in every column.
    pub fn compute_totals(mut self) -> Self {
        for row in self.rows.iter_mut() {
            if let RowKind::Line { .. } = row.kind {
                for fy in FiscalYear::ALL {
                    let sum: Decimal = fy
                        .months()
                        .map(|i| row.cells[Column::Month(i).index()].money())
                        .sum();
                    row.cells[Column::FyTotal(fy).index()] = Cell::Money(sum);
                }
            }
        }

        for col in 0..VALUE_COLUMNS {
            let section_total = |rows: &[AccountRow], section: Section| -> Decimal {
                rows.iter()
                    .filter(|r| matches!(r.kind, RowKind::Line { section: s, .. } if s == section))
                    .map(|r| r.cells[col].money())
                    .sum()
            };
            let income = section_total(&self.rows, Section::TradingIncome);
            let cogs = section_total(&self.rows, Section::CostOfSales);
            let other = section_total(&self.rows, Section::OtherIncome);
            let opex = section_total(&self.rows, Section::OperatingExpenses);
            let gross = income - cogs;
            let net = gross + other - opex;

            for row in self.rows.iter_mut() {
                let cell = match row.kind {
                    RowKind::Total(Section::TradingIncome) => Cell::Money(income),
                    RowKind::Total(Section::CostOfSales) => Cell::Money(cogs),
                    RowKind::Total(Section::OtherIncome) => Cell::Money(other),
                    RowKind::Total(Section::OperatingExpenses) => Cell::Money(opex),
                    RowKind::GrossProfit => Cell::Money(gross),
                    RowKind::GrossMargin => Cell::Percent(ratio_pct(gross, income)),
                    RowKind::NetProfit => Cell::Money(net),
                    _ => continue,
                };
                row.cells[col] = cell;
            }
        }
        self
    }

    /// Warns when a supplied actuals file disagrees with the recomputed totals.
    pub fn reconcile_actuals(self, actuals: &Actuals) -> Self {
        let checks = [
            accounts::total_name(Section::TradingIncome),
            accounts::total_name(Section::CostOfSales),
            accounts::total_name(Section::OtherIncome),
            accounts::total_name(Section::OperatingExpenses),
            "Net Profit",
        ];
        for name in checks {
            for (col, supplied) in [
                (Column::ActualFy25, actuals.fy25.get(name)),
                (Column::ActualJul25, actuals.jul25.get(name)),
            ] {
                let (Some(supplied), Some(computed)) = (supplied, self.value(name, col)) else {
                    continue;
                };
                if (round_money(*supplied) - computed).abs() > Decimal::new(1, 2) {
                    tracing::warn!(
                        account = name,
                        column = %col.name(),
                        supplied = %supplied,
                        computed = %computed,
                        "actuals total differs from sum of its accounts"
                    );
                }
            }
        }
        self
    }

    /// Attaches director explanations to the last column.
    pub fn annotate(mut self, notes: &[(&str, &str)]) -> Self {
        for (name, note) in notes {
            if let Some(row) = self.rows.iter_mut().find(|r| r.name == *name) {
                row.note = note.to_string();
            }
        }
        self
    }

    /// Runs every stage with the standard chart and explanations.
    pub fn build(forecast: &Forecast, actuals: &Actuals) -> Self {
        Self::declare()
            .fill_actuals(actuals)
            .fill_forecasts(forecast)
            .compute_totals()
            .reconcile_actuals(actuals)
            .annotate(&EXPLANATIONS)
    }

    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    pub fn row(&self, name: &str) -> Option<&AccountRow> {
        self.rows.iter().find(|r| r.name == name)
    }

    /// Monetary value of a cell; `None` for unknown rows or non-money cells.
    pub fn value(&self, name: &str, col: Column) -> Option<Decimal> {
        match self.row(name)?.cells.get(col.index())? {
            Cell::Money(d) => Some(*d),
            _ => None,
        }
    }

    pub fn cell(&self, name: &str, col: Column) -> Option<&Cell> {
        self.row(name)?.cells.get(col.index())
    }

    pub fn column_names() -> Vec<String> {
        let mut names = vec!["Account".to_string()];
        names.extend(Column::all().map(|c| c.name()));
        names.push("Director explanation".to_string());
        names
    }

    /// Every output line of the CSV, each exactly `WIDTH` fields wide.
    pub fn records(&self) -> Vec<Vec<String>> {
        let pad = |mut v: Vec<String>| {
            v.resize(WIDTH, String::new());
            v
        };
        let mut out = Vec::new();
        for title in TITLE {
            out.push(pad(vec![title.to_string()]));
        }
        out.push(pad(Vec::new()));

        let mut kinds = vec![String::new()];
        kinds.extend(Column::all().map(|c| c.kind_label()));
        kinds.push("Director explanation".to_string());
        out.push(kinds);
        out.push(Self::column_names());
        out.push(pad(Vec::new()));

        for row in &self.rows {
            let mut rec = Vec::with_capacity(WIDTH);
            rec.push(row.name.to_string());
            rec.extend(row.cells.iter().map(Cell::render));
            rec.push(row.note.clone());
            out.push(rec);
            if let RowKind::Heading(_) = row.kind {
                out.push(pad(Vec::new()));
            }
        }
        out
    }

    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Create CSV {}", path.display()))?;
        for rec in self.records() {
            wtr.write_record(&rec)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
