// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Month-by-month P&L projection from the July 2025 baseline.

use crate::baseline::{Baseline, ExpensePlan};
use crate::error::ForecastError;
use crate::models::{FiscalSummary, FiscalYear, MonthRecord, Period, Section};
use crate::schedules::{self, HORIZON};
use crate::seasonal::SeasonalFactors;
use crate::utils::ratio_pct;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::collections::BTreeMap;

/// Tunable inputs of the projection.
#[derive(Debug, Clone, Serialize)]
pub struct Assumptions {
    /// Admission fee charged from December 2025.
    pub admission_fee_from_december: Decimal,
    /// Tourism growth reached by the end of FY25/26, phased in monthly.
    pub fy2526_growth_target: Decimal,
    /// Tourism growth reached by the end of FY26/27, phased in monthly.
    pub fy2627_growth_target: Decimal,
}

impl Default for Assumptions {
    fn default() -> Self {
        Self {
            admission_fee_from_december: dec!(4.70),
            fy2526_growth_target: Decimal::ZERO,
            fy2627_growth_target: dec!(0.14),
        }
    }
}

/// Revenue lines for one bucket plus the base that variable costs are charged on.
struct RevenueBreakdown {
    lines: BTreeMap<&'static str, Decimal>,
    cost_base: Decimal,
}

impl RevenueBreakdown {
    fn total(&self) -> Decimal {
        self.lines.values().copied().sum()
    }
}

#[derive(Debug, Clone)]
pub struct ForecastEngine {
    baseline: Baseline,
    plan: ExpensePlan,
    seasonal: SeasonalFactors,
    assumptions: Assumptions,
}

impl ForecastEngine {
    pub fn new(
        baseline: Baseline,
        plan: ExpensePlan,
        seasonal: SeasonalFactors,
        assumptions: Assumptions,
    ) -> Self {
        Self {
            baseline,
            plan,
            seasonal,
            assumptions,
        }
    }

    /// Engine over the July 2025 baseline and the standard expense plan.
    pub fn standard(
        seasonal: SeasonalFactors,
        assumptions: Assumptions,
    ) -> Result<Self, ForecastError> {
        Ok(Self::new(
            Baseline::july_2025(),
            ExpensePlan::standard()?,
            seasonal,
            assumptions,
        ))
    }

    pub fn with_admission_fee(&self, fee: Decimal) -> Self {
        let mut next = self.clone();
        next.assumptions.admission_fee_from_december = fee;
        next
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub fn plan(&self) -> &ExpensePlan {
        &self.plan
    }

    pub fn seasonal(&self) -> &SeasonalFactors {
        &self.seasonal
    }

    fn check_horizon(index: usize) -> Result<(), ForecastError> {
        if index < HORIZON {
            Ok(())
        } else {
            Err(ForecastError::OutOfHorizon(index))
        }
    }

    /// Admission fee in force for a forecast month.
    pub fn admission_fee(&self, index: usize) -> Decimal {
        if index >= schedules::DECEMBER_FEE_FROM {
            self.assumptions.admission_fee_from_december
        } else if index >= schedules::SEPTEMBER_FEE_FROM {
            schedules::SEPTEMBER_ADMISSION_FEE
        } else {
            schedules::BASELINE_ADMISSION_FEE
        }
    }

    /// Tourism revenue: seasonal baseline plus the admission-fee uplift on
    /// weekend visitors, grown towards the fiscal-year target.
    pub fn tourism_revenue(&self, index: usize) -> Decimal {
        let tourism_base = self.baseline.tourism_income();
        let factor = self.seasonal.factor(schedules::calendar_month(index));
        let weekend_visitors = schedules::ANNUAL_VISITORS * schedules::WEEKEND_VISITOR_SHARE_NUM
            / schedules::WEEKEND_VISITOR_SHARE_DEN
            / dec!(12)
            * factor;
        let uplift = |fee: Decimal| weekend_visitors * (fee - schedules::BASELINE_ADMISSION_FEE);

        if index < 12 {
            let progress = Decimal::from(index + 1) / dec!(12);
            let growth = Decimal::ONE + self.assumptions.fy2526_growth_target * progress;
            (tourism_base * factor + uplift(self.admission_fee(index))) * growth
        } else {
            let progress = Decimal::from(index - 11) / dec!(12);
            let growth = Decimal::ONE + self.assumptions.fy2627_growth_target * progress;
            let fee = self.assumptions.admission_fee_from_december;
            (tourism_base * factor + uplift(fee)) * growth
        }
    }

    fn revenue(&self, period: Period) -> RevenueBreakdown {
        match period {
            Period::Baseline => {
                let lines: BTreeMap<_, _> = self
                    .baseline
                    .section(Section::TradingIncome)
                    .map(|l| (l.key, l.amount))
                    .collect();
                let cost_base = lines.values().copied().sum();
                RevenueBreakdown { lines, cost_base }
            }
            Period::Forecast(i) => {
                let tourism = self.tourism_revenue(i);
                let wedding = schedules::WEDDING_REVENUE[i];
                let farmstay = schedules::FARMSTAY_REVENUE[i];
                let tourism_base = self.baseline.tourism_income();
                let scale = if tourism_base.is_zero() {
                    Decimal::ZERO
                } else {
                    tourism / tourism_base
                };
                let scaled = |key: &str| self.baseline.amount(key) * scale;

                let lines = BTreeMap::from([
                    ("parties_events", scaled("parties_events")),
                    ("restaurant_revenue", scaled("restaurant_revenue")),
                    ("square_card_surcharges", scaled("square_card_surcharges")),
                    ("square_discounts", scaled("square_discounts")),
                    ("square_sales", tourism),
                    ("wedding", wedding),
                    ("farmstay", farmstay),
                ]);
                RevenueBreakdown {
                    lines,
                    cost_base: tourism + wedding + farmstay,
                }
            }
        }
    }

    /// Total trading income for a bucket without building the full record.
    pub fn trading_income(&self, period: Period) -> Result<Decimal, ForecastError> {
        if let Period::Forecast(i) = period {
            Self::check_horizon(i)?;
        }
        Ok(self.revenue(period).total())
    }

    /// Computes a single bucket's record.
    pub fn record(&self, period: Period) -> Result<MonthRecord, ForecastError> {
        let previous = match period {
            Period::Baseline => None,
            Period::Forecast(0) => Some(self.trading_income(Period::Baseline)?),
            Period::Forecast(i) => Some(self.trading_income(Period::Forecast(i - 1))?),
        };
        self.build_record(period, previous)
    }

    /// Baseline plus every forecast month; growth reuses the previous record.
    pub fn run(&self) -> Result<Forecast, ForecastError> {
        let baseline = self.build_record(Period::Baseline, None)?;
        let mut months: Vec<MonthRecord> = Vec::with_capacity(HORIZON);
        let mut previous = baseline.total_trading_income;
        for i in 0..HORIZON {
            let rec = self.build_record(Period::Forecast(i), Some(previous))?;
            previous = rec.total_trading_income;
            months.push(rec);
        }
        tracing::debug!(months = months.len(), "forecast computed");
        Ok(Forecast { baseline, months })
    }

    fn build_record(
        &self,
        period: Period,
        previous_income: Option<Decimal>,
    ) -> Result<MonthRecord, ForecastError> {
        if let Period::Forecast(i) = period {
            Self::check_horizon(i)?;
        }
        let revenue = self.revenue(period);
        let total_trading_income = revenue.total();

        let (label, cost_of_sales, operating_expenses) = match period {
            Period::Baseline => (
                schedules::BASELINE_LABEL.to_string(),
                self.baseline_cost_of_sales(),
                self.baseline_expenses()?,
            ),
            Period::Forecast(i) => {
                let cost_of_sales = self.cost_of_sales(i, revenue.cost_base);
                let expenses = self.operating_expenses(i, &revenue, &cost_of_sales)?;
                (schedules::month_label(i), cost_of_sales, expenses)
            }
        };

        let total_cost_of_sales: Decimal = cost_of_sales.values().copied().sum();
        let gross_profit = total_trading_income - total_cost_of_sales;
        let total_operating_expenses: Decimal = operating_expenses.values().copied().sum();
        let net_profit = gross_profit - total_operating_expenses;
        let revenue_growth = match previous_income {
            Some(prev) if !prev.is_zero() => {
                (total_trading_income - prev) / prev * Decimal::ONE_HUNDRED
            }
            _ => Decimal::ZERO,
        };

        Ok(MonthRecord {
            label,
            period,
            revenue: revenue.lines,
            total_trading_income,
            cost_of_sales,
            total_cost_of_sales,
            gross_profit,
            operating_expenses,
            total_operating_expenses,
            net_profit,
            net_profit_margin: ratio_pct(net_profit, total_trading_income),
            revenue_growth,
        })
    }

    fn baseline_cost_of_sales(&self) -> BTreeMap<&'static str, Decimal> {
        self.baseline
            .section(Section::CostOfSales)
            .map(|l| (l.key, l.amount))
            .collect()
    }

    fn baseline_expenses(&self) -> Result<BTreeMap<&'static str, Decimal>, ForecastError> {
        let mut sheet = self.plan.zeroed_sheet();
        for l in self.baseline.section(Section::OperatingExpenses) {
            sheet.set(l.key, l.amount)?;
        }
        Ok(sheet.into_lines())
    }

    fn cost_of_sales(&self, index: usize, cost_base: Decimal) -> BTreeMap<&'static str, Decimal> {
        let ratios = schedules::SEASONS[index].labour_ratios();
        BTreeMap::from([
            ("kitchen_wages", cost_base * ratios.kitchen_wages),
            ("food_costs", cost_base * schedules::FOOD_COST_RATIO[index]),
            (
                "general_cafe_cogs",
                cost_base * schedules::GENERAL_CAFE_COGS_RATIO,
            ),
        ])
    }

    fn operating_expenses(
        &self,
        index: usize,
        revenue: &RevenueBreakdown,
        cost_of_sales: &BTreeMap<&'static str, Decimal>,
    ) -> Result<BTreeMap<&'static str, Decimal>, ForecastError> {
        let season = schedules::SEASONS[index];
        let first_month = index == 0;
        let mut sheet = self.plan.sheet();

        sheet.set(
            "front_house_wages",
            revenue.cost_base * season.labour_ratios().front_house_wages,
        )?;
        sheet.set(
            "bank_fees",
            schedules::BANK_FEES_BASE + schedules::BANK_FEES_STEP * Decimal::from(index),
        )?;
        sheet.set(
            "employee_wages_others",
            if first_month {
                self.baseline.amount("employee_wages_others")
            } else {
                schedules::OTHER_WAGES_AFTER_RESTRUCTURE
            },
        )?;

        // August is the last month of the rent holiday and precedes the director's start.
        let (rent, director) = if first_month {
            (Decimal::ZERO, Decimal::ZERO)
        } else {
            (schedules::RENT_FROM_SEPTEMBER, schedules::DIRECTOR_SALARY)
        };
        sheet.set("rent_expense", rent)?;
        sheet.set("director_salary", director)?;

        if first_month {
            sheet.set(
                "marketing",
                self.baseline.amount("marketing") + schedules::MEDIA_DOWNPAYMENT,
            )?;
        }

        let utilities = if first_month {
            schedules::FIRST_MONTH_UTILITIES
        } else {
            schedules::UTILITIES_BASELINE * season.utilities_factor()
        };
        sheet.set("utilities", utilities - schedules::MONTHLY_SOLAR_SAVINGS)?;

        let farmstay = revenue.lines.get("farmstay").copied().unwrap_or_default();
        sheet.set("farmstay_costs", farmstay * schedules::FARMSTAY_COST_RATIO)?;

        let wedding_sales = if index < schedules::WEDDING_SALES_EXPENSE_FROM {
            Decimal::ZERO
        } else if index < 12 {
            schedules::WEDDING_SALES_EXPENSE_FY2526
        } else {
            schedules::WEDDING_SALES_EXPENSE_FY2627
        };
        sheet.set("wedding_sales_expense", wedding_sales)?;

        let line = |key: &str| revenue.lines.get(key).copied().unwrap_or_default();
        let square_income =
            line("square_sales") + line("square_card_surcharges") + line("square_discounts").abs();
        sheet.set("square_fees", square_income * schedules::SQUARE_FEE_RATIO)?;

        let wages = cost_of_sales.get("kitchen_wages").copied().unwrap_or_default()
            + sheet.get("front_house_wages")
            + sheet.get("employee_wages_others")
            + sheet.get("director_salary");
        sheet.set("superannuation", wages * schedules::SUPERANNUATION_RATIO)?;

        if schedules::ANNUAL_PAYMENT_MONTHS.contains(&index) {
            sheet.set("insurance", self.baseline.amount("insurance"))?;
            sheet.set("property_permits", self.baseline.amount("property_permits"))?;
        }

        sheet.set(
            "travel_international",
            schedules::TRAVEL_INTERNATIONAL[index],
        )?;

        Ok(sheet.into_lines())
    }
}

/// The July 2025 baseline record followed by the 24 forecast months.
#[derive(Debug, Clone, Serialize)]
pub struct Forecast {
    pub baseline: MonthRecord,
    pub months: Vec<MonthRecord>,
}

impl Forecast {
    /// All 25 buckets in time order.
    pub fn buckets(&self) -> impl Iterator<Item = &MonthRecord> {
        std::iter::once(&self.baseline).chain(self.months.iter())
    }

    pub fn fiscal_year(&self, fy: FiscalYear) -> &[MonthRecord] {
        let range = fy.months();
        let end = range.end.min(self.months.len());
        let start = range.start.min(end);
        &self.months[start..end]
    }

    pub fn summary(&self, fy: FiscalYear) -> FiscalSummary {
        let months = self.fiscal_year(fy);
        let revenue: Decimal = months.iter().map(|m| m.total_trading_income).sum();
        let cost_of_sales: Decimal = months.iter().map(|m| m.total_cost_of_sales).sum();
        let operating_expenses: Decimal = months.iter().map(|m| m.total_operating_expenses).sum();
        let gross_profit = revenue - cost_of_sales;
        let net_profit = gross_profit - operating_expenses;
        FiscalSummary {
            year: fy,
            revenue,
            cost_of_sales,
            gross_profit,
            operating_expenses,
            net_profit,
            net_margin: ratio_pct(net_profit, revenue),
        }
    }

    /// Forecast month with the highest value of `metric`; earliest wins ties.
    pub fn peak_by<F>(&self, metric: F) -> Option<&MonthRecord>
    where
        F: Fn(&MonthRecord) -> Decimal,
    {
        self.months.iter().fold(None, |best: Option<&MonthRecord>, m| match best {
            Some(b) if metric(b) >= metric(m) => Some(b),
            _ => Some(m),
        })
    }
}

/// FY25/26 net margin at a given December admission fee.
pub fn fy2526_margin(engine: &ForecastEngine, fee: Decimal) -> Result<Decimal, ForecastError> {
    let forecast = engine.with_admission_fee(fee).run()?;
    Ok(forecast.summary(FiscalYear::Fy2526).net_margin)
}

/// Bisection bounds and stopping width for the admission-fee search.
pub const FEE_SEARCH_LOW: Decimal = dec!(4.75);
pub const FEE_SEARCH_HIGH: Decimal = dec!(20.00);
const FEE_SEARCH_WIDTH: Decimal = dec!(0.01);

#[derive(Debug, Clone, Serialize)]
pub struct FeeSolution {
    pub fee: Decimal,
    pub margin: Decimal,
    pub iterations: u32,
}

/// Searches for the December admission fee whose FY25/26 net margin is
/// closest to `target` (percent), stopping once within `tolerance`.
pub fn solve_admission_fee(
    engine: &ForecastEngine,
    target: Decimal,
    tolerance: Decimal,
) -> Result<FeeSolution, ForecastError> {
    let mut low = FEE_SEARCH_LOW;
    let mut high = FEE_SEARCH_HIGH;
    let mut best: Option<(Decimal, Decimal, Decimal)> = None;
    let mut iterations = 0;

    while high - low > FEE_SEARCH_WIDTH {
        iterations += 1;
        let mid = (low + high) / dec!(2);
        let margin = fy2526_margin(engine, mid)?;
        let diff = (margin - target).abs();
        tracing::debug!(%mid, %margin, "admission fee probe");

        if best.is_none_or(|(_, _, d)| diff < d) {
            best = Some((mid, margin, diff));
        }
        if margin < target {
            low = mid;
        } else {
            high = mid;
        }
        if diff <= tolerance {
            break;
        }
    }

    let (fee, margin) = match best {
        Some((fee, margin, _)) => (fee, margin),
        None => (low, fy2526_margin(engine, low)?),
    };
    Ok(FeeSolution {
        fee,
        margin,
        iterations,
    })
}
