// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed per-month schedules and business constants for the Aug-25 to Jul-27
//! horizon. Every schedule is a `[_; HORIZON]` array, so its length always
//! matches the forecast horizon.

use crate::models::Season;
use chrono::{Datelike, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const HORIZON: usize = 24;

pub const BASELINE_LABEL: &str = "Jul-25";

/// Admission fee charged during the baseline month.
pub const BASELINE_ADMISSION_FEE: Decimal = dec!(4.75);
/// Admission fee from September 2025.
pub const SEPTEMBER_ADMISSION_FEE: Decimal = dec!(8.75);
/// First month offset charging the September fee (Sep-25).
pub const SEPTEMBER_FEE_FROM: usize = 1;
/// First month offset charging the configurable December fee (Dec-25).
pub const DECEMBER_FEE_FROM: usize = 4;

pub const ANNUAL_VISITORS: Decimal = dec!(125000);
pub const WEEKEND_VISITOR_SHARE_NUM: Decimal = dec!(2);
pub const WEEKEND_VISITOR_SHARE_DEN: Decimal = dec!(3);

pub const GENERAL_CAFE_COGS_RATIO: Decimal = dec!(0.01);
pub const SQUARE_FEE_RATIO: Decimal = dec!(0.015);
pub const SUPERANNUATION_RATIO: Decimal = dec!(0.12);
pub const FARMSTAY_COST_RATIO: Decimal = dec!(0.20);

pub const RENT_FROM_SEPTEMBER: Decimal = dec!(12271);
pub const DIRECTOR_SALARY: Decimal = dec!(9167);
pub const OTHER_WAGES_AFTER_RESTRUCTURE: Decimal = dec!(15000);
pub const MEDIA_DOWNPAYMENT: Decimal = dec!(10000);
pub const MONTHLY_SOLAR_SAVINGS: Decimal = dec!(1500);
pub const FIRST_MONTH_UTILITIES: Decimal = dec!(2923);
pub const UTILITIES_BASELINE: Decimal = dec!(4500);
pub const BANK_FEES_BASE: Decimal = dec!(200);
pub const BANK_FEES_STEP: Decimal = dec!(15);
pub const WEDDING_SALES_EXPENSE_FY2526: Decimal = dec!(2167);
pub const WEDDING_SALES_EXPENSE_FY2627: Decimal = dec!(3333);
/// Wedding sales expense starts once the agent is engaged (Nov-25).
pub const WEDDING_SALES_EXPENSE_FROM: usize = 3;

/// Month offsets carrying the annual insurance and permit payments (Jul-26, Jul-27).
pub const ANNUAL_PAYMENT_MONTHS: [usize; 2] = [11, 23];

#[rustfmt::skip]
pub const WEDDING_REVENUE: [Decimal; HORIZON] = [
    dec!(0), dec!(0), dec!(0), dec!(7500), dec!(15000), dec!(15000),
    dec!(7500), dec!(15000), dec!(7500), dec!(7500), dec!(0), dec!(0),
    dec!(10000), dec!(20000), dec!(30000), dec!(30000), dec!(40000), dec!(30000),
    dec!(40000), dec!(30000), dec!(20000), dec!(10000), dec!(15000), dec!(20000),
];

#[rustfmt::skip]
pub const FARMSTAY_REVENUE: [Decimal; HORIZON] = [
    dec!(0), dec!(5000), dec!(5000), dec!(5000), dec!(5000), dec!(5000),
    dec!(5000), dec!(5000), dec!(10000), dec!(10000), dec!(10000), dec!(10000),
    dec!(10000), dec!(10000), dec!(10000), dec!(10000), dec!(10000), dec!(10000),
    dec!(10000), dec!(10000), dec!(10000), dec!(10000), dec!(10000), dec!(10000),
];

/// Food cost as a share of the cost base, stepping down with the move to tourism.
#[rustfmt::skip]
pub const FOOD_COST_RATIO: [Decimal; HORIZON] = [
    dec!(0.180), dec!(0.175), dec!(0.175), dec!(0.175), dec!(0.175), dec!(0.170),
    dec!(0.170), dec!(0.170), dec!(0.165), dec!(0.165), dec!(0.165), dec!(0.165),
    dec!(0.160), dec!(0.160), dec!(0.160), dec!(0.160), dec!(0.160), dec!(0.155),
    dec!(0.155), dec!(0.155), dec!(0.155), dec!(0.155), dec!(0.155), dec!(0.155),
];

const P: Season = Season::PeakTourism;
const D: Season = Season::TraditionalDining;
const T: Season = Season::Transition;

#[rustfmt::skip]
pub const SEASONS: [Season; HORIZON] = [
    D, P, P, P, P, P, P, T, D, D, D, D,
    D, P, P, P, P, P, P, T, D, D, D, D,
];

#[rustfmt::skip]
pub const TRAVEL_INTERNATIONAL: [Decimal; HORIZON] = [
    dec!(0), dec!(3000), dec!(2000), dec!(1000), dec!(3000), dec!(0),
    dec!(0), dec!(0), dec!(0), dec!(0), dec!(0), dec!(0),
    dec!(2000), dec!(2000), dec!(2000), dec!(2000), dec!(2000), dec!(2000),
    dec!(2000), dec!(2000), dec!(2000), dec!(2000), dec!(2000), dec!(2000),
];

/// Labour ratios applied to the cost base for a season.
#[derive(Debug, Clone, Copy)]
pub struct LabourRatios {
    pub kitchen_wages: Decimal,
    pub front_house_wages: Decimal,
}

impl Season {
    pub fn labour_ratios(&self) -> LabourRatios {
        match self {
            Season::PeakTourism => LabourRatios {
                kitchen_wages: dec!(0.075),
                front_house_wages: dec!(0.110),
            },
            Season::TraditionalDining => LabourRatios {
                kitchen_wages: dec!(0.080),
                front_house_wages: dec!(0.113),
            },
            Season::Transition => LabourRatios {
                kitchen_wages: dec!(0.077),
                front_house_wages: dec!(0.111),
            },
        }
    }

    /// Multiplier applied to the utilities baseline.
    pub fn utilities_factor(&self) -> Decimal {
        match self {
            Season::PeakTourism => dec!(1.067),
            Season::TraditionalDining => dec!(0.933),
            Season::Transition => Decimal::ONE,
        }
    }
}

fn first_forecast_month() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 8, 1).unwrap_or_default()
}

/// First day of the calendar month for forecast offset `index`.
pub fn month_start(index: usize) -> NaiveDate {
    let start = first_forecast_month();
    start
        .checked_add_months(Months::new(index as u32))
        .unwrap_or(start)
}

/// Column label for a forecast offset, e.g. `Aug-25`.
pub fn month_label(index: usize) -> String {
    month_start(index).format("%b-%y").to_string()
}

/// Calendar month number (1-12) for a forecast offset.
pub fn calendar_month(index: usize) -> u32 {
    month_start(index).month()
}
