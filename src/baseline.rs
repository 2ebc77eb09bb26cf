// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! July 2025 actuals used as the anchor month, and the declared operating
//! expense categories with their default monthly amounts.

use crate::error::ForecastError;
use crate::models::Section;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Copy)]
pub struct BaselineLine {
    pub key: &'static str,
    pub section: Section,
    pub amount: Decimal,
}

const fn line(key: &'static str, section: Section, amount: Decimal) -> BaselineLine {
    BaselineLine {
        key,
        section,
        amount,
    }
}

use Section::{CostOfSales as C, OperatingExpenses as O, TradingIncome as R};

#[rustfmt::skip]
static JULY_2025: [BaselineLine; 39] = [
    line("parties_events", R, dec!(787.27)),
    line("restaurant_revenue", R, dec!(90.91)),
    line("square_card_surcharges", R, dec!(2286.12)),
    line("square_discounts", R, dec!(-5742.03)),
    line("square_sales", R, dec!(202175.34)),
    line("wedding", R, dec!(2375.00)),
    line("farmstay", R, dec!(0)),
    line("kitchen_wages", C, dec!(21645.90)),
    line("food_costs", C, dec!(36825.88)),
    line("general_cafe_cogs", C, dec!(1899.61)),
    line("accounting", O, dec!(1900.00)),
    line("advertising_promotion", O, dec!(833.63)),
    line("bank_fees", O, dec!(184.00)),
    line("employee_wages_others", O, dec!(20117.63)),
    line("front_house_wages", O, dec!(30352.18)),
    line("entertainment", O, dec!(300.00)),
    line("equestrian_food", O, dec!(1344.08)),
    line("equine_health_expenses", O, dec!(1000.00)),
    line("equipment_leasing", O, dec!(712.13)),
    line("general_cafe_expense", O, dec!(3636.55)),
    line("insurance", O, dec!(5488.19)),
    line("management_consultant", O, dec!(450.00)),
    line("marketing", O, dec!(9136.67)),
    line("motor_vehicle", O, dec!(55.33)),
    line("office_supplies", O, dec!(9523.26)),
    line("property_permits", O, dec!(2565.80)),
    line("rent_expense", O, dec!(12271.43)),
    line("repairs_maintenance", O, dec!(8779.60)),
    line("rubbish_removal", O, dec!(60.00)),
    line("shipping_postage", O, dec!(11.70)),
    line("square_fees", O, dec!(3067.29)),
    line("subscriptions", O, dec!(3214.22)),
    line("superannuation", O, dec!(8058.82)),
    line("telephone_internet", O, dec!(208.18)),
    line("travel_international", O, dec!(2680.83)),
    line("travel_national", O, dec!(176.13)),
    line("utilities", O, dec!(3923.32)),
    line("director_salary", O, dec!(0)),
    line("farmstay_costs", O, dec!(0)),
];

/// The proven July 2025 month every projection is anchored to.
#[derive(Debug, Clone)]
pub struct Baseline {
    lines: Vec<BaselineLine>,
}

impl Baseline {
    pub fn july_2025() -> Self {
        Self::from_lines(JULY_2025.to_vec())
    }

    pub fn from_lines(lines: Vec<BaselineLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[BaselineLine] {
        &self.lines
    }

    pub fn amount(&self, key: &str) -> Decimal {
        self.lines
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.amount)
            .unwrap_or(Decimal::ZERO)
    }

    pub fn section(&self, section: Section) -> impl Iterator<Item = &BaselineLine> {
        self.lines.iter().filter(move |l| l.section == section)
    }

    pub fn section_total(&self, section: Section) -> Decimal {
        self.section(section).map(|l| l.amount).sum()
    }

    pub fn trading_income(&self) -> Decimal {
        self.section_total(Section::TradingIncome)
    }

    /// Trading income excluding weddings; the base that seasonality scales.
    pub fn tourism_income(&self) -> Decimal {
        self.trading_income() - self.amount("wedding")
    }
}

#[rustfmt::skip]
static STANDARD_DEFAULTS: Lazy<Vec<(&'static str, Decimal)>> = Lazy::new(|| vec![
    ("accounting", dec!(500)),
    ("administration_fees", dec!(0)),
    ("advertising_promotion", dec!(1500)),
    ("automobile_expense", dec!(0)),
    ("bank_fees", dec!(200)),
    ("business_gift_expense", dec!(0)),
    ("cleaning_expense", dec!(885)),
    ("design_printing", dec!(0)),
    ("director_salary", dec!(0)),
    ("employee_wages_others", dec!(15000)),
    ("front_house_wages", dec!(0)),
    ("entertainment", dec!(300)),
    ("equestrian_food", dec!(1500)),
    ("equine_health_expenses", dec!(1000)),
    ("equipment_leasing", dec!(712)),
    ("farmstay_costs", dec!(0)),
    ("general_business_research", dec!(0)),
    ("general_cafe_expense", dec!(3500)),
    ("insurance", dec!(0)),
    ("interest_expense", dec!(0)),
    ("legal", dec!(0)),
    ("management_consultant", dec!(450)),
    ("marketing", dec!(15000)),
    ("miscellaneous_expenses", dec!(0)),
    ("motor_vehicle", dec!(55)),
    ("non_equine_health", dec!(0)),
    ("office_expenses", dec!(355)),
    ("office_supplies", dec!(4000)),
    ("parking_ticket", dec!(0)),
    ("printing_stationery", dec!(0)),
    ("professional_services", dec!(2193)),
    ("property_permits", dec!(0)),
    ("realised_currency_gains", dec!(0)),
    ("refund", dec!(0)),
    ("reimbursement_clearing", dec!(0)),
    ("renovation_contractors", dec!(0)),
    ("rent_expense", dec!(0)),
    ("repairs_maintenance", dec!(9000)),
    ("retail_item_purchase", dec!(0)),
    ("rubbish_removal", dec!(60)),
    ("shipping_postage", dec!(11.7)),
    ("square_fees", dec!(0)),
    ("staff_meals_amenities", dec!(697)),
    ("staffing_contractors", dec!(0)),
    ("subscriptions", dec!(3214)),
    ("sundry_expenses", dec!(0)),
    ("superannuation", dec!(0)),
    ("telephone_internet", dec!(230)),
    ("training_development", dec!(0)),
    ("travel_international", dec!(2680.83)),
    ("travel_national", dec!(176.13)),
    ("travel_national_leasing", dec!(0)),
    ("travel_taxi", dec!(0)),
    ("utilities", dec!(0)),
    ("web_domain_hosting", dec!(0)),
    ("wedding_cost", dec!(0)),
    ("wedding_sales_expense", dec!(0)),
]);

/// Declared operating-expense categories and their default monthly amounts.
#[derive(Debug, Clone)]
pub struct ExpensePlan {
    categories: Vec<&'static str>,
    defaults: BTreeMap<&'static str, Decimal>,
}

impl ExpensePlan {
    /// Builds a plan, failing when categories and defaults disagree.
    pub fn new(
        categories: Vec<&'static str>,
        defaults: Vec<(&'static str, Decimal)>,
    ) -> Result<Self, ForecastError> {
        let mut declared = BTreeSet::new();
        for cat in &categories {
            if !declared.insert(*cat) {
                return Err(ForecastError::DuplicateCategory(cat.to_string()));
            }
        }
        let defaults: BTreeMap<_, _> = defaults.into_iter().collect();

        let missing: Vec<String> = categories
            .iter()
            .filter(|c| !defaults.contains_key(*c))
            .map(|c| c.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(ForecastError::MissingDefaults(missing));
        }

        let orphaned: Vec<String> = defaults
            .keys()
            .filter(|k| !declared.contains(*k))
            .map(|k| k.to_string())
            .collect();
        if !orphaned.is_empty() {
            return Err(ForecastError::OrphanedDefaults(orphaned));
        }

        Ok(Self {
            categories,
            defaults,
        })
    }

    pub fn standard() -> Result<Self, ForecastError> {
        let defaults = STANDARD_DEFAULTS.clone();
        let categories = defaults.iter().map(|(k, _)| *k).collect();
        Self::new(categories, defaults)
    }

    pub fn categories(&self) -> &[&'static str] {
        &self.categories
    }

    pub fn default_for(&self, category: &str) -> Option<Decimal> {
        self.defaults.get(category).copied()
    }

    /// A sheet seeded with every category at its default.
    pub fn sheet(&self) -> ExpenseSheet {
        ExpenseSheet {
            values: self.defaults.clone(),
        }
    }

    /// A sheet seeded with every category at zero.
    pub fn zeroed_sheet(&self) -> ExpenseSheet {
        ExpenseSheet {
            values: self
                .categories
                .iter()
                .map(|c| (*c, Decimal::ZERO))
                .collect(),
        }
    }
}

/// One month's operating expenses; only declared categories can be written.
#[derive(Debug, Clone)]
pub struct ExpenseSheet {
    values: BTreeMap<&'static str, Decimal>,
}

impl ExpenseSheet {
    pub fn set(&mut self, category: &str, amount: Decimal) -> Result<(), ForecastError> {
        match self.values.get_mut(category) {
            Some(slot) => {
                *slot = amount;
                Ok(())
            }
            None => Err(ForecastError::UndeclaredCategory(category.to_string())),
        }
    }

    pub fn get(&self, category: &str) -> Decimal {
        self.values.get(category).copied().unwrap_or(Decimal::ZERO)
    }

    pub fn into_lines(self) -> BTreeMap<&'static str, Decimal> {
        self.values
    }
}
