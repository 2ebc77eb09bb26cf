// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Chart of accounts: the ordered report rows and the display name to
//! internal key mapping used to place forecast figures.

use crate::models::Section;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Heading(Section),
    Line {
        section: Section,
        key: Option<&'static str>,
    },
    Total(Section),
    GrossProfit,
    GrossMargin,
    NetProfit,
}

#[derive(Debug, Clone, Copy)]
pub struct AccountDef {
    pub name: &'static str,
    pub kind: RowKind,
}

const fn heading(name: &'static str, section: Section) -> AccountDef {
    AccountDef {
        name,
        kind: RowKind::Heading(section),
    }
}

const fn line(name: &'static str, section: Section, key: &'static str) -> AccountDef {
    AccountDef {
        name,
        kind: RowKind::Line {
            section,
            key: Some(key),
        },
    }
}

const fn unmapped(name: &'static str, section: Section) -> AccountDef {
    AccountDef {
        name,
        kind: RowKind::Line { section, key: None },
    }
}

const fn total(name: &'static str, section: Section) -> AccountDef {
    AccountDef {
        name,
        kind: RowKind::Total(section),
    }
}

const fn derived(name: &'static str, kind: RowKind) -> AccountDef {
    AccountDef { name, kind }
}

use Section::{CostOfSales as C, OperatingExpenses as O, OtherIncome as X, TradingIncome as R};

#[rustfmt::skip]
pub static CHART: [AccountDef; 85] = [
    heading("Trading Income", R),
    line("Parties and Events", R, "parties_events"),
    line("Restaurant Revenue", R, "restaurant_revenue"),
    line("Sales - Equestrian Party Booking", R, "equestrian_party_booking"),
    line("Sales - Leasing", R, "leasing"),
    line("Sales - STR", R, "str"),
    line("Special Event", R, "special_event"),
    line("Square Card Surcharges", R, "square_card_surcharges"),
    line("Square Discounts", R, "square_discounts"),
    line("Square Other Income", R, "square_other_income"),
    line("Square Sales", R, "square_sales"),
    line("Venue Hire", R, "venue_hire"),
    line("Wedding", R, "wedding"),
    line("Farm Stay", R, "farmstay"),
    total("Total Trading Income", R),
    heading("Cost of Sales", C),
    line("COGS - Back of house (Kitchen wages)", C, "kitchen_wages"),
    line("COGS - Food Costs", C, "food_costs"),
    line("COGS - General Cafe Expense", C, "general_cafe_cogs"),
    total("Total Cost of Sales", C),
    derived("Gross Profit", RowKind::GrossProfit),
    derived("Gross Profit Percentages", RowKind::GrossMargin),
    heading("Other Income", X),
    unmapped("Refund - From Vendor or Others", X),
    total("Total Other Income", X),
    heading("Operating Expenses", O),
    line("Accounting", O, "accounting"),
    line("Administration Fees", O, "administration_fees"),
    line("Advertising and Promotion", O, "advertising_promotion"),
    line("Automobile Expense", O, "automobile_expense"),
    line("Bank Fees", O, "bank_fees"),
    line("Business gift expense", O, "business_gift_expense"),
    line("Cleaning Expense", O, "cleaning_expense"),
    line("Design and Printing", O, "design_printing"),
    line("Director Salary", O, "director_salary"),
    line("Employee Wages - Others", O, "employee_wages_others"),
    line("Employee Wages- Front of house", O, "front_house_wages"),
    line("Entertainment", O, "entertainment"),
    line("Equestrian Food Expense", O, "equestrian_food"),
    line("Equine Health", O, "equine_health_expenses"),
    line("Equipment - Leasing", O, "equipment_leasing"),
    line("Farm Stay Costs", O, "farmstay_costs"),
    line("General Business Research", O, "general_business_research"),
    line("General Cafe Expense", O, "general_cafe_expense"),
    line("Insurance Payment", O, "insurance"),
    line("Interest Expense", O, "interest_expense"),
    line("Legal", O, "legal"),
    line("Management Consultant", O, "management_consultant"),
    line("Marketing Expense", O, "marketing"),
    line("Miscellaneous Expenses", O, "miscellaneous_expenses"),
    line("Motor Vehicle & Fuel", O, "motor_vehicle"),
    line("Non Equine Health", O, "non_equine_health"),
    line("Office Expenses", O, "office_expenses"),
    line("Office Supplies", O, "office_supplies"),
    line("Parking Ticket", O, "parking_ticket"),
    line("Printing and Stationery", O, "printing_stationery"),
    line("Professional Services Expense", O, "professional_services"),
    line("Property License and Permits", O, "property_permits"),
    line("Realised Currency Gains", O, "realised_currency_gains"),
    line("Refund", O, "refund"),
    line("Reimbursement Clearing", O, "reimbursement_clearing"),
    line("Renovation Contractors", O, "renovation_contractors"),
    line("Rent Expense", O, "rent_expense"),
    line("Repairs & Maintenance", O, "repairs_maintenance"),
    line("Retail Item Purchase", O, "retail_item_purchase"),
    line("Rubbish Removal and waste Disposal", O, "rubbish_removal"),
    line("Shipping and Postage", O, "shipping_postage"),
    line("Square Fees", O, "square_fees"),
    line("Staff Meals & Amenities", O, "staff_meals_amenities"),
    line("Staffing Contractors", O, "staffing_contractors"),
    line("Subscriptions & Memberships", O, "subscriptions"),
    line("Sundry Expenses", O, "sundry_expenses"),
    line("Superannuation", O, "superannuation"),
    line("Telephone & Internet", O, "telephone_internet"),
    line("Training & Professional Development", O, "training_development"),
    line("Travel - International", O, "travel_international"),
    line("Travel - National", O, "travel_national"),
    line("Travel - National - Leasing", O, "travel_national_leasing"),
    line("Travel - Taxi", O, "travel_taxi"),
    line("Utilities", O, "utilities"),
    line("Web Domain, Hosting & Associated", O, "web_domain_hosting"),
    line("Wedding cost", O, "wedding_cost"),
    line("Wedding Sales Expense", O, "wedding_sales_expense"),
    total("Total Operating Expenses", O),
    derived("Net Profit", RowKind::NetProfit),
];

/// Director explanations attached to the last column of the report.
#[rustfmt::skip]
pub static EXPLANATIONS: [(&str, &str); 16] = [
    ("Trading Income", "July 2025 baseline used as transformation stabilised (4th month into transform to tourism) performance point, not full FY25"),
    ("Wedding", "Wedding business uses external agent instead of in-house manager"),
    ("Square Sales", "Tourism operations now a much larger revenue stream via experience-led model"),
    ("COGS - Food Costs", "Food costs reduced from 35% to 20% via tourism transformation"),
    ("Director Salary", "Commences Sep 2025: director replaces Operations Manager"),
    ("Employee Wages - Others", "Reduced Sep 2025: wedding manager replaced by wedding contractor"),
    ("Employee Wages- Front of house", "Permanent staff conversion eliminates 25% casual loading"),
    ("Marketing Expense", "Restructured: Institute of Design partnership converting to equity"),
    ("Rent Expense", "Resumes Sep 2025 after rental holiday period"),
    ("Utilities", "Solar panels reduce costs by $18k annually from Jul 2025"),
    ("Wedding Sales Expense", "External contractor replaces wedding manager: $26k FY25/26, $40k FY26/27"),
    ("Superannuation", "12% of all wages per new Australian rule July 2025 (excluding marketing personnel)"),
    ("Renovation Contractors", "All major renovation work completed by July 2025"),
    ("Staffing Contractors", "Replaced by permanent staff structure and casual employees"),
    ("Travel - International", "Strategic travel schedule: Aug=0, Sep-Dec=3000/2000/1000/3000, rest of FY25/26=0, FY26/27=2000/month"),
    ("Total Operating Expenses", "Strategic restructuring: workforce changes, marketing equity conversion, energy efficiency"),
];

/// Display name of the line row carrying `key` in `section`.
pub fn display_name(section: Section, key: &str) -> Option<&'static str> {
    CHART.iter().find_map(|def| match def.kind {
        RowKind::Line {
            section: s,
            key: Some(k),
        } if s == section && k == key => Some(def.name),
        _ => None,
    })
}

/// Name of the total row for a section.
pub fn total_name(section: Section) -> &'static str {
    CHART
        .iter()
        .find(|def| def.kind == RowKind::Total(section))
        .map(|def| def.name)
        .unwrap_or("")
}
