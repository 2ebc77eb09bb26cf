// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Failures raised while assembling or running the forecast.
///
/// Only configuration inconsistencies are expected in practice; they are
/// surfaced at startup and treated as fatal by the binary.
#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Missing expense defaults for: {}", .0.join(", "))]
    MissingDefaults(Vec<String>),
    #[error("Expense defaults without a declared category: {}", .0.join(", "))]
    OrphanedDefaults(Vec<String>),
    #[error("Expense category '{0}' declared more than once")]
    DuplicateCategory(String),
    #[error("Expense category '{0}' is not declared")]
    UndeclaredCategory(String),
    #[error("Month index {0} is outside the 24-month forecast horizon")]
    OutOfHorizon(usize),
}
