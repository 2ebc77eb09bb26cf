// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod actuals;
pub mod baseline;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod models;
pub mod narrative;
pub mod schedules;
pub mod seasonal;
pub mod utils;
