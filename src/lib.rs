// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod api;
pub mod cli;
pub mod dashboard;
pub mod db;
pub mod models;
pub mod utils;
pub mod view;
pub mod commands;
