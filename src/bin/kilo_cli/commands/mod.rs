// ABOUTME: Command modules for kilo-cli
// ABOUTME: One module per command group, each a thin layer over TrackerService
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod goals;
pub mod profile;
pub mod shopping;
pub mod stats;
pub mod workout;
