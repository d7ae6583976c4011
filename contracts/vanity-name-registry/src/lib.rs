// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

//! Registry selling unique names. The fee is proportional to the length of the name and
//! stays locked in the contract for a configurable duration. Pricing and lock duration are
//! controlled by the single owner fixed at instantiation.

pub mod contract;
pub mod storage;

mod helpers;
mod queries;
mod transactions;
