// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::error::VanityNameRegistryError;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Uint128};
use std::fmt::{Display, Formatter};

/// Cumulative count of successful registrations.
pub type OrderNumber = u64;

/// Unix timestamp, in seconds.
pub type UnixTimestamp = u64;

/// Runtime configuration of the registry. Only the contract owner can change the price
/// and the lock duration. The denomination is fixed at instantiation.
#[cw_serde]
pub struct Config {
    /// Denomination of all payments and locked balances.
    pub denom: String,

    /// Amount (in `denom`) charged for every character of a registered name.
    pub price_per_char: Uint128,

    /// Number of seconds the payment of a new registration stays locked for.
    pub lock_duration: u64,
}

impl Config {
    pub fn price_per_char_coin(&self) -> Coin {
        Coin::new(self.price_per_char, &self.denom)
    }
}

/// Registration of a single name. Created once and never modified afterwards.
#[cw_serde]
pub struct NameRecord {
    /// Account that registered the name.
    pub owner: Addr,

    /// Escrowed amount: the price per character at registration time times the name length.
    pub locked_balance: Coin,

    /// Block time of registration plus the lock duration in effect at that moment.
    pub locked_until: UnixTimestamp,
}

/// Validated name accepted for registration.
///
/// Names are case-sensitive and stored exactly as provided. The only requirement is that
/// they are not empty.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VanityName(String);

impl VanityName {
    pub fn new(name: impl Into<String>) -> Result<Self, VanityNameRegistryError> {
        let name = name.into();
        if name.is_empty() {
            return Err(VanityNameRegistryError::InvalidName);
        }
        Ok(VanityName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the name used for pricing, counted in characters (unicode scalar values).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

impl Display for VanityName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
