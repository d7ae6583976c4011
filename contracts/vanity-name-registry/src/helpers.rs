// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Coin, Env, Uint128};
use vanity_name_registry_common::{Config, UnixTimestamp, VanityName, VanityNameRegistryError};

/// Amount that has to be paid (and gets locked) for registering the provided name
/// under the given configuration.
pub(crate) fn required_deposit(
    config: &Config,
    name: &VanityName,
) -> Result<Coin, VanityNameRegistryError> {
    let chars = Uint128::new(name.char_len() as u128);
    let amount = config.price_per_char.checked_mul(chars)?;
    Ok(Coin::new(amount, &config.denom))
}

pub(crate) fn lock_expiry(
    env: &Env,
    lock_duration: u64,
) -> Result<UnixTimestamp, VanityNameRegistryError> {
    let block_time = env.block.time.seconds();
    block_time
        .checked_add(lock_duration)
        .ok_or(VanityNameRegistryError::LockExpiryOverflow {
            block_time,
            lock_duration,
        })
}
