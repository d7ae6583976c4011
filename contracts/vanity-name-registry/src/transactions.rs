// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::helpers::{lock_expiry, required_deposit};
use crate::storage::VANITY_NAME_REGISTRY_STORAGE;
use cosmwasm_std::{Addr, BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128};
use vanity_name_registry_common::events::{
    new_lock_duration_changed_event, new_name_registered_event, new_price_per_char_changed_event,
};
use vanity_name_registry_common::{NameRecord, VanityName, VanityNameRegistryError};

pub fn try_set_price_per_char(
    deps: DepsMut<'_>,
    info: MessageInfo,
    price_per_char: Uint128,
) -> Result<Response, VanityNameRegistryError> {
    VANITY_NAME_REGISTRY_STORAGE.update_price_per_char(deps, &info.sender, price_per_char)?;

    Ok(Response::new().add_event(new_price_per_char_changed_event(price_per_char)))
}

pub fn try_set_lock_duration(
    deps: DepsMut<'_>,
    info: MessageInfo,
    lock_duration: u64,
) -> Result<Response, VanityNameRegistryError> {
    VANITY_NAME_REGISTRY_STORAGE.update_lock_duration(deps, &info.sender, lock_duration)?;

    Ok(Response::new().add_event(new_lock_duration_changed_event(lock_duration)))
}

/// Registers the name for the message sender. The required amount stays locked in the contract,
/// anything paid above it is sent back to the sender.
pub fn try_register(
    deps: DepsMut<'_>,
    env: Env,
    info: MessageInfo,
    name: String,
) -> Result<Response, VanityNameRegistryError> {
    let name = VanityName::new(name)?;
    VANITY_NAME_REGISTRY_STORAGE.ensure_name_available(deps.storage, &name)?;

    let config = VANITY_NAME_REGISTRY_STORAGE.config.load(deps.storage)?;
    let paid = cw_utils::may_pay(&info, &config.denom)
        .map_err(|source| VanityNameRegistryError::InvalidPayment { source })?;

    let required = required_deposit(&config, &name)?;
    if paid < required.amount {
        return Err(VanityNameRegistryError::InsufficientFunds {
            received: Coin::new(paid, &config.denom),
            required,
        });
    }

    let excess = paid - required.amount;

    let record = NameRecord {
        owner: info.sender,
        locked_balance: required,
        locked_until: lock_expiry(&env, config.lock_duration)?,
    };
    let order_number =
        VANITY_NAME_REGISTRY_STORAGE.insert_name_record(deps.storage, &name, &record)?;

    let mut response =
        Response::new().add_event(new_name_registered_event(&name, &record, order_number));
    if !excess.is_zero() {
        response = response.add_message(refund_excess(&record.owner, excess, &config.denom));
    }
    Ok(response)
}

fn refund_excess(sender: &Addr, excess: Uint128, denom: &str) -> BankMsg {
    BankMsg::Send {
        to_address: sender.to_string(),
        amount: vec![Coin::new(excess, denom)],
    }
}
