// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::queries::{
    query_lock_duration, query_name_record, query_name_records_paged, query_order_number,
    query_owner, query_price_per_char,
};
use crate::storage::VANITY_NAME_REGISTRY_STORAGE;
use crate::transactions::{try_register, try_set_lock_duration, try_set_price_per_char};
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};
use vanity_name_registry_common::{
    Config, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, VanityNameRegistryError,
};

const CONTRACT_NAME: &str = "crate:vanity-name-registry-contract";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, VanityNameRegistryError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        denom: msg.denom,
        price_per_char: msg.price_per_char,
        lock_duration: msg.lock_duration,
    };
    VANITY_NAME_REGISTRY_STORAGE.initialise(deps, info.sender.clone(), config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, VanityNameRegistryError> {
    match msg {
        ExecuteMsg::SetPricePerChar { price_per_char } => {
            try_set_price_per_char(deps, info, price_per_char)
        }
        ExecuteMsg::SetLockDuration { lock_duration } => {
            try_set_lock_duration(deps, info, lock_duration)
        }
        ExecuteMsg::Register { name } => try_register(deps, env, info, name),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, VanityNameRegistryError> {
    match msg {
        QueryMsg::PricePerChar { caller } => {
            Ok(to_json_binary(&query_price_per_char(deps, caller)?)?)
        }
        QueryMsg::LockDuration { caller } => {
            Ok(to_json_binary(&query_lock_duration(deps, caller)?)?)
        }
        QueryMsg::OrderNumber {} => Ok(to_json_binary(&query_order_number(deps)?)?),
        QueryMsg::Owner {} => Ok(to_json_binary(&query_owner(deps)?)?),
        QueryMsg::NameRecord { name } => Ok(to_json_binary(&query_name_record(deps, name)?)?),
        QueryMsg::NameRecordsPaged { start_after, limit } => Ok(to_json_binary(
            &query_name_records_paged(deps, start_after, limit)?,
        )?),
    }
}

#[entry_point]
pub fn migrate(
    deps: DepsMut,
    _env: Env,
    _msg: MigrateMsg,
) -> Result<Response, VanityNameRegistryError> {
    cw2::ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Default::default())
}
