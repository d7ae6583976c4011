// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::storage::{retrieval_limits, VANITY_NAME_REGISTRY_STORAGE};
use cosmwasm_std::{Deps, Order, StdResult};
use cw_controllers::AdminResponse;
use cw_storage_plus::Bound;
use vanity_name_registry_common::{
    LockDurationResponse, NameEntry, NameRecordResponse, OrderNumberResponse,
    PagedNameRecordsResponse, PricePerCharResponse, VanityNameRegistryError,
};

pub fn query_price_per_char(
    deps: Deps,
    caller: String,
) -> Result<PricePerCharResponse, VanityNameRegistryError> {
    let caller = deps.api.addr_validate(&caller)?;
    VANITY_NAME_REGISTRY_STORAGE.ensure_owner(deps, &caller)?;

    let config = VANITY_NAME_REGISTRY_STORAGE.config.load(deps.storage)?;
    Ok(PricePerCharResponse {
        price_per_char: config.price_per_char,
        denom: config.denom,
    })
}

pub fn query_lock_duration(
    deps: Deps,
    caller: String,
) -> Result<LockDurationResponse, VanityNameRegistryError> {
    let caller = deps.api.addr_validate(&caller)?;
    VANITY_NAME_REGISTRY_STORAGE.ensure_owner(deps, &caller)?;

    let config = VANITY_NAME_REGISTRY_STORAGE.config.load(deps.storage)?;
    Ok(LockDurationResponse {
        lock_duration: config.lock_duration,
    })
}

pub fn query_order_number(deps: Deps) -> Result<OrderNumberResponse, VanityNameRegistryError> {
    Ok(OrderNumberResponse {
        order_number: VANITY_NAME_REGISTRY_STORAGE.order_number.load(deps.storage)?,
    })
}

pub fn query_owner(deps: Deps) -> Result<AdminResponse, VanityNameRegistryError> {
    VANITY_NAME_REGISTRY_STORAGE
        .contract_owner
        .query_admin(deps)
        .map_err(Into::into)
}

pub fn query_name_record(
    deps: Deps,
    name: String,
) -> Result<NameRecordResponse, VanityNameRegistryError> {
    let record = VANITY_NAME_REGISTRY_STORAGE
        .names
        .may_load(deps.storage, name.clone())?;
    Ok(NameRecordResponse { name, record })
}

pub fn query_name_records_paged(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> Result<PagedNameRecordsResponse, VanityNameRegistryError> {
    let limit = limit
        .unwrap_or(retrieval_limits::NAME_RECORDS_DEFAULT_LIMIT)
        .min(retrieval_limits::NAME_RECORDS_MAX_LIMIT) as usize;

    let start = start_after.map(Bound::exclusive);

    let records = VANITY_NAME_REGISTRY_STORAGE
        .names
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|res| res.map(|(name, record)| NameEntry { name, record }))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PagedNameRecordsResponse::new(records, limit))
}
