// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::{NameRecord, OrderNumber};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cw_serde]
pub struct PricePerCharResponse {
    pub price_per_char: Uint128,
    pub denom: String,
}

#[cw_serde]
pub struct LockDurationResponse {
    pub lock_duration: u64,
}

#[cw_serde]
pub struct OrderNumberResponse {
    pub order_number: OrderNumber,
}

#[cw_serde]
pub struct NameRecordResponse {
    pub name: String,
    pub record: Option<NameRecord>,
}

#[cw_serde]
pub struct NameEntry {
    pub name: String,
    pub record: NameRecord,
}

#[cw_serde]
pub struct PagedNameRecordsResponse {
    pub records: Vec<NameEntry>,
    pub start_next_after: Option<String>,
}

impl PagedNameRecordsResponse {
    pub fn new(records: Vec<NameEntry>, limit: usize) -> Self {
        let start_next_after = if records.len() < limit {
            None
        } else {
            records.last().map(|entry| entry.name.clone())
        };
        PagedNameRecordsResponse {
            records,
            start_next_after,
        }
    }
}
