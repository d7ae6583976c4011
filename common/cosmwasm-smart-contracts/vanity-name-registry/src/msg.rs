// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint128;

#[cfg(feature = "schema")]
use crate::response::{
    LockDurationResponse, NameRecordResponse, OrderNumberResponse, PagedNameRecordsResponse,
    PricePerCharResponse,
};

#[cw_serde]
pub struct InstantiateMsg {
    /// Denomination accepted for registration payments.
    pub denom: String,
    pub price_per_char: Uint128,
    /// Lock duration, in seconds.
    pub lock_duration: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Change the price charged per character of a newly registered name. Owner only.
    SetPricePerChar { price_per_char: Uint128 },

    /// Change the lock duration applied to new registrations. Owner only.
    SetLockDuration { lock_duration: u64 },

    /// Register a new name. The attached funds must cover `price_per_char * len(name)`.
    Register { name: String },
}

#[cw_serde]
#[cfg_attr(feature = "schema", derive(cosmwasm_schema::QueryResponses))]
pub enum QueryMsg {
    /// Returns the current price per character. Only answered for the owner.
    #[cfg_attr(feature = "schema", returns(PricePerCharResponse))]
    PricePerChar { caller: String },

    /// Returns the current lock duration. Only answered for the owner.
    #[cfg_attr(feature = "schema", returns(LockDurationResponse))]
    LockDuration { caller: String },

    /// Returns the number of registrations made so far.
    #[cfg_attr(feature = "schema", returns(OrderNumberResponse))]
    OrderNumber {},

    #[cfg_attr(feature = "schema", returns(cw_controllers::AdminResponse))]
    Owner {},

    /// Returns the registration record of the given name, if any.
    #[cfg_attr(feature = "schema", returns(NameRecordResponse))]
    NameRecord { name: String },

    /// Returns (paged) registration records, ordered by name.
    #[cfg_attr(feature = "schema", returns(PagedNameRecordsResponse))]
    NameRecordsPaged {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {
    //
}
