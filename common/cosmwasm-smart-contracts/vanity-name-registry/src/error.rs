// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Addr, Coin, OverflowError, StdError};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum VanityNameRegistryError {
    #[error(transparent)]
    StdErr(#[from] StdError),

    #[error(transparent)]
    Overflow(#[from] OverflowError),

    #[error("caller {sender} is not the owner of this registry")]
    Unauthorized { sender: Addr },

    #[error("name '{name}' is already registered")]
    NameAlreadyRegistered { name: String },

    #[error("insufficient funds to register the name: received {received}, required {required}")]
    InsufficientFunds { received: Coin, required: Coin },

    #[error("invalid registration payment: {source}")]
    InvalidPayment { source: PaymentError },

    #[error("the name must not be empty")]
    InvalidName,

    #[error("lock expiry overflows: block time {block_time} + lock duration {lock_duration}")]
    LockExpiryOverflow { block_time: u64, lock_duration: u64 },
}
