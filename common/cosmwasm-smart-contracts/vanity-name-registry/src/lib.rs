// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod error;
pub mod events;
pub mod msg;
pub mod response;
pub mod types;

pub use error::VanityNameRegistryError;
pub use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
pub use response::*;
pub use types::*;
