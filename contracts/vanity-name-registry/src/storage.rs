// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use cosmwasm_std::{Addr, Deps, DepsMut, Storage, Uint128};
use cw_controllers::Admin;
use cw_storage_plus::{Item, Map};
use vanity_name_registry_common::constants::storage_keys;
use vanity_name_registry_common::{
    Config, NameRecord, OrderNumber, VanityName, VanityNameRegistryError,
};

pub const VANITY_NAME_REGISTRY_STORAGE: VanityNameRegistryStorage =
    VanityNameRegistryStorage::new();

pub struct VanityNameRegistryStorage {
    pub(crate) contract_owner: Admin,
    pub(crate) config: Item<Config>,
    pub(crate) order_number: Item<OrderNumber>,
    pub(crate) names: Map<String, NameRecord>,
}

impl VanityNameRegistryStorage {
    #[allow(clippy::new_without_default)]
    pub const fn new() -> Self {
        VanityNameRegistryStorage {
            contract_owner: Admin::new(storage_keys::CONTRACT_OWNER),
            config: Item::new(storage_keys::CONFIG),
            order_number: Item::new(storage_keys::ORDER_NUMBER),
            names: Map::new(storage_keys::NAME_RECORDS),
        }
    }

    pub fn initialise(
        &self,
        mut deps: DepsMut,
        owner: Addr,
        config: Config,
    ) -> Result<(), VanityNameRegistryError> {
        self.contract_owner.set(deps.branch(), Some(owner))?;
        self.config.save(deps.storage, &config)?;
        self.order_number.save(deps.storage, &0)?;
        Ok(())
    }

    pub fn ensure_owner(&self, deps: Deps, addr: &Addr) -> Result<(), VanityNameRegistryError> {
        if !self.contract_owner.is_admin(deps, addr)? {
            return Err(VanityNameRegistryError::Unauthorized {
                sender: addr.clone(),
            });
        }
        Ok(())
    }

    pub fn ensure_name_available(
        &self,
        storage: &dyn Storage,
        name: &VanityName,
    ) -> Result<(), VanityNameRegistryError> {
        if self.names.has(storage, name.to_string()) {
            return Err(VanityNameRegistryError::NameAlreadyRegistered {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    pub fn update_price_per_char(
        &self,
        deps: DepsMut,
        sender: &Addr,
        price_per_char: Uint128,
    ) -> Result<(), VanityNameRegistryError> {
        self.ensure_owner(deps.as_ref(), sender)?;

        self.config
            .update(deps.storage, |mut config| -> Result<_, VanityNameRegistryError> {
                config.price_per_char = price_per_char;
                Ok(config)
            })?;
        Ok(())
    }

    pub fn update_lock_duration(
        &self,
        deps: DepsMut,
        sender: &Addr,
        lock_duration: u64,
    ) -> Result<(), VanityNameRegistryError> {
        self.ensure_owner(deps.as_ref(), sender)?;

        self.config
            .update(deps.storage, |mut config| -> Result<_, VanityNameRegistryError> {
                config.lock_duration = lock_duration;
                Ok(config)
            })?;
        Ok(())
    }

    /// Stores a new record and bumps the order number, returning its updated value.
    /// The name must have already been checked with [`Self::ensure_name_available`].
    pub fn insert_name_record(
        &self,
        storage: &mut dyn Storage,
        name: &VanityName,
        record: &NameRecord,
    ) -> Result<OrderNumber, VanityNameRegistryError> {
        self.names.save(storage, name.to_string(), record)?;

        let order_number = self.order_number.load(storage)? + 1;
        self.order_number.save(storage, &order_number)?;
        Ok(order_number)
    }
}

pub mod retrieval_limits {
    pub const NAME_RECORDS_DEFAULT_LIMIT: u32 = 50;
    pub const NAME_RECORDS_MAX_LIMIT: u32 = 100;
}
