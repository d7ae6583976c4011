// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use crate::{NameRecord, OrderNumber, VanityName};
use cosmwasm_std::{Event, Uint128};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub enum VanityNameRegistryEventType {
    PricePerCharChanged,
    LockDurationChanged,
    NameRegistered,
}

impl From<VanityNameRegistryEventType> for String {
    fn from(typ: VanityNameRegistryEventType) -> Self {
        typ.to_string()
    }
}

impl Display for VanityNameRegistryEventType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let typ = match self {
            VanityNameRegistryEventType::PricePerCharChanged => "price_per_char_changed",
            VanityNameRegistryEventType::LockDurationChanged => "lock_duration_changed",
            VanityNameRegistryEventType::NameRegistered => "name_registered",
        };
        f.write_str(typ)
    }
}

// config changes
pub const PRICE_PER_CHAR_KEY: &str = "price_per_char";
pub const LOCK_DURATION_KEY: &str = "lock_duration";

// registration
pub const OWNER_KEY: &str = "owner";
pub const NAME_KEY: &str = "name";
pub const LOCKED_BALANCE_KEY: &str = "locked_balance";
pub const LOCKED_UNTIL_KEY: &str = "locked_until";
pub const ORDER_NUMBER_KEY: &str = "order_number";
pub const DENOM_KEY: &str = "denom";

pub fn new_price_per_char_changed_event(price_per_char: Uint128) -> Event {
    Event::new(VanityNameRegistryEventType::PricePerCharChanged)
        .add_attribute(PRICE_PER_CHAR_KEY, price_per_char.to_string())
}

pub fn new_lock_duration_changed_event(lock_duration: u64) -> Event {
    Event::new(VanityNameRegistryEventType::LockDurationChanged)
        .add_attribute(LOCK_DURATION_KEY, lock_duration.to_string())
}

pub fn new_name_registered_event(
    name: &VanityName,
    record: &NameRecord,
    order_number: OrderNumber,
) -> Event {
    Event::new(VanityNameRegistryEventType::NameRegistered)
        .add_attribute(OWNER_KEY, record.owner.as_str())
        .add_attribute(NAME_KEY, name.as_str())
        .add_attribute(LOCKED_BALANCE_KEY, record.locked_balance.amount.to_string())
        .add_attribute(DENOM_KEY, &record.locked_balance.denom)
        .add_attribute(LOCKED_UNTIL_KEY, record.locked_until.to_string())
        .add_attribute(ORDER_NUMBER_KEY, order_number.to_string())
}

/// Looks up value of particular attribute in the provided event. Returns None if it does not exist.
pub fn may_find_attribute(event: &Event, key: &str) -> Option<String> {
    event
        .attributes
        .iter()
        .find(|attr| attr.key == key)
        .map(|attr| attr.value.clone())
}

/// Looks up value of particular attribute in the provided event. If it fails to find it,
/// the function panics.
pub fn must_find_attribute(event: &Event, key: &str) -> String {
    // the whole point of this function is to panic on missing attribute
    #[allow(clippy::panic)]
    may_find_attribute(event, key)
        .unwrap_or_else(|| panic!("attribute '{key}' is missing from '{}' event", event.ty))
}

/// Finds the first event of the given type and attempts to parse the value of its attribute.
pub fn try_find_attribute<T, E>(
    events: &[Event],
    event_type: &str,
    key: &str,
) -> Option<Result<T, E>>
where
    T: FromStr<Err = E>,
{
    let event = events.iter().find(|event| event.ty == event_type)?;
    may_find_attribute(event, key).map(|value| value.parse())
}
