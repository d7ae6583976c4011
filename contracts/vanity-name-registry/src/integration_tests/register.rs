// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

use super::test_setup::{contract_events, TestSetup, INITIAL_BALANCE, USER1, USER2};
use crate::testing::{registration_price, INITIAL_LOCK_DURATION, TEST_DENOM};
use cosmwasm_std::{coin, Uint128};
use vanity_name_registry_common::events::{
    must_find_attribute, LOCKED_BALANCE_KEY, LOCKED_UNTIL_KEY, NAME_KEY, ORDER_NUMBER_KEY,
    OWNER_KEY,
};
use vanity_name_registry_common::{NameRecord, VanityNameRegistryError};

// 0.01 of a full token
const PAYMENT: u128 = 10_000_000_000_000_000;

#[test]
fn user_can_register_name_with_balance_locked() {
    let mut setup = TestSetup::new();
    let user = setup.addr(USER1);
    setup.advance_time(1234);

    let locked_balance = registration_price("Apple");
    assert_eq!(locked_balance.amount, Uint128::new(500_000_000_000_000));

    let res = setup.try_register(&user, "Apple", PAYMENT).unwrap();
    let registered_at = setup.block_time();

    let events = contract_events(&res, "name_registered");
    assert_eq!(events.len(), 1);
    let event = events[0];
    assert_eq!(must_find_attribute(event, OWNER_KEY), user.to_string());
    assert_eq!(must_find_attribute(event, NAME_KEY), "Apple");
    assert_eq!(
        must_find_attribute(event, LOCKED_BALANCE_KEY),
        locked_balance.amount.to_string()
    );
    assert_eq!(
        must_find_attribute(event, LOCKED_UNTIL_KEY),
        (registered_at + INITIAL_LOCK_DURATION).to_string()
    );
    assert_eq!(must_find_attribute(event, ORDER_NUMBER_KEY), "1");

    // only the locked balance leaves the account, the excess is refunded
    assert_eq!(
        setup.balance(&user),
        coin(INITIAL_BALANCE - locked_balance.amount.u128(), TEST_DENOM)
    );
    assert_eq!(setup.contract_balance(), locked_balance);

    let record = setup.query_name_record("Apple").record.unwrap();
    assert_eq!(
        record,
        NameRecord {
            owner: user,
            locked_balance,
            locked_until: registered_at + INITIAL_LOCK_DURATION,
        }
    );
    assert_eq!(setup.query_order_number(), 1);
}

#[test]
fn user_cannot_register_name_with_insufficient_funds() {
    let mut setup = TestSetup::new();
    let user = setup.addr(USER1);

    // 0.0001 of a full token, i.e. the price of a single character
    let err = setup
        .try_register(&user, "Apple", 100_000_000_000_000)
        .unwrap_err();
    assert_eq!(
        err.downcast::<VanityNameRegistryError>().unwrap(),
        VanityNameRegistryError::InsufficientFunds {
            received: coin(100_000_000_000_000, TEST_DENOM),
            required: registration_price("Apple"),
        }
    );

    // nothing has changed, including the balances
    assert!(setup.query_name_record("Apple").record.is_none());
    assert_eq!(setup.query_order_number(), 0);
    assert_eq!(setup.balance(&user), coin(INITIAL_BALANCE, TEST_DENOM));
    assert!(setup.contract_balance().amount.is_zero());
}

#[test]
fn user_cannot_register_existing_name() {
    let mut setup = TestSetup::new();
    let user = setup.addr(USER1);

    let res = setup.try_register(&user, "Apple", PAYMENT).unwrap();
    assert_eq!(contract_events(&res, "name_registered").len(), 1);
    let original = setup.query_name_record("Apple").record.unwrap();

    let err = setup.try_register(&user, "Apple", PAYMENT).unwrap_err();
    assert_eq!(
        err.downcast::<VanityNameRegistryError>().unwrap(),
        VanityNameRegistryError::NameAlreadyRegistered {
            name: "Apple".to_string()
        }
    );

    assert_eq!(setup.query_name_record("Apple").record.unwrap(), original);
    assert_eq!(setup.query_order_number(), 1);
    assert_eq!(
        setup.balance(&user),
        coin(
            INITIAL_BALANCE - registration_price("Apple").amount.u128(),
            TEST_DENOM
        )
    );
}

#[test]
fn another_user_cannot_register_existing_name() {
    let mut setup = TestSetup::new();
    let user1 = setup.addr(USER1);
    let user2 = setup.addr(USER2);

    setup.try_register(&user1, "Apple", PAYMENT).unwrap();

    let err = setup.try_register(&user2, "Apple", PAYMENT).unwrap_err();
    assert_eq!(
        err.downcast::<VanityNameRegistryError>().unwrap(),
        VanityNameRegistryError::NameAlreadyRegistered {
            name: "Apple".to_string()
        }
    );

    assert_eq!(
        setup.query_name_record("Apple").record.unwrap().owner,
        user1
    );
    assert_eq!(setup.query_order_number(), 1);
    assert_eq!(setup.balance(&user2), coin(INITIAL_BALANCE, TEST_DENOM));
}

#[test]
fn user_can_register_multiple_names() {
    let mut setup = TestSetup::new();
    let user = setup.addr(USER1);

    for name in ["Apple", "Amazon"] {
        let res = setup.try_register(&user, name, PAYMENT).unwrap();
        let events = contract_events(&res, "name_registered");
        assert_eq!(events.len(), 1);
        assert_eq!(must_find_attribute(events[0], OWNER_KEY), user.to_string());
        assert_eq!(must_find_attribute(events[0], NAME_KEY), name);
    }

    assert_eq!(setup.query_order_number(), 2);
    let locked = registration_price("Apple").amount + registration_price("Amazon").amount;
    assert_eq!(setup.contract_balance().amount, locked);
    assert_eq!(
        setup.balance(&user).amount,
        Uint128::new(INITIAL_BALANCE) - locked
    );
}

#[test]
fn exact_payment_is_locked_without_refund() {
    let mut setup = TestSetup::new();
    let user = setup.addr(USER1);
    let price = registration_price("Apple");

    setup
        .try_register(&user, "Apple", price.amount.u128())
        .unwrap();

    assert_eq!(
        setup.balance(&user),
        coin(INITIAL_BALANCE - price.amount.u128(), TEST_DENOM)
    );
    assert_eq!(setup.contract_balance(), price);
}

#[test]
fn registrations_use_configuration_in_effect_at_the_time() {
    let mut setup = TestSetup::new();
    let owner = setup.owner();
    let user1 = setup.addr(USER1);
    let user2 = setup.addr(USER2);

    setup.try_register(&user1, "Apple", PAYMENT).unwrap();
    let apple = setup.query_name_record("Apple").record.unwrap();

    setup
        .try_set_price_per_char(&owner, 200_000_000_000_000)
        .unwrap();
    setup.try_set_lock_duration(&owner, 7200).unwrap();
    setup.advance_time(600);

    setup.try_register(&user2, "Google", PAYMENT).unwrap();
    let google = setup.query_name_record("Google").record.unwrap();

    assert_eq!(setup.query_name_record("Apple").record.unwrap(), apple);
    assert_eq!(
        google.locked_balance,
        coin(1_200_000_000_000_000, TEST_DENOM)
    );
    assert_eq!(google.locked_until, setup.block_time() + 7200);
}
