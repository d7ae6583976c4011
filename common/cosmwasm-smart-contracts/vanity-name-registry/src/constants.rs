// Copyright 2025 - Nym Technologies SA <contact@nymtech.net>
// SPDX-License-Identifier: Apache-2.0

pub mod storage_keys {
    pub const CONTRACT_OWNER: &str = "contract-owner";
    pub const CONFIG: &str = "config";
    pub const ORDER_NUMBER: &str = "order-number";
    pub const NAME_RECORDS: &str = "name-records";
}
