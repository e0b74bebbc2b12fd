// Copyright 2025 the Airspace Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Store errors.

use alloc::string::String;

/// Why a store operation was refused. The store is unchanged in every case.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The admission check refused the record.
    #[error("record rejected by admission")]
    Rejected,
    /// The record has no name.
    #[error("record has no name")]
    MissingName,
    /// Another record already uses this name.
    #[error("name already in use: {0}")]
    DuplicateName(String),
    /// A range bound is blank or the bounds are out of order.
    #[error("invalid name range: {low:?} to {high:?}")]
    InvalidRange {
        /// Lower bound as given.
        low: String,
        /// Upper bound as given.
        high: String,
    },
}
