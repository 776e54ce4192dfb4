// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// twainkit core: capability ids, TWAIN enumerations, and errors shared across all crates.

pub mod capability;
pub mod config;
pub mod error;
pub mod types;
pub mod value;

pub use capability::CapabilityId;
pub use config::{NegotiationConfig, OutOfRangePolicy};
pub use error::{Result, TwainError};
pub use types::*;
pub use value::{CapabilityValue, Frame};
