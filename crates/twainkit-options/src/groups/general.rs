// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// General acquisition settings. Always takes part in negotiation.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{CAP_XFERCOUNT, ICAP_UNITS};
use twainkit_core::{CapabilityValue, Units};

use crate::group::{Emitter, GroupKind, OptionGroup, scalar_accessors};
use crate::plan::SessionKey;

/// Transfer count value meaning "all available pages".
pub const ALL_PAGES: i32 = -1;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralOptions {
    transfer_count: Option<i32>,
    units: Option<Units>,
    max_acquisitions: Option<i32>,
}

impl GeneralOptions {
    scalar_accessors! {
        /// Pages to transfer, or [`ALL_PAGES`].
        transfer_count, set_transfer_count: i32;
        /// Unit for every length-valued capability.
        units, set_units: Units;
        /// Acquisitions the session runs before closing the source.
        max_acquisitions, set_max_acquisitions: i32;
    }
}

impl OptionGroup for GeneralOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::General
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.int(CAP_XFERCOUNT, self.transfer_count);
        out.enumerated(ICAP_UNITS, self.units);
        out.session(
            SessionKey::MaxAcquisitions,
            self.max_acquisitions.map(CapabilityValue::Int),
        );
    }
}
