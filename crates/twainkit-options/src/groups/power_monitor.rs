// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Power management. Battery and power-supply capabilities are read-only and
// only listed as governed by this group; the power-save timeout is settable.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::CAP_POWERSAVETIME;

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerMonitorOptions {
    enabled: bool,
    power_save_time: Option<i32>,
}

impl PowerMonitorOptions {
    enable_switch!();

    scalar_accessors! {
        /// Minutes of inactivity before power saving, -1 to disable.
        power_save_time, set_power_save_time: i32;
    }
}

impl OptionGroup for PowerMonitorOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::PowerMonitor
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.int(CAP_POWERSAVETIME, self.power_save_time);
    }
}
