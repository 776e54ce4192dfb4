// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Audible alarm settings. This group has no on/off switch.

use serde::{Deserialize, Serialize};

use twainkit_core::Alarm;
use twainkit_core::capability::{CAP_ALARMS, CAP_ALARMVOLUME};

use crate::group::{Emitter, GroupKind, OptionGroup, enum_list_accessors, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudibleAlarmsOptions {
    alarms: Vec<Alarm>,
    volume: Option<i32>,
}

impl AudibleAlarmsOptions {
    enum_list_accessors! {
        /// Alarms the source should sound.
        alarms, set_alarms, add_alarm, alarms_as_int: Alarm;
    }

    scalar_accessors! {
        /// Volume, 0 (silent) to 100.
        volume, set_volume: i32;
    }
}

impl OptionGroup for AudibleAlarmsOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::AudibleAlarms
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enum_list(CAP_ALARMS, &self.alarms);
        out.int(CAP_ALARMVOLUME, self.volume);
    }
}
