// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Device events the application wants reported.

use serde::{Deserialize, Serialize};

use twainkit_core::DeviceEvent;
use twainkit_core::capability::CAP_DEVICEEVENT;

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, enum_list_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceEventOptions {
    enabled: bool,
    events: Vec<DeviceEvent>,
}

impl DeviceEventOptions {
    enable_switch!();

    enum_list_accessors! {
        events, set_events, add_event, events_as_int: DeviceEvent;
    }
}

impl OptionGroup for DeviceEventOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::DeviceEvent
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enum_list(CAP_DEVICEEVENT, &self.events);
    }
}
