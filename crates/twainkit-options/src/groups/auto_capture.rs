// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Timed automatic capture (cameras and camera-like sources).

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{
    CAP_AUTOMATICCAPTURE, CAP_TIMEBEFOREFIRSTCAPTURE, CAP_TIMEBETWEENCAPTURES,
};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoCaptureOptions {
    enabled: bool,
    number_of_pictures: Option<i32>,
    time_before_first_capture: Option<i32>,
    time_between_captures: Option<i32>,
}

impl AutoCaptureOptions {
    enable_switch!();

    scalar_accessors! {
        /// Pictures to take automatically once acquisition starts.
        number_of_pictures, set_number_of_pictures: i32;
        /// Delay in milliseconds before the first picture.
        time_before_first_capture, set_time_before_first_capture: i32;
        /// Delay in milliseconds between pictures.
        time_between_captures, set_time_between_captures: i32;
    }
}

impl OptionGroup for AutoCaptureOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::AutoCapture
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.int(CAP_AUTOMATICCAPTURE, self.number_of_pictures);
        out.int(CAP_TIMEBEFOREFIRSTCAPTURE, self.time_before_first_capture);
        out.int(CAP_TIMEBETWEENCAPTURES, self.time_between_captures);
    }
}
