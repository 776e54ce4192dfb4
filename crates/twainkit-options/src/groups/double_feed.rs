// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Double-feed (multi-sheet pick) detection and response.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{DoubleFeedDetection, DoubleFeedResponse, DoubleFeedSensitivity};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, enum_list_accessors, scalar_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DoubleFeedOptions {
    enabled: bool,
    detection: Vec<DoubleFeedDetection>,
    length: Option<f64>,
    sensitivity: Option<DoubleFeedSensitivity>,
    responses: Vec<DoubleFeedResponse>,
}

impl DoubleFeedOptions {
    enable_switch!();

    enum_list_accessors! {
        /// Detection methods to arm.
        detection, set_detection, add_detection, detection_as_int: DoubleFeedDetection;
        /// What the source does when a double feed is detected.
        responses, set_responses, add_response, responses_as_int: DoubleFeedResponse;
    }

    scalar_accessors! {
        /// Minimum page length difference, in current units, for by-length detection.
        length, set_length: f64;
        sensitivity, set_sensitivity: DoubleFeedSensitivity;
    }
}

impl OptionGroup for DoubleFeedOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::DoubleFeed
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enum_list(CAP_DOUBLEFEEDDETECTION, &self.detection);
        out.float(CAP_DOUBLEFEEDDETECTIONLENGTH, self.length);
        out.enumerated(CAP_DOUBLEFEEDDETECTIONSENSITIVITY, self.sensitivity);
        out.enum_list(CAP_DOUBLEFEEDDETECTIONRESPONSE, &self.responses);
    }
}
