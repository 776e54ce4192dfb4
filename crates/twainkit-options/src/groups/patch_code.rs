// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Patch code (batch separator sheet) detection.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{PatchCode, SearchMode};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, enum_list_accessors, scalar_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatchCodeDetectionOptions {
    enabled: bool,
    search_priorities: Vec<PatchCode>,
    max_search_priorities: Option<i32>,
    search_mode: Option<SearchMode>,
    max_retries: Option<i32>,
    timeout: Option<i32>,
}

impl PatchCodeDetectionOptions {
    enable_switch!();

    enum_list_accessors! {
        search_priorities, set_search_priorities, add_search_priority, search_priorities_as_int: PatchCode;
    }

    scalar_accessors! {
        max_search_priorities, set_max_search_priorities: i32;
        search_mode, set_search_mode: SearchMode;
        max_retries, set_max_retries: i32;
        timeout, set_timeout: i32;
    }
}

impl OptionGroup for PatchCodeDetectionOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::PatchCodeDetection
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(ICAP_PATCHCODEDETECTIONENABLED, Some(true));
        out.enum_list(ICAP_PATCHCODESEARCHPRIORITIES, &self.search_priorities);
        out.int(ICAP_PATCHCODEMAXSEARCHPRIORITIES, self.max_search_priorities);
        out.enumerated(ICAP_PATCHCODESEARCHMODE, self.search_mode);
        out.int(ICAP_PATCHCODEMAXRETRIES, self.max_retries);
        out.int(ICAP_PATCHCODETIMEOUT, self.timeout);
    }
}
