// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Barcode detection performed by the source during acquisition.
//
// Enabling the group sends ICAP_BARCODEDETECTIONENABLED = TRUE followed by
// whichever search parameters were set. Disabling it sends nothing, so the
// source keeps its own detection setting.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{BarcodeType, SearchMode};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, enum_list_accessors, scalar_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarcodeDetectionOptions {
    enabled: bool,
    search_priorities: Vec<BarcodeType>,
    max_search_priorities: Option<i32>,
    search_mode: Option<SearchMode>,
    max_retries: Option<i32>,
    timeout: Option<i32>,
}

impl BarcodeDetectionOptions {
    enable_switch!();

    enum_list_accessors! {
        /// Symbologies to look for, most important first.
        search_priorities, set_search_priorities, add_search_priority, search_priorities_as_int: BarcodeType;
    }

    scalar_accessors! {
        /// Upper bound on how many entries of the priority list are searched.
        max_search_priorities, set_max_search_priorities: i32;
        search_mode, set_search_mode: SearchMode;
        /// Retries per page before giving up on a barcode.
        max_retries, set_max_retries: i32;
        /// Per-page search timeout in milliseconds.
        timeout, set_timeout: i32;
    }
}

impl OptionGroup for BarcodeDetectionOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::BarcodeDetection
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(ICAP_BARCODEDETECTIONENABLED, Some(true));
        out.enum_list(ICAP_BARCODESEARCHPRIORITIES, &self.search_priorities);
        out.int(ICAP_BARCODEMAXSEARCHPRIORITIES, self.max_search_priorities);
        out.enumerated(ICAP_BARCODESEARCHMODE, self.search_mode);
        out.int(ICAP_BARCODEMAXRETRIES, self.max_retries);
        out.int(ICAP_BARCODETIMEOUT, self.timeout);
    }
}
