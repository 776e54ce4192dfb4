// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Auto-scan: the source keeps feeding pages ahead of the application.

use serde::{Deserialize, Serialize};

use twainkit_core::ClearBuffers;
use twainkit_core::capability::{CAP_AUTOSCAN, CAP_CLEARBUFFERS, CAP_MAXBATCHBUFFERS};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScanOptions {
    enabled: bool,
    clear_buffers: Option<ClearBuffers>,
    max_batch_buffers: Option<i32>,
}

impl AutoScanOptions {
    enable_switch!();

    scalar_accessors! {
        clear_buffers, set_clear_buffers: ClearBuffers;
        max_batch_buffers, set_max_batch_buffers: i32;
    }
}

impl OptionGroup for AutoScanOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::AutoScan
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(CAP_AUTOSCAN, Some(true));
        out.enumerated(CAP_CLEARBUFFERS, self.clear_buffers);
        out.int(CAP_MAXBATCHBUFFERS, self.max_batch_buffers);
    }
}
