// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use serde::{Deserialize, Serialize};

use twainkit_core::capability::CAP_MICRENABLED;

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch};

/// Magnetic ink character recognition. Enabling the group is the only setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MicrOptions {
    enabled: bool,
}

impl MicrOptions {
    enable_switch!();
}

impl OptionGroup for MicrOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Micr
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(CAP_MICRENABLED, Some(true));
    }
}
