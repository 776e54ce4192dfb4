// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{ICAP_XRESOLUTION, ICAP_YRESOLUTION};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

/// Acquisition resolution, in dots per current unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionOptions {
    enabled: bool,
    x_resolution: Option<f64>,
    y_resolution: Option<f64>,
}

impl ResolutionOptions {
    enable_switch!();

    scalar_accessors! {
        x_resolution, set_x_resolution: f64;
        y_resolution, set_y_resolution: f64;
    }

    /// Same resolution on both axes.
    pub fn set_resolution(&mut self, dpi: f64) -> &mut Self {
        self.x_resolution = Some(dpi);
        self.y_resolution = Some(dpi);
        self
    }
}

impl OptionGroup for ResolutionOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Resolution
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.float(ICAP_XRESOLUTION, self.x_resolution);
        out.float(ICAP_YRESOLUTION, self.y_resolution);
    }
}
