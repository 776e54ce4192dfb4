// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Source user interface and progress indicators. No on/off switch.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{CAP_INDICATORS, CAP_INDICATORSMODE};
use twainkit_core::{CapabilityValue, IndicatorsMode};

use crate::group::{Emitter, GroupKind, OptionGroup, enum_list_accessors, scalar_accessors};
use crate::plan::SessionKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserInterfaceOptions {
    show_ui: Option<bool>,
    show_ui_only: Option<bool>,
    show_indicators: Option<bool>,
    indicator_modes: Vec<IndicatorsMode>,
}

impl UserInterfaceOptions {
    scalar_accessors! {
        /// Show the source's own dialog when acquiring.
        show_ui, set_show_ui: bool;
        /// Open the dialog for settings only, without acquiring.
        show_ui_only, set_show_ui_only: bool;
        /// Show progress indicators while the UI is hidden.
        show_indicators, set_show_indicators: bool;
    }

    enum_list_accessors! {
        indicator_modes, set_indicator_modes, add_indicator_mode, indicator_modes_as_int: IndicatorsMode;
    }
}

impl OptionGroup for UserInterfaceOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::UserInterface
    }

    fn is_enabled(&self) -> bool {
        true
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(CAP_INDICATORS, self.show_indicators);
        out.enum_list(CAP_INDICATORSMODE, &self.indicator_modes);
        out.session(SessionKey::ShowUi, self.show_ui.map(CapabilityValue::Bool));
        out.session(
            SessionKey::ShowUiOnly,
            self.show_ui_only.map(CapabilityValue::Bool),
        );
    }
}
