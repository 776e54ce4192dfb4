// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use serde::{Deserialize, Serialize};

use twainkit_core::Language;
use twainkit_core::capability::CAP_LANGUAGE;

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

/// Language of the source's own user interface and messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageOptions {
    enabled: bool,
    language: Option<Language>,
}

impl LanguageOptions {
    enable_switch!();

    scalar_accessors! {
        language, set_language: Language;
    }
}

impl OptionGroup for LanguageOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Language
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enumerated(CAP_LANGUAGE, self.language);
    }
}
