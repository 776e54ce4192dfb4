// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Automatic image correction performed by the source (deskew, border
// detection, blank page discard, ...).

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{AutoSize, CapabilityValue, PixelType};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

/// ICAP_AUTODISCARDBLANKPAGES setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlankPageDiscard {
    /// Keep every page (TWBP_DISABLE).
    Disabled,
    /// Let the source decide what is blank (TWBP_AUTO).
    Auto,
    /// Discard pages whose compressed size is below this many bytes. Sent
    /// verbatim; the source judges values it cannot use.
    BelowBytes(i32),
}

impl BlankPageDiscard {
    pub fn wire(self) -> i32 {
        match self {
            Self::Disabled => -2,
            Self::Auto => -1,
            Self::BelowBytes(n) => n,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoAdjustOptions {
    enabled: bool,
    auto_bright: Option<bool>,
    auto_deskew: Option<bool>,
    auto_border_detection: Option<bool>,
    auto_rotate: Option<bool>,
    auto_length_detection: Option<bool>,
    auto_color: Option<bool>,
    auto_color_non_color_pixel_type: Option<PixelType>,
    auto_crop_uses_frame: Option<bool>,
    auto_size: Option<AutoSize>,
    discard_blank_pages: Option<BlankPageDiscard>,
}

impl AutoAdjustOptions {
    enable_switch!();

    scalar_accessors! {
        auto_bright, set_auto_bright: bool;
        auto_deskew, set_auto_deskew: bool;
        auto_border_detection, set_auto_border_detection: bool;
        auto_rotate, set_auto_rotate: bool;
        auto_length_detection, set_auto_length_detection: bool;
        /// Let the source pick colour or non-colour per page.
        auto_color, set_auto_color: bool;
        /// Pixel type used for pages detected as non-colour.
        auto_color_non_color_pixel_type, set_auto_color_non_color_pixel_type: PixelType;
        auto_crop_uses_frame, set_auto_crop_uses_frame: bool;
        auto_size, set_auto_size: AutoSize;
        discard_blank_pages, set_discard_blank_pages: BlankPageDiscard;
    }
}

impl OptionGroup for AutoAdjustOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::AutoAdjust
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.bool(ICAP_AUTOBRIGHT, self.auto_bright);
        out.bool(ICAP_AUTOMATICDESKEW, self.auto_deskew);
        out.bool(ICAP_AUTOMATICBORDERDETECTION, self.auto_border_detection);
        out.bool(ICAP_AUTOMATICROTATE, self.auto_rotate);
        out.bool(ICAP_AUTOMATICLENGTHDETECTION, self.auto_length_detection);
        out.bool(ICAP_AUTOMATICCOLORENABLED, self.auto_color);
        out.enumerated(
            ICAP_AUTOMATICCOLORNONCOLORPIXELTYPE,
            self.auto_color_non_color_pixel_type,
        );
        out.bool(ICAP_AUTOMATICCROPUSESFRAME, self.auto_crop_uses_frame);
        out.enumerated(ICAP_AUTOSIZE, self.auto_size);
        if let Some(discard) = self.discard_blank_pages {
            out.value(ICAP_AUTODISCARDBLANKPAGES, CapabilityValue::Int(discard.wire()));
        }
    }
}
