// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Colour handling: pixel flavour, colour filters, halftoning, colour management.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{FilterType, IccProfile, PixelFlavor};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, enum_list_accessors, scalar_accessors,
    string_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    enabled: bool,
    pixel_flavor: Option<PixelFlavor>,
    filters: Vec<FilterType>,
    halftone: Option<String>,
    color_management: Option<bool>,
    icc_profile: Option<IccProfile>,
}

impl ColorOptions {
    enable_switch!();

    scalar_accessors! {
        /// Whether zero means black (chocolate) or white (vanilla).
        pixel_flavor, set_pixel_flavor: PixelFlavor;
        color_management, set_color_management: bool;
        icc_profile, set_icc_profile: IccProfile;
    }

    enum_list_accessors! {
        filters, set_filters, add_filter, filters_as_int: FilterType;
    }

    string_accessors! {
        /// Name of one of the source's halftone patterns.
        halftone, set_halftone;
    }
}

impl OptionGroup for ColorOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Color
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enumerated(ICAP_PIXELFLAVOR, self.pixel_flavor);
        out.enum_list(ICAP_FILTER, &self.filters);
        out.string(ICAP_HALFTONES, self.halftone.as_deref());
        out.bool(ICAP_COLORMANAGEMENTENABLED, self.color_management);
        out.enumerated(ICAP_ICCPROFILE, self.icc_profile);
    }
}
