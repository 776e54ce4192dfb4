// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Descriptive image information stored by the source.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{CAP_AUTHOR, CAP_CAPTION, ICAP_EXTIMAGEINFO};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors, string_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInformationOptions {
    enabled: bool,
    author: Option<String>,
    caption: Option<String>,
    extended_image_info: Option<bool>,
}

impl ImageInformationOptions {
    enable_switch!();

    string_accessors! {
        author, set_author;
        caption, set_caption;
    }

    scalar_accessors! {
        /// Ask the source to report extended image information per page.
        extended_image_info, set_extended_image_info: bool;
    }
}

impl OptionGroup for ImageInformationOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::ImageInformation
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.string(CAP_AUTHOR, self.author.as_deref());
        out.string(CAP_CAPTION, self.caption.as_deref());
        out.bool(ICAP_EXTIMAGEINFO, self.extended_image_info);
    }
}
