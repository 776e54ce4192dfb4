// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page size and acquisition frame.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{
    ICAP_FRAMES, ICAP_MAXFRAMES, ICAP_SUPPORTEDSIZES, ICAP_UNDEFINEDIMAGESIZE,
};
use twainkit_core::{Frame, SupportedSize};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagesOptions {
    enabled: bool,
    supported_size: Option<SupportedSize>,
    frame: Option<Frame>,
    max_frames: Option<i32>,
    undefined_image_size: Option<bool>,
}

impl PagesOptions {
    enable_switch!();

    scalar_accessors! {
        /// Standard page size. Sources reset the frame when this changes.
        supported_size, set_supported_size: SupportedSize;
        /// Custom acquisition area in the current units.
        frame, set_frame: Frame;
        max_frames, set_max_frames: i32;
        /// Accept images whose length is only known after the scan.
        undefined_image_size, set_undefined_image_size: bool;
    }
}

impl OptionGroup for PagesOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Pages
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        // Size before frame: setting ICAP_SUPPORTEDSIZES overwrites ICAP_FRAMES.
        out.enumerated(ICAP_SUPPORTEDSIZES, self.supported_size);
        out.frame(ICAP_FRAMES, self.frame);
        out.int(ICAP_MAXFRAMES, self.max_frames);
        out.bool(ICAP_UNDEFINEDIMAGESIZE, self.undefined_image_size);
    }
}
