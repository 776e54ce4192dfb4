// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Transfer compression and JPEG parameters.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{Compression, JpegSubsampling, PixelType};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionOptions {
    enabled: bool,
    compression: Option<Compression>,
    jpeg_quality: Option<i32>,
    jpeg_pixel_type: Option<PixelType>,
    jpeg_subsampling: Option<JpegSubsampling>,
    ccitt_k_factor: Option<i32>,
}

impl CompressionOptions {
    enable_switch!();

    scalar_accessors! {
        compression, set_compression: Compression;
        /// 1..=100, or one of the TWJQ_* presets (negative values).
        jpeg_quality, set_jpeg_quality: i32;
        jpeg_pixel_type, set_jpeg_pixel_type: PixelType;
        jpeg_subsampling, set_jpeg_subsampling: JpegSubsampling;
        /// Lines between reference lines for CCITT Group 3 2D.
        ccitt_k_factor, set_ccitt_k_factor: i32;
    }
}

impl OptionGroup for CompressionOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Compression
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enumerated(ICAP_COMPRESSION, self.compression);
        out.int(ICAP_JPEGQUALITY, self.jpeg_quality);
        out.enumerated(ICAP_JPEGPIXELTYPE, self.jpeg_pixel_type);
        out.enumerated(ICAP_JPEGSUBSAMPLING, self.jpeg_subsampling);
        out.int(ICAP_CCITTKFACTOR, self.ccitt_k_factor);
    }
}
