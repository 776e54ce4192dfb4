// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Pixel type and bit depth.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{
    ICAP_BITDEPTH, ICAP_BITDEPTHREDUCTION, ICAP_PIXELTYPE, ICAP_PLANARCHUNKY,
};
use twainkit_core::{BitDepthReduction, PixelType, PlanarChunky};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageTypeOptions {
    enabled: bool,
    pixel_type: Option<PixelType>,
    bit_depth: Option<i32>,
    bit_depth_reduction: Option<BitDepthReduction>,
    planar_chunky: Option<PlanarChunky>,
}

impl ImageTypeOptions {
    enable_switch!();

    scalar_accessors! {
        pixel_type, set_pixel_type: PixelType;
        /// Bits per pixel. Negotiated after the pixel type.
        bit_depth, set_bit_depth: i32;
        bit_depth_reduction, set_bit_depth_reduction: BitDepthReduction;
        planar_chunky, set_planar_chunky: PlanarChunky;
    }
}

impl OptionGroup for ImageTypeOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::ImageType
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        // Bit depth values are only meaningful for the current pixel type.
        out.enumerated(ICAP_PIXELTYPE, self.pixel_type);
        out.int(ICAP_BITDEPTH, self.bit_depth);
        out.enumerated(ICAP_BITDEPTHREDUCTION, self.bit_depth_reduction);
        out.enumerated(ICAP_PLANARCHUNKY, self.planar_chunky);
    }
}
