// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tonal and geometric image parameters.
//
// Every numeric field is `Option<f64>`, so extreme legitimate values (for
// example `f64::MIN_POSITIVE` or `-1000.0` brightness) are never mistaken for
// "unset".

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{FlipRotation, ImageFilter, Mirror, NoiseFilter, Orientation, Overscan};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageParameterOptions {
    enabled: bool,
    brightness: Option<f64>,
    contrast: Option<f64>,
    gamma: Option<f64>,
    highlight: Option<f64>,
    shadow: Option<f64>,
    threshold: Option<f64>,
    rotation: Option<f64>,
    x_scaling: Option<f64>,
    y_scaling: Option<f64>,
    orientation: Option<Orientation>,
    mirror: Option<Mirror>,
    flip_rotation: Option<FlipRotation>,
    noise_filter: Option<NoiseFilter>,
    overscan: Option<Overscan>,
    image_filter: Option<ImageFilter>,
}

impl ImageParameterOptions {
    enable_switch!();

    scalar_accessors! {
        /// -1000.0 (darkest) to 1000.0 (brightest).
        brightness, set_brightness: f64;
        /// -1000.0 to 1000.0.
        contrast, set_contrast: f64;
        gamma, set_gamma: f64;
        /// 0.0 to 255.0.
        highlight, set_highlight: f64;
        /// 0.0 to 255.0.
        shadow, set_shadow: f64;
        /// Cut-off for black/white images, 0.0 to 255.0.
        threshold, set_threshold: f64;
        /// Degrees, applied by the source after scanning.
        rotation, set_rotation: f64;
        x_scaling, set_x_scaling: f64;
        y_scaling, set_y_scaling: f64;
        orientation, set_orientation: Orientation;
        mirror, set_mirror: Mirror;
        flip_rotation, set_flip_rotation: FlipRotation;
        noise_filter, set_noise_filter: NoiseFilter;
        overscan, set_overscan: Overscan;
        image_filter, set_image_filter: ImageFilter;
    }

    /// Set both scaling factors at once.
    pub fn set_scaling(&mut self, factor: f64) -> &mut Self {
        self.x_scaling = Some(factor);
        self.y_scaling = Some(factor);
        self
    }
}

impl OptionGroup for ImageParameterOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::ImageParameters
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.float(ICAP_BRIGHTNESS, self.brightness);
        out.float(ICAP_CONTRAST, self.contrast);
        out.float(ICAP_GAMMA, self.gamma);
        out.float(ICAP_HIGHLIGHT, self.highlight);
        out.float(ICAP_SHADOW, self.shadow);
        out.float(ICAP_THRESHOLD, self.threshold);
        out.float(ICAP_ROTATION, self.rotation);
        out.float(ICAP_XSCALING, self.x_scaling);
        out.float(ICAP_YSCALING, self.y_scaling);
        out.enumerated(ICAP_ORIENTATION, self.orientation);
        out.enumerated(ICAP_MIRROR, self.mirror);
        out.enumerated(ICAP_FLIPROTATION, self.flip_rotation);
        out.enumerated(ICAP_NOISEFILTER, self.noise_filter);
        out.enumerated(ICAP_OVERSCAN, self.overscan);
        out.enumerated(ICAP_IMAGEFILTER, self.image_filter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extreme_values_are_kept() {
        let mut opts = ImageParameterOptions::default();
        opts.set_brightness(f64::MIN_POSITIVE).set_contrast(f64::MAX);
        assert_eq!(opts.brightness(), Some(f64::MIN_POSITIVE));
        assert_eq!(opts.contrast(), Some(f64::MAX));
        assert_eq!(opts.gamma(), None);
    }

    #[test]
    fn scaling_sets_both_axes() {
        let mut opts = ImageParameterOptions::default();
        opts.set_scaling(0.5);
        assert_eq!(opts.x_scaling(), Some(0.5));
        assert_eq!(opts.y_scaling(), Some(0.5));
    }
}
