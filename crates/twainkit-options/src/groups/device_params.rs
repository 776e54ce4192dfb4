// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Physical device parameters: exposure, lighting, flash, zoom, film.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{FilmType, Flash, LightPath, LightSource};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceParamsOptions {
    enabled: bool,
    exposure_time: Option<f64>,
    flash: Option<Flash>,
    lamp_state: Option<bool>,
    light_path: Option<LightPath>,
    light_source: Option<LightSource>,
    zoom_factor: Option<i32>,
    film_type: Option<FilmType>,
}

impl DeviceParamsOptions {
    enable_switch!();

    scalar_accessors! {
        /// Exposure time in seconds.
        exposure_time, set_exposure_time: f64;
        flash, set_flash: Flash;
        /// Lamp on (`true`) or off.
        lamp_state, set_lamp_state: bool;
        light_path, set_light_path: LightPath;
        light_source, set_light_source: LightSource;
        zoom_factor, set_zoom_factor: i32;
        film_type, set_film_type: FilmType;
    }
}

impl OptionGroup for DeviceParamsOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::DeviceParams
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.float(ICAP_EXPOSURETIME, self.exposure_time);
        out.enumerated(ICAP_FLASHUSED2, self.flash);
        out.bool(ICAP_LAMPSTATE, self.lamp_state);
        out.enumerated(ICAP_LIGHTPATH, self.light_path);
        out.enumerated(ICAP_LIGHTSOURCE, self.light_source);
        out.int(ICAP_ZOOMFACTOR, self.zoom_factor);
        out.enumerated(ICAP_FILMTYPE, self.film_type);
    }
}
