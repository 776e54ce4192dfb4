// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Imprinter / endorser: text printed on each sheet as it passes the feeder.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{Printer, PrinterMode};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors, string_accessors,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImprinterOptions {
    enabled: bool,
    printer: Option<Printer>,
    mode: Option<PrinterMode>,
    strings: Vec<String>,
    suffix: Option<String>,
    index: Option<i32>,
    vertical_offset: Option<f64>,
    char_rotation: Option<i32>,
}

impl ImprinterOptions {
    enable_switch!();

    scalar_accessors! {
        /// Which imprinter or endorser to drive.
        printer, set_printer: Printer;
        mode, set_mode: PrinterMode;
        /// Starting value of the page counter.
        index, set_index: i32;
        vertical_offset, set_vertical_offset: f64;
        /// Character rotation in degrees (0, 90, 180, 270).
        char_rotation, set_char_rotation: i32;
    }

    string_accessors! {
        /// Text appended after the counter in compound mode.
        suffix, set_suffix;
    }

    pub fn set_strings<S: Into<String>>(
        &mut self,
        strings: impl IntoIterator<Item = S>,
    ) -> &mut Self {
        self.strings = strings.into_iter().map(Into::into).collect();
        self
    }

    pub fn add_string(&mut self, s: impl Into<String>) -> &mut Self {
        self.strings.push(s.into());
        self
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }
}

impl OptionGroup for ImprinterOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Imprinter
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        // CAP_PRINTER selects the device the remaining values apply to.
        out.enumerated(CAP_PRINTER, self.printer);
        out.bool(CAP_PRINTERENABLED, Some(true));
        out.enumerated(CAP_PRINTERMODE, self.mode);
        out.string_list(CAP_PRINTERSTRING, &self.strings);
        out.string(CAP_PRINTERSUFFIX, self.suffix.as_deref());
        out.int(CAP_PRINTERINDEX, self.index);
        out.float(CAP_PRINTERVERTICALOFFSET, self.vertical_offset);
        out.int(CAP_PRINTERCHARROTATION, self.char_rotation);
    }
}
