// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Option group contract, the static group registry, and the emitter that turns
// populated fields into negotiation instructions.
//
// A field that is `None` (or an empty list) never reaches the emitter output.

use serde::{Deserialize, Serialize};
use tracing::trace;

use twainkit_core::capability::*;
use twainkit_core::types::{WireEnum, wire_list};
use twainkit_core::{CapabilityId, CapabilityValue, Frame};

use crate::plan::{CapabilityInstruction, SessionKey, SessionSetting};

/// Identifies one of the option groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupKind {
    AudibleAlarms,
    AutoAdjust,
    AutoCapture,
    AutoScan,
    BarcodeDetection,
    Color,
    Compression,
    DeviceEvent,
    DeviceParams,
    DoubleFeed,
    FileTransfer,
    General,
    ImageInformation,
    ImageParameters,
    ImageType,
    Imprinter,
    JobControl,
    Language,
    Micr,
    Pages,
    PaperHandling,
    PatchCodeDetection,
    Pdf,
    PowerMonitor,
    Resolution,
    UserInterface,
}

/// Static description of a group: its display name and the capabilities it governs.
#[derive(Debug)]
pub struct GroupRegistration {
    pub kind: GroupKind,
    pub name: &'static str,
    pub caps: &'static [CapabilityId],
}

/// One entry per group, indexed by `GroupKind as usize`.
static REGISTRY: [GroupRegistration; 26] = [
    GroupRegistration {
        kind: GroupKind::AudibleAlarms,
        name: "audible-alarms",
        caps: &[CAP_ALARMS, CAP_ALARMVOLUME],
    },
    GroupRegistration {
        kind: GroupKind::AutoAdjust,
        name: "auto-adjust",
        caps: &[
            ICAP_AUTOBRIGHT,
            ICAP_AUTOMATICDESKEW,
            ICAP_AUTOMATICBORDERDETECTION,
            ICAP_AUTOMATICROTATE,
            ICAP_AUTOMATICLENGTHDETECTION,
            ICAP_AUTOMATICCOLORENABLED,
            ICAP_AUTOMATICCOLORNONCOLORPIXELTYPE,
            ICAP_AUTOMATICCROPUSESFRAME,
            ICAP_AUTOSIZE,
            ICAP_AUTODISCARDBLANKPAGES,
        ],
    },
    GroupRegistration {
        kind: GroupKind::AutoCapture,
        name: "auto-capture",
        caps: &[
            CAP_AUTOMATICCAPTURE,
            CAP_TIMEBEFOREFIRSTCAPTURE,
            CAP_TIMEBETWEENCAPTURES,
        ],
    },
    GroupRegistration {
        kind: GroupKind::AutoScan,
        name: "auto-scan",
        caps: &[CAP_AUTOSCAN, CAP_CLEARBUFFERS, CAP_MAXBATCHBUFFERS],
    },
    GroupRegistration {
        kind: GroupKind::BarcodeDetection,
        name: "barcode-detection",
        caps: &[
            ICAP_BARCODEDETECTIONENABLED,
            ICAP_SUPPORTEDBARCODETYPES,
            ICAP_BARCODEMAXSEARCHPRIORITIES,
            ICAP_BARCODESEARCHPRIORITIES,
            ICAP_BARCODESEARCHMODE,
            ICAP_BARCODEMAXRETRIES,
            ICAP_BARCODETIMEOUT,
        ],
    },
    GroupRegistration {
        kind: GroupKind::Color,
        name: "color",
        caps: &[
            ICAP_PIXELFLAVOR,
            ICAP_FILTER,
            ICAP_HALFTONES,
            ICAP_COLORMANAGEMENTENABLED,
            ICAP_ICCPROFILE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::Compression,
        name: "compression",
        caps: &[
            ICAP_COMPRESSION,
            ICAP_JPEGQUALITY,
            ICAP_JPEGPIXELTYPE,
            ICAP_JPEGSUBSAMPLING,
            ICAP_CCITTKFACTOR,
        ],
    },
    GroupRegistration {
        kind: GroupKind::DeviceEvent,
        name: "device-events",
        caps: &[CAP_DEVICEEVENT],
    },
    GroupRegistration {
        kind: GroupKind::DeviceParams,
        name: "device-params",
        caps: &[
            ICAP_EXPOSURETIME,
            ICAP_FLASHUSED2,
            ICAP_LAMPSTATE,
            ICAP_LIGHTPATH,
            ICAP_LIGHTSOURCE,
            ICAP_ZOOMFACTOR,
            ICAP_FILMTYPE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::DoubleFeed,
        name: "double-feed",
        caps: &[
            CAP_DOUBLEFEEDDETECTION,
            CAP_DOUBLEFEEDDETECTIONLENGTH,
            CAP_DOUBLEFEEDDETECTIONSENSITIVITY,
            CAP_DOUBLEFEEDDETECTIONRESPONSE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::FileTransfer,
        name: "file-transfer",
        caps: &[ICAP_XFERMECH, ICAP_IMAGEFILEFORMAT],
    },
    GroupRegistration {
        kind: GroupKind::General,
        name: "general",
        caps: &[CAP_XFERCOUNT, ICAP_UNITS],
    },
    GroupRegistration {
        kind: GroupKind::ImageInformation,
        name: "image-information",
        caps: &[CAP_AUTHOR, CAP_CAPTION, ICAP_EXTIMAGEINFO],
    },
    GroupRegistration {
        kind: GroupKind::ImageParameters,
        name: "image-parameters",
        caps: &[
            ICAP_BRIGHTNESS,
            ICAP_CONTRAST,
            ICAP_GAMMA,
            ICAP_HIGHLIGHT,
            ICAP_SHADOW,
            ICAP_THRESHOLD,
            ICAP_ROTATION,
            ICAP_XSCALING,
            ICAP_YSCALING,
            ICAP_ORIENTATION,
            ICAP_MIRROR,
            ICAP_FLIPROTATION,
            ICAP_NOISEFILTER,
            ICAP_OVERSCAN,
            ICAP_IMAGEFILTER,
        ],
    },
    GroupRegistration {
        kind: GroupKind::ImageType,
        name: "image-type",
        caps: &[
            ICAP_PIXELTYPE,
            ICAP_BITDEPTH,
            ICAP_BITDEPTHREDUCTION,
            ICAP_PLANARCHUNKY,
        ],
    },
    GroupRegistration {
        kind: GroupKind::Imprinter,
        name: "imprinter",
        caps: &[
            CAP_PRINTERENABLED,
            CAP_PRINTER,
            CAP_PRINTERMODE,
            CAP_PRINTERSTRING,
            CAP_PRINTERSUFFIX,
            CAP_PRINTERINDEX,
            CAP_PRINTERVERTICALOFFSET,
            CAP_PRINTERCHARROTATION,
        ],
    },
    GroupRegistration {
        kind: GroupKind::JobControl,
        name: "job-control",
        caps: &[CAP_JOBCONTROL],
    },
    GroupRegistration {
        kind: GroupKind::Language,
        name: "language",
        caps: &[CAP_LANGUAGE],
    },
    GroupRegistration {
        kind: GroupKind::Micr,
        name: "micr",
        caps: &[CAP_MICRENABLED],
    },
    GroupRegistration {
        kind: GroupKind::Pages,
        name: "pages",
        caps: &[
            ICAP_SUPPORTEDSIZES,
            ICAP_FRAMES,
            ICAP_MAXFRAMES,
            ICAP_UNDEFINEDIMAGESIZE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::PaperHandling,
        name: "paper-handling",
        caps: &[
            CAP_FEEDERENABLED,
            CAP_AUTOFEED,
            CAP_DUPLEXENABLED,
            CAP_FEEDERALIGNMENT,
            CAP_FEEDERORDER,
            CAP_FEEDERPREP,
            CAP_PAPERHANDLING,
            CAP_AUTOMATICSENSEMEDIUM,
            ICAP_FEEDERTYPE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::PatchCodeDetection,
        name: "patch-code-detection",
        caps: &[
            ICAP_PATCHCODEDETECTIONENABLED,
            ICAP_SUPPORTEDPATCHCODETYPES,
            ICAP_PATCHCODEMAXSEARCHPRIORITIES,
            ICAP_PATCHCODESEARCHPRIORITIES,
            ICAP_PATCHCODESEARCHMODE,
            ICAP_PATCHCODEMAXRETRIES,
            ICAP_PATCHCODETIMEOUT,
        ],
    },
    GroupRegistration {
        kind: GroupKind::Pdf,
        name: "pdf",
        caps: &[],
    },
    GroupRegistration {
        kind: GroupKind::PowerMonitor,
        name: "power-monitor",
        caps: &[
            CAP_POWERSAVETIME,
            CAP_POWERSUPPLY,
            CAP_BATTERYMINUTES,
            CAP_BATTERYPERCENTAGE,
        ],
    },
    GroupRegistration {
        kind: GroupKind::Resolution,
        name: "resolution",
        caps: &[ICAP_XRESOLUTION, ICAP_YRESOLUTION],
    },
    GroupRegistration {
        kind: GroupKind::UserInterface,
        name: "user-interface",
        caps: &[CAP_INDICATORS, CAP_INDICATORSMODE],
    },
];

impl GroupKind {
    /// Every group, in negotiation order.
    pub const ALL: [GroupKind; 26] = [
        GroupKind::AudibleAlarms,
        GroupKind::AutoAdjust,
        GroupKind::AutoCapture,
        GroupKind::AutoScan,
        GroupKind::BarcodeDetection,
        GroupKind::Color,
        GroupKind::Compression,
        GroupKind::DeviceEvent,
        GroupKind::DeviceParams,
        GroupKind::DoubleFeed,
        GroupKind::FileTransfer,
        GroupKind::General,
        GroupKind::ImageInformation,
        GroupKind::ImageParameters,
        GroupKind::ImageType,
        GroupKind::Imprinter,
        GroupKind::JobControl,
        GroupKind::Language,
        GroupKind::Micr,
        GroupKind::Pages,
        GroupKind::PaperHandling,
        GroupKind::PatchCodeDetection,
        GroupKind::Pdf,
        GroupKind::PowerMonitor,
        GroupKind::Resolution,
        GroupKind::UserInterface,
    ];

    pub fn registration(self) -> &'static GroupRegistration {
        &REGISTRY[self as usize]
    }

    pub fn name(self) -> &'static str {
        self.registration().name
    }

    /// Capabilities governed by this group. Same slice on every call.
    pub fn affected_caps(self) -> &'static [CapabilityId] {
        self.registration().caps
    }

    pub fn affects(self, cap: CapabilityId) -> bool {
        self.affected_caps().contains(&cap)
    }

    /// The group that governs `cap`, if any.
    pub fn owning(cap: CapabilityId) -> Option<GroupKind> {
        REGISTRY.iter().find(|r| r.caps.contains(&cap)).map(|r| r.kind)
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A bundle of related capability settings.
pub trait OptionGroup: std::fmt::Debug {
    fn kind(&self) -> GroupKind;

    /// Whether the group takes part in negotiation. Groups without an on/off
    /// switch always do.
    fn is_enabled(&self) -> bool;

    fn affected_caps(&self) -> &'static [CapabilityId] {
        self.kind().affected_caps()
    }

    /// Emit one instruction per field that holds a value. Only called for
    /// enabled groups.
    fn emit(&self, out: &mut Emitter<'_>);
}

/// Collects instructions for one group, dropping unset fields.
pub struct Emitter<'a> {
    kind: GroupKind,
    instructions: &'a mut Vec<CapabilityInstruction>,
    session: &'a mut Vec<SessionSetting>,
}

impl<'a> Emitter<'a> {
    pub(crate) fn new(
        kind: GroupKind,
        instructions: &'a mut Vec<CapabilityInstruction>,
        session: &'a mut Vec<SessionSetting>,
    ) -> Self {
        Self {
            kind,
            instructions,
            session,
        }
    }

    pub fn value(&mut self, cap: CapabilityId, value: CapabilityValue) {
        debug_assert!(
            self.kind.affects(cap),
            "{cap} emitted by {} which does not govern it",
            self.kind
        );
        trace!(group = %self.kind, cap = %cap, value = %value, "emit");
        self.instructions.push(CapabilityInstruction {
            group: self.kind,
            cap,
            value,
        });
    }

    pub fn bool(&mut self, cap: CapabilityId, value: Option<bool>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Bool(v));
        }
    }

    pub fn int(&mut self, cap: CapabilityId, value: Option<i32>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Int(v));
        }
    }

    pub fn float(&mut self, cap: CapabilityId, value: Option<f64>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Float(v));
        }
    }

    pub fn string(&mut self, cap: CapabilityId, value: Option<&str>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Str(v.to_owned()));
        }
    }

    pub fn enumerated<T: WireEnum>(&mut self, cap: CapabilityId, value: Option<T>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Int(v.wire()));
        }
    }

    pub fn enum_list<T: WireEnum>(&mut self, cap: CapabilityId, values: &[T]) {
        if !values.is_empty() {
            self.value(cap, CapabilityValue::IntList(wire_list(values)));
        }
    }

    pub fn string_list(&mut self, cap: CapabilityId, values: &[String]) {
        if !values.is_empty() {
            self.value(cap, CapabilityValue::StrList(values.to_vec()));
        }
    }

    pub fn frame(&mut self, cap: CapabilityId, value: Option<Frame>) {
        if let Some(v) = value {
            self.value(cap, CapabilityValue::Frame(v));
        }
    }

    /// Record a setting for the acquisition session rather than the device.
    pub fn session(&mut self, key: SessionKey, value: Option<CapabilityValue>) {
        if let Some(value) = value {
            if key.is_secret() {
                trace!(group = %self.kind, key = ?key, "emit session setting (redacted)");
            } else {
                trace!(group = %self.kind, key = ?key, value = %value, "emit session setting");
            }
            self.session.push(SessionSetting {
                group: self.kind,
                key,
                value,
            });
        }
    }
}

// ---------------------------------------------------------------------------
// Accessor generators shared by the group modules
// ---------------------------------------------------------------------------

/// `enable(bool)` / `is_enabled()` for groups with an on/off switch.
macro_rules! enable_switch {
    () => {
        /// Toggle participation in negotiation. Other fields are kept as-is.
        pub fn enable(&mut self, enabled: bool) -> &mut Self {
            self.enabled = enabled;
            self
        }

        pub fn is_enabled(&self) -> bool {
            self.enabled
        }
    };
}

/// Setter/getter pairs for `Option<T>` fields with `T: Copy`.
macro_rules! scalar_accessors {
    ($($(#[$meta:meta])* $field:ident, $setter:ident: $ty:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(&mut self, value: impl Into<Option<$ty>>) -> &mut Self {
                self.$field = value.into();
                self
            }

            pub fn $field(&self) -> Option<$ty> {
                self.$field
            }
        )*
    };
}

/// Setter/getter pairs for `Option<String>` fields.
macro_rules! string_accessors {
    ($($(#[$meta:meta])* $field:ident, $setter:ident;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(&mut self, value: impl Into<String>) -> &mut Self {
                self.$field = Some(value.into());
                self
            }

            pub fn $field(&self) -> Option<&str> {
                self.$field.as_deref()
            }
        )*
    };
}

/// Setter/adder/getter/wire conversion for `Vec<T>` fields of a `WireEnum`.
macro_rules! enum_list_accessors {
    ($($(#[$meta:meta])* $field:ident, $setter:ident, $adder:ident, $as_int:ident: $ty:ty;)*) => {
        $(
            $(#[$meta])*
            pub fn $setter(&mut self, values: impl IntoIterator<Item = $ty>) -> &mut Self {
                self.$field = values.into_iter().collect();
                self
            }

            pub fn $adder(&mut self, value: $ty) -> &mut Self {
                self.$field.push(value);
                self
            }

            pub fn $field(&self) -> &[$ty] {
                &self.$field
            }

            /// Wire integers for the list, in order.
            pub fn $as_int(&self) -> Vec<i32> {
                twainkit_core::types::wire_list(&self.$field)
            }
        )*
    };
}

pub(crate) use enable_switch;
pub(crate) use enum_list_accessors;
pub(crate) use scalar_accessors;
pub(crate) use string_accessors;
