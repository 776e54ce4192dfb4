// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TWAIN capability identifiers (CAP_* / ICAP_*) and their symbolic names.
//
// Values follow the TWAIN 2.x `twain.h` numbering. Only the capabilities the
// option groups govern are listed.

use serde::{Deserialize, Serialize};

/// A native TWAIN capability identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilityId(pub u16);

impl CapabilityId {
    /// Raw identifier as sent to the data source.
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Symbolic name from `twain.h`, if this id is one twainkit knows about.
    pub fn name(self) -> Option<&'static str> {
        CAPABILITY_NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }

    /// Look up an id by its symbolic name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        CAPABILITY_NAMES
            .iter()
            .find(|(_, n)| n.eq_ignore_ascii_case(name))
            .map(|(id, _)| *id)
    }
}

impl std::fmt::Display for CapabilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "0x{:04X}", self.0),
        }
    }
}

macro_rules! capabilities {
    ($($name:ident = $value:expr),* $(,)?) => {
        $(
            pub const $name: CapabilityId = CapabilityId($value);
        )*

        /// Every known capability paired with its `twain.h` name.
        pub const CAPABILITY_NAMES: &[(CapabilityId, &str)] = &[
            $(($name, stringify!($name)),)*
        ];
    };
}

capabilities! {
    CAP_XFERCOUNT = 0x0001,
    ICAP_COMPRESSION = 0x0100,
    ICAP_PIXELTYPE = 0x0101,
    ICAP_UNITS = 0x0102,
    ICAP_XFERMECH = 0x0103,

    CAP_AUTHOR = 0x1000,
    CAP_CAPTION = 0x1001,
    CAP_FEEDERENABLED = 0x1002,
    CAP_AUTOFEED = 0x1007,
    CAP_INDICATORS = 0x100B,
    CAP_AUTOSCAN = 0x1010,
    CAP_DUPLEXENABLED = 0x1013,
    CAP_JOBCONTROL = 0x1017,
    CAP_ALARMS = 0x1018,
    CAP_ALARMVOLUME = 0x1019,
    CAP_AUTOMATICCAPTURE = 0x101A,
    CAP_TIMEBEFOREFIRSTCAPTURE = 0x101B,
    CAP_TIMEBETWEENCAPTURES = 0x101C,
    CAP_CLEARBUFFERS = 0x101D,
    CAP_MAXBATCHBUFFERS = 0x101E,
    CAP_POWERSUPPLY = 0x1020,
    CAP_DEVICEEVENT = 0x1022,
    CAP_PRINTER = 0x1026,
    CAP_PRINTERENABLED = 0x1027,
    CAP_PRINTERINDEX = 0x1028,
    CAP_PRINTERMODE = 0x1029,
    CAP_PRINTERSTRING = 0x102A,
    CAP_PRINTERSUFFIX = 0x102B,
    CAP_LANGUAGE = 0x102C,
    CAP_FEEDERALIGNMENT = 0x102D,
    CAP_FEEDERORDER = 0x102E,
    CAP_BATTERYMINUTES = 0x1032,
    CAP_BATTERYPERCENTAGE = 0x1033,
    CAP_MICRENABLED = 0x1038,
    CAP_FEEDERPREP = 0x1039,
    CAP_AUTOMATICSENSEMEDIUM = 0x103B,
    CAP_DOUBLEFEEDDETECTION = 0x103F,
    CAP_DOUBLEFEEDDETECTIONLENGTH = 0x1040,
    CAP_DOUBLEFEEDDETECTIONSENSITIVITY = 0x1041,
    CAP_DOUBLEFEEDDETECTIONRESPONSE = 0x1042,
    CAP_PAPERHANDLING = 0x1043,
    CAP_INDICATORSMODE = 0x1044,
    CAP_PRINTERVERTICALOFFSET = 0x1045,
    CAP_POWERSAVETIME = 0x1046,
    CAP_PRINTERCHARROTATION = 0x1047,

    ICAP_AUTOBRIGHT = 0x1100,
    ICAP_BRIGHTNESS = 0x1101,
    ICAP_CONTRAST = 0x1103,
    ICAP_EXPOSURETIME = 0x1105,
    ICAP_FILTER = 0x1106,
    ICAP_GAMMA = 0x1108,
    ICAP_HALFTONES = 0x1109,
    ICAP_HIGHLIGHT = 0x110A,
    ICAP_IMAGEFILEFORMAT = 0x110C,
    ICAP_LAMPSTATE = 0x110D,
    ICAP_LIGHTSOURCE = 0x110E,
    ICAP_ORIENTATION = 0x1110,
    ICAP_SHADOW = 0x1113,
    ICAP_FRAMES = 0x1114,
    ICAP_XRESOLUTION = 0x1118,
    ICAP_YRESOLUTION = 0x1119,
    ICAP_MAXFRAMES = 0x111A,
    ICAP_CCITTKFACTOR = 0x111D,
    ICAP_LIGHTPATH = 0x111E,
    ICAP_PIXELFLAVOR = 0x111F,
    ICAP_PLANARCHUNKY = 0x1120,
    ICAP_ROTATION = 0x1121,
    ICAP_SUPPORTEDSIZES = 0x1122,
    ICAP_THRESHOLD = 0x1123,
    ICAP_XSCALING = 0x1124,
    ICAP_YSCALING = 0x1125,
    ICAP_JPEGPIXELTYPE = 0x1128,
    ICAP_BITDEPTH = 0x112B,
    ICAP_BITDEPTHREDUCTION = 0x112C,
    ICAP_UNDEFINEDIMAGESIZE = 0x112D,
    ICAP_EXTIMAGEINFO = 0x112F,
    ICAP_AUTODISCARDBLANKPAGES = 0x1134,
    ICAP_FLIPROTATION = 0x1136,
    ICAP_BARCODEDETECTIONENABLED = 0x1137,
    ICAP_SUPPORTEDBARCODETYPES = 0x1138,
    ICAP_BARCODEMAXSEARCHPRIORITIES = 0x1139,
    ICAP_BARCODESEARCHPRIORITIES = 0x113A,
    ICAP_BARCODESEARCHMODE = 0x113B,
    ICAP_BARCODEMAXRETRIES = 0x113C,
    ICAP_BARCODETIMEOUT = 0x113D,
    ICAP_ZOOMFACTOR = 0x113E,
    ICAP_PATCHCODEDETECTIONENABLED = 0x113F,
    ICAP_SUPPORTEDPATCHCODETYPES = 0x1140,
    ICAP_PATCHCODEMAXSEARCHPRIORITIES = 0x1141,
    ICAP_PATCHCODESEARCHPRIORITIES = 0x1142,
    ICAP_PATCHCODESEARCHMODE = 0x1143,
    ICAP_PATCHCODEMAXRETRIES = 0x1144,
    ICAP_PATCHCODETIMEOUT = 0x1145,
    ICAP_FLASHUSED2 = 0x1146,
    ICAP_IMAGEFILTER = 0x1147,
    ICAP_NOISEFILTER = 0x1148,
    ICAP_OVERSCAN = 0x1149,
    ICAP_AUTOMATICBORDERDETECTION = 0x1150,
    ICAP_AUTOMATICDESKEW = 0x1151,
    ICAP_AUTOMATICROTATE = 0x1152,
    ICAP_JPEGQUALITY = 0x1153,
    ICAP_FEEDERTYPE = 0x1154,
    ICAP_ICCPROFILE = 0x1155,
    ICAP_AUTOSIZE = 0x1156,
    ICAP_AUTOMATICCROPUSESFRAME = 0x1157,
    ICAP_AUTOMATICLENGTHDETECTION = 0x1158,
    ICAP_AUTOMATICCOLORENABLED = 0x1159,
    ICAP_AUTOMATICCOLORNONCOLORPIXELTYPE = 0x115A,
    ICAP_COLORMANAGEMENTENABLED = 0x115B,
    ICAP_FILMTYPE = 0x115F,
    ICAP_MIRROR = 0x1160,
    ICAP_JPEGSUBSAMPLING = 0x1161,
}
