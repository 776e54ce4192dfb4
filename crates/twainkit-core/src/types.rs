// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// TWAIN enumerations and their wire values.
//
// None of these enums has a "default" member. A field that should be left at
// the driver default is simply `None` (or an empty list) on the option group.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TwainError};

/// An enumeration with a fixed integer encoding on the wire.
pub trait WireEnum: Copy + Sized + 'static {
    /// Type name used in decoding errors.
    const KIND: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Integer value sent to the data source.
    fn wire(self) -> i32;

    /// Decode a value reported by the data source.
    fn from_wire(value: i32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.wire() == value)
            .ok_or(TwainError::UnknownWireValue {
                kind: Self::KIND,
                value,
            })
    }
}

/// Convert a list of enum members to their wire integers, preserving order.
pub fn wire_list<T: WireEnum>(items: &[T]) -> Vec<i32> {
    items.iter().map(|v| v.wire()).collect()
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)*
        }

        impl WireEnum for $name {
            const KIND: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant,)*];

            fn wire(self) -> i32 {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }
    };
}

/// Unique identifier for a negotiation plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlanId(pub Uuid);

impl PlanId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PlanId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for PlanId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

wire_enum! {
    /// CAP_ALARMS (TWAL_*).
    Alarm {
        General = 0,
        FeederError = 1,
        FeederWarning = 2,
        Barcode = 3,
        DoubleFeed = 4,
        Jam = 5,
        PatchCode = 6,
        Power = 7,
        Skew = 8,
    }
}

wire_enum! {
    /// ICAP_AUTOSIZE (TWAS_*).
    AutoSize {
        None = 0,
        Auto = 1,
        Current = 2,
    }
}

wire_enum! {
    /// CAP_CLEARBUFFERS (TWCB_*).
    ClearBuffers {
        Auto = 0,
        Clear = 1,
        NoClear = 2,
    }
}

wire_enum! {
    /// Barcode symbologies (TWBT_*).
    BarcodeType {
        ThreeOfNine = 0,
        TwoOfFiveInterleaved = 1,
        TwoOfFiveNonInterleaved = 2,
        Code93 = 3,
        Code128 = 4,
        Ucc128 = 5,
        Codabar = 6,
        Upca = 7,
        Upce = 8,
        Ean8 = 9,
        Ean13 = 10,
        PostNet = 11,
        Pdf417 = 12,
        TwoOfFiveIndustrial = 13,
        TwoOfFiveMatrix = 14,
        TwoOfFiveDataLogic = 15,
        TwoOfFiveIata = 16,
        ThreeOfNineFullAscii = 17,
        CodabarWithStartStop = 18,
        MaxiCode = 19,
        QrCode = 20,
    }
}

wire_enum! {
    /// Barcode / patch code search direction (TWBD_*).
    SearchMode {
        Horizontal = 0,
        Vertical = 1,
        HorizontalVertical = 2,
        VerticalHorizontal = 3,
    }
}

wire_enum! {
    /// Patch code types (TWPCH_*).
    PatchCode {
        Patch1 = 0,
        Patch2 = 1,
        Patch3 = 2,
        Patch4 = 3,
        Patch6 = 4,
        PatchT = 5,
    }
}

wire_enum! {
    /// ICAP_PIXELFLAVOR (TWPF_*).
    PixelFlavor {
        Chocolate = 0,
        Vanilla = 1,
    }
}

wire_enum! {
    /// ICAP_FILTER (TWFT_*).
    FilterType {
        Red = 0,
        Green = 1,
        Blue = 2,
        None = 3,
        White = 4,
        Cyan = 5,
        Magenta = 6,
        Yellow = 7,
        Black = 8,
    }
}

wire_enum! {
    /// ICAP_ICCPROFILE (TWIC_*).
    IccProfile {
        None = 0,
        Link = 1,
        Embed = 2,
    }
}

wire_enum! {
    /// ICAP_COMPRESSION (TWCP_*).
    Compression {
        None = 0,
        PackBits = 1,
        Group31D = 2,
        Group31DEol = 3,
        Group32D = 4,
        Group4 = 5,
        Jpeg = 6,
        Lzw = 7,
        Jbig = 8,
        Png = 9,
        Rle4 = 10,
        Rle8 = 11,
        BitFields = 12,
        Zip = 13,
        Jpeg2000 = 14,
    }
}

wire_enum! {
    /// ICAP_JPEGSUBSAMPLING (TWJS_*).
    JpegSubsampling {
        Ycbcr444 = 0,
        Rgb444 = 1,
        Ycbcr422 = 2,
        Ycbcr421 = 3,
        Ycbcr411 = 4,
        Ycbcr420 = 5,
        Ycbcr410 = 6,
        Ycbcr311 = 7,
    }
}

wire_enum! {
    /// ICAP_PIXELTYPE and friends (TWPT_*).
    PixelType {
        Bw = 0,
        Gray = 1,
        Rgb = 2,
        Palette = 3,
        Cmy = 4,
        Cmyk = 5,
        Yuv = 6,
        Yuvk = 7,
        CieXyz = 8,
        Lab = 9,
        Srgb = 10,
        ScRgb = 11,
        Infrared = 16,
    }
}

wire_enum! {
    /// CAP_DEVICEEVENT (TWDE_*).
    DeviceEvent {
        CheckAutomaticCapture = 0,
        CheckBattery = 1,
        CheckDeviceOnline = 2,
        CheckFlash = 3,
        CheckPowerSupply = 4,
        CheckResolution = 5,
        DeviceAdded = 6,
        DeviceOffline = 7,
        DeviceReady = 8,
        DeviceRemoved = 9,
        ImageCaptured = 10,
        ImageDeleted = 11,
        PaperDoubleFeed = 12,
        PaperJam = 13,
        LampFailure = 14,
        PowerSave = 15,
        PowerSaveNotify = 16,
    }
}

wire_enum! {
    /// ICAP_FLASHUSED2 (TWFL_*).
    Flash {
        None = 0,
        Off = 1,
        On = 2,
        Auto = 3,
        RedEye = 4,
    }
}

wire_enum! {
    /// ICAP_LIGHTPATH (TWLP_*).
    LightPath {
        Reflective = 0,
        Transmissive = 1,
    }
}

wire_enum! {
    /// ICAP_LIGHTSOURCE (TWLS_*).
    LightSource {
        Red = 0,
        Green = 1,
        Blue = 2,
        None = 3,
        White = 4,
        Ultraviolet = 5,
        Infrared = 6,
    }
}

wire_enum! {
    /// ICAP_FILMTYPE (TWFM_*).
    FilmType {
        Positive = 0,
        Negative = 1,
    }
}

wire_enum! {
    /// CAP_DOUBLEFEEDDETECTION (TWDF_*).
    DoubleFeedDetection {
        Ultrasonic = 0,
        ByLength = 1,
        Infrared = 2,
    }
}

wire_enum! {
    /// CAP_DOUBLEFEEDDETECTIONSENSITIVITY (TWUS_*).
    DoubleFeedSensitivity {
        Low = 0,
        Medium = 1,
        High = 2,
    }
}

wire_enum! {
    /// CAP_DOUBLEFEEDDETECTIONRESPONSE (TWDP_*).
    DoubleFeedResponse {
        Stop = 0,
        StopAndWait = 1,
        Sound = 2,
        DoNotImprint = 3,
    }
}

wire_enum! {
    /// ICAP_XFERMECH (TWSX_*).
    TransferMechanism {
        Native = 0,
        File = 1,
        Memory = 2,
        MemFile = 4,
    }
}

wire_enum! {
    /// ICAP_IMAGEFILEFORMAT (TWFF_*).
    FileFormat {
        Tiff = 0,
        Pict = 1,
        Bmp = 2,
        Xbm = 3,
        Jfif = 4,
        Fpx = 5,
        TiffMulti = 6,
        Png = 7,
        Spiff = 8,
        Exif = 9,
        Pdf = 10,
        Jp2 = 11,
        Jpx = 13,
        DejaVu = 14,
        PdfA = 15,
        PdfA2 = 16,
        PdfRaster = 17,
    }
}

impl FileFormat {
    /// Conventional file extension for output files of this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Tiff | Self::TiffMulti => "tif",
            Self::Pict => "pct",
            Self::Bmp => "bmp",
            Self::Xbm => "xbm",
            Self::Jfif | Self::Exif | Self::Spiff => "jpg",
            Self::Fpx => "fpx",
            Self::Png => "png",
            Self::Pdf | Self::PdfA | Self::PdfA2 | Self::PdfRaster => "pdf",
            Self::Jp2 => "jp2",
            Self::Jpx => "jpx",
            Self::DejaVu => "djvu",
        }
    }

    /// Whether one output file can hold several pages.
    pub fn is_multipage(&self) -> bool {
        matches!(
            self,
            Self::TiffMulti | Self::Pdf | Self::PdfA | Self::PdfA2 | Self::PdfRaster | Self::DejaVu
        )
    }
}

wire_enum! {
    /// ICAP_UNITS (TWUN_*).
    Units {
        Inches = 0,
        Centimeters = 1,
        Picas = 2,
        Points = 3,
        Twips = 4,
        Pixels = 5,
        Millimeters = 6,
    }
}

wire_enum! {
    /// ICAP_ORIENTATION (TWOR_*). Portrait is `Rot0`, landscape is `Rot270`.
    Orientation {
        Rot0 = 0,
        Rot90 = 1,
        Rot180 = 2,
        Rot270 = 3,
        Auto = 4,
        AutoText = 5,
        AutoPicture = 6,
    }
}

wire_enum! {
    /// ICAP_MIRROR (TWMR_*).
    Mirror {
        None = 0,
        Vertical = 1,
        Horizontal = 2,
    }
}

wire_enum! {
    /// ICAP_FLIPROTATION (TWFR_*).
    FlipRotation {
        Book = 0,
        Fanfold = 1,
    }
}

wire_enum! {
    /// ICAP_NOISEFILTER (TWNF_*).
    NoiseFilter {
        None = 0,
        Auto = 1,
        LonePixel = 2,
        MajorityRule = 3,
    }
}

wire_enum! {
    /// ICAP_OVERSCAN (TWOV_*).
    Overscan {
        None = 0,
        Auto = 1,
        TopBottom = 2,
        LeftRight = 3,
        All = 4,
    }
}

wire_enum! {
    /// ICAP_IMAGEFILTER (TWIF_*).
    ImageFilter {
        None = 0,
        Auto = 1,
        LowPass = 2,
        BandPass = 3,
        HighPass = 4,
    }
}

wire_enum! {
    /// ICAP_BITDEPTHREDUCTION (TWBR_*).
    BitDepthReduction {
        Threshold = 0,
        Halftone = 1,
        CustomHalftone = 2,
        Diffusion = 3,
        DynamicThreshold = 4,
    }
}

wire_enum! {
    /// ICAP_PLANARCHUNKY (TWPC_*).
    PlanarChunky {
        Chunky = 0,
        Planar = 1,
    }
}

wire_enum! {
    /// CAP_PRINTER (TWPR_*).
    Printer {
        ImprinterTopBefore = 0,
        ImprinterTopAfter = 1,
        ImprinterBottomBefore = 2,
        ImprinterBottomAfter = 3,
        EndorserTopBefore = 4,
        EndorserTopAfter = 5,
        EndorserBottomBefore = 6,
        EndorserBottomAfter = 7,
    }
}

wire_enum! {
    /// CAP_PRINTERMODE (TWPM_*).
    PrinterMode {
        SingleString = 0,
        MultiString = 1,
        CompoundString = 2,
        ImageAddressString = 3,
    }
}

wire_enum! {
    /// CAP_JOBCONTROL (TWJC_*).
    JobControl {
        None = 0,
        IncludeSeparatorContinue = 1,
        IncludeSeparatorStop = 2,
        ExcludeSeparatorContinue = 3,
        ExcludeSeparatorStop = 4,
    }
}

wire_enum! {
    /// CAP_LANGUAGE (TWLG_*).
    Language {
        Danish = 0,
        Dutch = 1,
        English = 2,
        FrenchCanadian = 3,
        Finnish = 4,
        French = 5,
        German = 6,
        Icelandic = 7,
        Italian = 8,
        Norwegian = 9,
        Portuguese = 10,
        Spanish = 11,
        Swedish = 12,
        EnglishUsa = 13,
    }
}

wire_enum! {
    /// ICAP_SUPPORTEDSIZES (TWSS_*).
    SupportedSize {
        None = 0,
        A4 = 1,
        JisB5 = 2,
        UsLetter = 3,
        UsLegal = 4,
        A5 = 5,
        IsoB4 = 6,
        IsoB6 = 7,
        UsLedger = 9,
        UsExecutive = 10,
        A3 = 11,
        IsoB3 = 12,
        A6 = 13,
        C4 = 14,
        C5 = 15,
        C6 = 16,
        BusinessCard = 53,
        MaxSize = 54,
    }
}

wire_enum! {
    /// CAP_FEEDERALIGNMENT (TWFA_*).
    FeederAlignment {
        None = 0,
        Left = 1,
        Center = 2,
        Right = 3,
    }
}

wire_enum! {
    /// CAP_FEEDERORDER (TWFO_*).
    FeederOrder {
        FirstPageFirst = 0,
        LastPageFirst = 1,
    }
}

wire_enum! {
    /// CAP_PAPERHANDLING (TWPH_*).
    PaperHandling {
        Normal = 0,
        Fragile = 1,
        Thick = 2,
        Trifold = 3,
        Photograph = 4,
    }
}

wire_enum! {
    /// ICAP_FEEDERTYPE (TWFE_*).
    FeederType {
        General = 0,
        Photo = 1,
    }
}

wire_enum! {
    /// CAP_INDICATORSMODE (TWCI_*).
    IndicatorsMode {
        Info = 0,
        Warning = 1,
        Error = 2,
        Warmup = 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_unique<T: WireEnum>() {
        let values: HashSet<i32> = T::ALL.iter().map(|v| v.wire()).collect();
        assert_eq!(values.len(), T::ALL.len(), "duplicate wire value in {}", T::KIND);
    }

    #[test]
    fn wire_values_are_unique_per_enum() {
        assert_unique::<Alarm>();
        assert_unique::<BarcodeType>();
        assert_unique::<Compression>();
        assert_unique::<DeviceEvent>();
        assert_unique::<FileFormat>();
        assert_unique::<PixelType>();
        assert_unique::<SupportedSize>();
        assert_unique::<TransferMechanism>();
    }

    #[test]
    fn from_wire_decodes_sparse_values() {
        assert_eq!(PixelType::from_wire(16).ok(), Some(PixelType::Infrared));
        assert_eq!(TransferMechanism::from_wire(4).ok(), Some(TransferMechanism::MemFile));
        assert_eq!(SupportedSize::from_wire(53).ok(), Some(SupportedSize::BusinessCard));
    }

    #[test]
    fn from_wire_rejects_gaps() {
        match TransferMechanism::from_wire(3) {
            Err(TwainError::UnknownWireValue { kind, value }) => {
                assert_eq!(kind, "TransferMechanism");
                assert_eq!(value, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn wire_list_preserves_order() {
        let list = [BarcodeType::QrCode, BarcodeType::Code128, BarcodeType::QrCode];
        assert_eq!(wire_list(&list), vec![20, 4, 20]);
    }

    #[test]
    fn multipage_formats() {
        assert!(FileFormat::TiffMulti.is_multipage());
        assert!(FileFormat::Pdf.is_multipage());
        assert!(!FileFormat::Bmp.is_multipage());
        assert_eq!(FileFormat::Jfif.extension(), "jpg");
    }

    #[test]
    fn plan_ids_are_distinct() {
        assert_ne!(PlanId::new(), PlanId::new());
    }
}
