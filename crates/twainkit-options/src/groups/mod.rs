// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The option groups, one module each.

pub mod alarms;
pub mod auto_adjust;
pub mod auto_capture;
pub mod auto_scan;
pub mod barcode;
pub mod color;
pub mod compression;
pub mod device_event;
pub mod device_params;
pub mod double_feed;
pub mod file_transfer;
pub mod general;
pub mod image_info;
pub mod image_params;
pub mod image_type;
pub mod imprinter;
pub mod job_control;
pub mod language;
pub mod micr;
pub mod pages;
pub mod paper_handling;
pub mod patch_code;
pub mod pdf;
pub mod power_monitor;
pub mod resolution;
pub mod user_interface;

pub use alarms::AudibleAlarmsOptions;
pub use auto_adjust::{AutoAdjustOptions, BlankPageDiscard};
pub use auto_capture::AutoCaptureOptions;
pub use auto_scan::AutoScanOptions;
pub use barcode::BarcodeDetectionOptions;
pub use color::ColorOptions;
pub use compression::CompressionOptions;
pub use device_event::DeviceEventOptions;
pub use device_params::DeviceParamsOptions;
pub use double_feed::DoubleFeedOptions;
pub use file_transfer::FileTransferOptions;
pub use general::{ALL_PAGES, GeneralOptions};
pub use image_info::ImageInformationOptions;
pub use image_params::ImageParameterOptions;
pub use image_type::ImageTypeOptions;
pub use imprinter::ImprinterOptions;
pub use job_control::JobControlOptions;
pub use language::LanguageOptions;
pub use micr::MicrOptions;
pub use pages::PagesOptions;
pub use paper_handling::PaperHandlingOptions;
pub use patch_code::PatchCodeDetectionOptions;
pub use pdf::{PdfEncryption, PdfOptions, PdfOrientation, PdfPageSize, PdfPermission};
pub use power_monitor::PowerMonitorOptions;
pub use resolution::ResolutionOptions;
pub use user_interface::UserInterfaceOptions;

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::characteristics::AcquireCharacteristics;
    use crate::group::GroupKind;
    use twainkit_core::capability::*;
    use twainkit_core::*;

    type Setter = fn(&mut AcquireCharacteristics);

    /// `(group, call text, call)` where the call sets exactly one field.
    macro_rules! case {
        ($kind:ident, $($call:tt)+) => {
            (
                GroupKind::$kind,
                stringify!($($call)+),
                (|c: &mut AcquireCharacteristics| {
                    c.$($call)+;
                }) as Setter,
            )
        };
    }

    fn single_field_cases() -> Vec<(GroupKind, &'static str, Setter)> {
        vec![
            case!(AudibleAlarms, audible_alarms.add_alarm(Alarm::FeederError)),
            case!(AudibleAlarms, audible_alarms.set_volume(40)),
            case!(AutoAdjust, auto_adjust.set_auto_bright(true)),
            case!(AutoAdjust, auto_adjust.set_auto_deskew(true)),
            case!(AutoAdjust, auto_adjust.set_auto_border_detection(false)),
            case!(AutoAdjust, auto_adjust.set_auto_rotate(true)),
            case!(AutoAdjust, auto_adjust.set_auto_length_detection(true)),
            case!(AutoAdjust, auto_adjust.set_auto_color(true)),
            case!(AutoAdjust, auto_adjust.set_auto_color_non_color_pixel_type(PixelType::Gray)),
            case!(AutoAdjust, auto_adjust.set_auto_crop_uses_frame(true)),
            case!(AutoAdjust, auto_adjust.set_auto_size(AutoSize::Auto)),
            case!(AutoAdjust, auto_adjust.set_discard_blank_pages(BlankPageDiscard::Auto)),
            case!(AutoCapture, auto_capture.set_number_of_pictures(3)),
            case!(AutoCapture, auto_capture.set_time_before_first_capture(500)),
            case!(AutoCapture, auto_capture.set_time_between_captures(250)),
            case!(AutoScan, auto_scan.set_clear_buffers(ClearBuffers::Clear)),
            case!(AutoScan, auto_scan.set_max_batch_buffers(4)),
            case!(
                BarcodeDetection,
                barcode_detection.add_search_priority(BarcodeType::ThreeOfNine)
            ),
            case!(BarcodeDetection, barcode_detection.set_max_search_priorities(2)),
            case!(BarcodeDetection, barcode_detection.set_search_mode(SearchMode::Vertical)),
            case!(BarcodeDetection, barcode_detection.set_max_retries(3)),
            case!(BarcodeDetection, barcode_detection.set_timeout(1000)),
            case!(Color, color.set_pixel_flavor(PixelFlavor::Chocolate)),
            case!(Color, color.add_filter(FilterType::Red)),
            case!(Color, color.set_halftone("ErrorDiffusion")),
            case!(Color, color.set_color_management(true)),
            case!(Color, color.set_icc_profile(IccProfile::Link)),
            case!(Compression, compression.set_compression(Compression::PackBits)),
            case!(Compression, compression.set_jpeg_quality(80)),
            case!(Compression, compression.set_jpeg_pixel_type(PixelType::Bw)),
            case!(Compression, compression.set_jpeg_subsampling(JpegSubsampling::Ycbcr444)),
            case!(Compression, compression.set_ccitt_k_factor(4)),
            case!(DeviceEvent, device_events.add_event(DeviceEvent::CheckAutomaticCapture)),
            case!(DeviceParams, device_params.set_exposure_time(0.25)),
            case!(DeviceParams, device_params.set_flash(Flash::Off)),
            case!(DeviceParams, device_params.set_lamp_state(true)),
            case!(DeviceParams, device_params.set_light_path(LightPath::Reflective)),
            case!(DeviceParams, device_params.set_light_source(LightSource::Red)),
            case!(DeviceParams, device_params.set_zoom_factor(2)),
            case!(DeviceParams, device_params.set_film_type(FilmType::Positive)),
            case!(DoubleFeed, double_feed.add_detection(DoubleFeedDetection::Ultrasonic)),
            case!(DoubleFeed, double_feed.set_length(2.5)),
            case!(DoubleFeed, double_feed.set_sensitivity(DoubleFeedSensitivity::Low)),
            case!(DoubleFeed, double_feed.add_response(DoubleFeedResponse::Stop)),
            case!(FileTransfer, file_transfer.set_transfer_mechanism(TransferMechanism::File)),
            case!(FileTransfer, file_transfer.set_file_format(FileFormat::Tiff)),
            case!(FileTransfer, file_transfer.set_file_name("out.tif")),
            case!(FileTransfer, file_transfer.set_auto_create_directory(true)),
            case!(General, general.set_transfer_count(ALL_PAGES)),
            case!(General, general.set_units(Units::Inches)),
            case!(General, general.set_max_acquisitions(2)),
            case!(ImageInformation, image_information.set_author("A. Scanner")),
            case!(ImageInformation, image_information.set_caption("Invoice")),
            case!(ImageInformation, image_information.set_extended_image_info(true)),
            case!(ImageParameters, image_parameters.set_brightness(-1000.0)),
            case!(ImageParameters, image_parameters.set_contrast(1000.0)),
            case!(ImageParameters, image_parameters.set_gamma(2.2)),
            case!(ImageParameters, image_parameters.set_highlight(255.0)),
            case!(ImageParameters, image_parameters.set_shadow(0.0)),
            case!(ImageParameters, image_parameters.set_threshold(128.0)),
            case!(ImageParameters, image_parameters.set_rotation(90.0)),
            case!(ImageParameters, image_parameters.set_x_scaling(1.5)),
            case!(ImageParameters, image_parameters.set_y_scaling(0.5)),
            case!(ImageParameters, image_parameters.set_orientation(Orientation::Rot90)),
            case!(ImageParameters, image_parameters.set_mirror(Mirror::Vertical)),
            case!(ImageParameters, image_parameters.set_flip_rotation(FlipRotation::Book)),
            case!(ImageParameters, image_parameters.set_noise_filter(NoiseFilter::Auto)),
            case!(ImageParameters, image_parameters.set_overscan(Overscan::Auto)),
            case!(ImageParameters, image_parameters.set_image_filter(ImageFilter::Auto)),
            case!(ImageType, image_type.set_pixel_type(PixelType::Gray)),
            case!(ImageType, image_type.set_bit_depth(8)),
            case!(ImageType, image_type.set_bit_depth_reduction(BitDepthReduction::Threshold)),
            case!(ImageType, image_type.set_planar_chunky(PlanarChunky::Chunky)),
            case!(Imprinter, imprinter.set_printer(Printer::ImprinterTopBefore)),
            case!(Imprinter, imprinter.set_mode(PrinterMode::SingleString)),
            case!(Imprinter, imprinter.add_string("BATCH")),
            case!(Imprinter, imprinter.set_suffix("-A")),
            case!(Imprinter, imprinter.set_index(1)),
            case!(Imprinter, imprinter.set_vertical_offset(0.5)),
            case!(Imprinter, imprinter.set_char_rotation(90)),
            case!(JobControl, job_control.set_job_control(JobControl::None)),
            case!(Language, language.set_language(Language::Dutch)),
            case!(Pages, pages.set_supported_size(SupportedSize::A4)),
            case!(Pages, pages.set_frame(Frame::new(0.0, 0.0, 8.5, 11.0))),
            case!(Pages, pages.set_max_frames(1)),
            case!(Pages, pages.set_undefined_image_size(true)),
            case!(PaperHandling, paper_handling.set_feeder_enabled(true)),
            case!(PaperHandling, paper_handling.set_auto_feed(true)),
            case!(PaperHandling, paper_handling.set_duplex_enabled(true)),
            case!(PaperHandling, paper_handling.set_feeder_alignment(FeederAlignment::Left)),
            case!(PaperHandling, paper_handling.set_feeder_order(FeederOrder::FirstPageFirst)),
            case!(PaperHandling, paper_handling.set_feeder_prep(true)),
            case!(PaperHandling, paper_handling.set_paper_handling(PaperHandling::Normal)),
            case!(PaperHandling, paper_handling.set_automatic_sense_medium(true)),
            case!(PaperHandling, paper_handling.set_feeder_type(FeederType::General)),
            case!(PatchCodeDetection, patch_code_detection.add_search_priority(PatchCode::Patch1)),
            case!(PatchCodeDetection, patch_code_detection.set_max_search_priorities(6)),
            case!(PatchCodeDetection, patch_code_detection.set_search_mode(SearchMode::Horizontal)),
            case!(PatchCodeDetection, patch_code_detection.set_max_retries(2)),
            case!(PatchCodeDetection, patch_code_detection.set_timeout(500)),
            case!(Pdf, pdf.set_author("A. Scanner")),
            case!(Pdf, pdf.set_creator("twainkit")),
            case!(Pdf, pdf.set_keywords("invoice")),
            case!(Pdf, pdf.set_subject("Invoices")),
            case!(Pdf, pdf.set_title("March")),
            case!(Pdf, pdf.set_page_size(PdfPageSize::A4)),
            case!(Pdf, pdf.set_orientation(PdfOrientation::Landscape)),
            case!(Pdf, pdf.set_ascii_compression(true)),
            case!(
                Pdf,
                pdf.set_encryption(PdfEncryption {
                    owner_password: Some("owner".into()),
                    ..Default::default()
                })
            ),
            case!(PowerMonitor, power_monitor.set_power_save_time(60)),
            case!(Resolution, resolution.set_x_resolution(300.0)),
            case!(Resolution, resolution.set_y_resolution(200.0)),
            case!(UserInterface, user_interface.set_show_ui(false)),
            case!(UserInterface, user_interface.set_show_ui_only(true)),
            case!(UserInterface, user_interface.set_show_indicators(false)),
            case!(UserInterface, user_interface.add_indicator_mode(IndicatorsMode::Info)),
        ]
    }

    fn enable_cap(kind: GroupKind) -> Option<CapabilityId> {
        match kind {
            GroupKind::AutoScan => Some(CAP_AUTOSCAN),
            GroupKind::BarcodeDetection => Some(ICAP_BARCODEDETECTIONENABLED),
            GroupKind::Imprinter => Some(CAP_PRINTERENABLED),
            GroupKind::Micr => Some(CAP_MICRENABLED),
            GroupKind::PatchCodeDetection => Some(ICAP_PATCHCODEDETECTIONENABLED),
            _ => None,
        }
    }

    fn switch_all(chars: &mut AcquireCharacteristics, on: bool) {
        chars.auto_adjust.enable(on);
        chars.auto_capture.enable(on);
        chars.auto_scan.enable(on);
        chars.barcode_detection.enable(on);
        chars.color.enable(on);
        chars.compression.enable(on);
        chars.device_events.enable(on);
        chars.device_params.enable(on);
        chars.double_feed.enable(on);
        chars.file_transfer.enable(on);
        chars.image_information.enable(on);
        chars.image_parameters.enable(on);
        chars.image_type.enable(on);
        chars.imprinter.enable(on);
        chars.job_control.enable(on);
        chars.language.enable(on);
        chars.micr.enable(on);
        chars.pages.enable(on);
        chars.paper_handling.enable(on);
        chars.patch_code_detection.enable(on);
        chars.pdf.enable(on);
        chars.power_monitor.enable(on);
        chars.resolution.enable(on);
    }

    #[test]
    fn enabled_defaults_emit_only_enable_caps() {
        let mut chars = AcquireCharacteristics::new();
        switch_all(&mut chars, true);

        let plan = chars.plan();
        let caps: Vec<_> = plan.instructions.iter().map(|i| i.cap).collect();
        assert_eq!(
            caps,
            vec![
                CAP_AUTOSCAN,
                ICAP_BARCODEDETECTIONENABLED,
                CAP_PRINTERENABLED,
                CAP_MICRENABLED,
                ICAP_PATCHCODEDETECTIONENABLED,
            ]
        );
        assert!(plan.session_settings.is_empty());
    }

    #[test]
    fn toggling_enable_preserves_fields() {
        let mut chars = AcquireCharacteristics::new();
        chars.compression.set_compression(Compression::Group4);
        chars.image_type.set_pixel_type(PixelType::Bw);
        chars.resolution.set_resolution(200.0);
        chars.paper_handling.set_duplex_enabled(false);
        chars.imprinter.add_string("ACME");
        let before = chars.clone();

        switch_all(&mut chars, true);
        let enabled_plan = chars.plan();
        switch_all(&mut chars, false);

        assert_eq!(chars, before);
        assert!(chars.plan().is_empty());
        assert!(enabled_plan.instruction(ICAP_COMPRESSION).is_some());
        assert_eq!(
            enabled_plan.instruction(CAP_DUPLEXENABLED).map(|i| i.value.as_int()),
            Some(Some(0))
        );
    }

    #[test]
    fn each_field_emits_exactly_one_entry() {
        let mut base = AcquireCharacteristics::new();
        switch_all(&mut base, true);
        let baseline = base.plan();

        for (kind, call, set) in single_field_cases() {
            let mut chars = base.clone();
            set(&mut chars);
            let plan = chars.plan();

            let extra: Vec<_> = plan
                .instructions
                .iter()
                .filter(|i| !baseline.instructions.contains(i))
                .collect();
            assert_eq!(
                plan.instructions.len(),
                baseline.instructions.len() + extra.len(),
                "{call}"
            );
            assert_eq!(extra.len() + plan.session_settings.len(), 1, "{call}");
            for i in &extra {
                assert_eq!(i.group, kind, "{call}");
                assert!(
                    kind.affected_caps().contains(&i.cap),
                    "{call}: {} is not governed by {kind:?}",
                    i.cap
                );
            }
            for s in &plan.session_settings {
                assert_eq!(s.group, kind, "{call}");
            }

            let own: Vec<_> = plan
                .instructions
                .iter()
                .filter(|i| i.group == kind)
                .map(|i| i.cap)
                .collect();
            match enable_cap(kind) {
                Some(enable) => {
                    assert_eq!(own.len(), extra.len() + 1, "{call}");
                    // Only CAP_PRINTER goes out ahead of its group's enable.
                    let at = usize::from(own.first() == Some(&CAP_PRINTER));
                    assert_eq!(own.iter().position(|&c| c == enable), Some(at), "{call}");
                }
                None => assert_eq!(own.len(), extra.len(), "{call}"),
            }
        }
    }

    #[test]
    fn single_field_cases_reach_every_group_with_fields() {
        let covered: BTreeSet<GroupKind> = single_field_cases().iter().map(|c| c.0).collect();
        let expected: BTreeSet<GroupKind> = GroupKind::ALL
            .into_iter()
            .filter(|&k| k != GroupKind::Micr)
            .collect();
        assert_eq!(covered, expected);
    }

    #[test]
    fn default_getters_are_unset() {
        let c = AcquireCharacteristics::new();

        assert!(c.audible_alarms.alarms().is_empty());
        assert!(c.audible_alarms.alarms_as_int().is_empty());
        assert_eq!(c.audible_alarms.volume(), None);

        let a = &c.auto_adjust;
        assert_eq!(a.auto_bright(), None);
        assert_eq!(a.auto_deskew(), None);
        assert_eq!(a.auto_border_detection(), None);
        assert_eq!(a.auto_rotate(), None);
        assert_eq!(a.auto_length_detection(), None);
        assert_eq!(a.auto_color(), None);
        assert_eq!(a.auto_color_non_color_pixel_type(), None);
        assert_eq!(a.auto_crop_uses_frame(), None);
        assert_eq!(a.auto_size(), None);
        assert_eq!(a.discard_blank_pages(), None);

        assert_eq!(c.auto_capture.number_of_pictures(), None);
        assert_eq!(c.auto_capture.time_before_first_capture(), None);
        assert_eq!(c.auto_capture.time_between_captures(), None);

        assert_eq!(c.auto_scan.clear_buffers(), None);
        assert_eq!(c.auto_scan.max_batch_buffers(), None);

        let b = &c.barcode_detection;
        assert!(b.search_priorities().is_empty());
        assert!(b.search_priorities_as_int().is_empty());
        assert_eq!(b.max_search_priorities(), None);
        assert_eq!(b.search_mode(), None);
        assert_eq!(b.max_retries(), None);
        assert_eq!(b.timeout(), None);

        assert_eq!(c.color.pixel_flavor(), None);
        assert!(c.color.filters().is_empty());
        assert!(c.color.filters_as_int().is_empty());
        assert_eq!(c.color.halftone(), None);
        assert_eq!(c.color.color_management(), None);
        assert_eq!(c.color.icc_profile(), None);

        assert_eq!(c.compression.compression(), None);
        assert_eq!(c.compression.jpeg_quality(), None);
        assert_eq!(c.compression.jpeg_pixel_type(), None);
        assert_eq!(c.compression.jpeg_subsampling(), None);
        assert_eq!(c.compression.ccitt_k_factor(), None);

        assert!(c.device_events.events().is_empty());
        assert!(c.device_events.events_as_int().is_empty());

        let d = &c.device_params;
        assert_eq!(d.exposure_time(), None);
        assert_eq!(d.flash(), None);
        assert_eq!(d.lamp_state(), None);
        assert_eq!(d.light_path(), None);
        assert_eq!(d.light_source(), None);
        assert_eq!(d.zoom_factor(), None);
        assert_eq!(d.film_type(), None);

        assert!(c.double_feed.detection().is_empty());
        assert!(c.double_feed.detection_as_int().is_empty());
        assert_eq!(c.double_feed.length(), None);
        assert_eq!(c.double_feed.sensitivity(), None);
        assert!(c.double_feed.responses().is_empty());
        assert!(c.double_feed.responses_as_int().is_empty());

        assert_eq!(c.file_transfer.transfer_mechanism(), None);
        assert_eq!(c.file_transfer.file_format(), None);
        assert_eq!(c.file_transfer.file_name(), None);
        assert_eq!(c.file_transfer.auto_create_directory(), None);

        assert_eq!(c.general.transfer_count(), None);
        assert_eq!(c.general.units(), None);
        assert_eq!(c.general.max_acquisitions(), None);

        assert_eq!(c.image_information.author(), None);
        assert_eq!(c.image_information.caption(), None);
        assert_eq!(c.image_information.extended_image_info(), None);

        let p = &c.image_parameters;
        assert_eq!(p.brightness(), None);
        assert_eq!(p.contrast(), None);
        assert_eq!(p.gamma(), None);
        assert_eq!(p.highlight(), None);
        assert_eq!(p.shadow(), None);
        assert_eq!(p.threshold(), None);
        assert_eq!(p.rotation(), None);
        assert_eq!(p.x_scaling(), None);
        assert_eq!(p.y_scaling(), None);
        assert_eq!(p.orientation(), None);
        assert_eq!(p.mirror(), None);
        assert_eq!(p.flip_rotation(), None);
        assert_eq!(p.noise_filter(), None);
        assert_eq!(p.overscan(), None);
        assert_eq!(p.image_filter(), None);

        assert_eq!(c.image_type.pixel_type(), None);
        assert_eq!(c.image_type.bit_depth(), None);
        assert_eq!(c.image_type.bit_depth_reduction(), None);
        assert_eq!(c.image_type.planar_chunky(), None);

        let i = &c.imprinter;
        assert_eq!(i.printer(), None);
        assert_eq!(i.mode(), None);
        assert!(i.strings().is_empty());
        assert_eq!(i.suffix(), None);
        assert_eq!(i.index(), None);
        assert_eq!(i.vertical_offset(), None);
        assert_eq!(i.char_rotation(), None);

        assert_eq!(c.job_control.job_control(), None);
        assert_eq!(c.language.language(), None);

        assert_eq!(c.pages.supported_size(), None);
        assert_eq!(c.pages.frame(), None);
        assert_eq!(c.pages.max_frames(), None);
        assert_eq!(c.pages.undefined_image_size(), None);

        let h = &c.paper_handling;
        assert_eq!(h.feeder_enabled(), None);
        assert_eq!(h.auto_feed(), None);
        assert_eq!(h.duplex_enabled(), None);
        assert_eq!(h.feeder_alignment(), None);
        assert_eq!(h.feeder_order(), None);
        assert_eq!(h.feeder_prep(), None);
        assert_eq!(h.paper_handling(), None);
        assert_eq!(h.automatic_sense_medium(), None);
        assert_eq!(h.feeder_type(), None);

        let pc = &c.patch_code_detection;
        assert!(pc.search_priorities().is_empty());
        assert!(pc.search_priorities_as_int().is_empty());
        assert_eq!(pc.max_search_priorities(), None);
        assert_eq!(pc.search_mode(), None);
        assert_eq!(pc.max_retries(), None);
        assert_eq!(pc.timeout(), None);

        assert_eq!(c.pdf.author(), None);
        assert_eq!(c.pdf.creator(), None);
        assert_eq!(c.pdf.keywords(), None);
        assert_eq!(c.pdf.subject(), None);
        assert_eq!(c.pdf.title(), None);
        assert_eq!(c.pdf.page_size(), None);
        assert_eq!(c.pdf.orientation(), None);
        assert_eq!(c.pdf.ascii_compression(), None);
        assert_eq!(c.pdf.encryption(), None);

        assert_eq!(c.power_monitor.power_save_time(), None);

        assert_eq!(c.resolution.x_resolution(), None);
        assert_eq!(c.resolution.y_resolution(), None);

        let u = &c.user_interface;
        assert_eq!(u.show_ui(), None);
        assert_eq!(u.show_ui_only(), None);
        assert_eq!(u.show_indicators(), None);
        assert!(u.indicator_modes().is_empty());
        assert!(u.indicator_modes_as_int().is_empty());
    }
}
