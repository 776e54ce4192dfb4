// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The complete option set for one acquisition.
//
// Owns exactly one instance of every group. Populated by the caller, then
// turned into a `NegotiationPlan`; start each acquisition from a fresh or
// `reset()` set.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use twainkit_core::CapabilityId;
use twainkit_core::error::{Result, TwainError};

use crate::group::{Emitter, OptionGroup};
use crate::groups::*;
use crate::plan::NegotiationPlan;

/// Every option group, aggregated by value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquireCharacteristics {
    pub audible_alarms: AudibleAlarmsOptions,
    pub auto_adjust: AutoAdjustOptions,
    pub auto_capture: AutoCaptureOptions,
    pub auto_scan: AutoScanOptions,
    pub barcode_detection: BarcodeDetectionOptions,
    pub color: ColorOptions,
    pub compression: CompressionOptions,
    pub device_events: DeviceEventOptions,
    pub device_params: DeviceParamsOptions,
    pub double_feed: DoubleFeedOptions,
    pub file_transfer: FileTransferOptions,
    pub general: GeneralOptions,
    pub image_information: ImageInformationOptions,
    pub image_parameters: ImageParameterOptions,
    pub image_type: ImageTypeOptions,
    pub imprinter: ImprinterOptions,
    pub job_control: JobControlOptions,
    pub language: LanguageOptions,
    pub micr: MicrOptions,
    pub pages: PagesOptions,
    pub paper_handling: PaperHandlingOptions,
    pub patch_code_detection: PatchCodeDetectionOptions,
    pub pdf: PdfOptions,
    pub power_monitor: PowerMonitorOptions,
    pub resolution: ResolutionOptions,
    pub user_interface: UserInterfaceOptions,
}

impl AcquireCharacteristics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return every group to its unset state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// All groups in registry order. Each call starts a new iteration.
    pub fn groups(&self) -> impl Iterator<Item = &dyn OptionGroup> {
        let groups: [&dyn OptionGroup; 26] = [
            &self.audible_alarms,
            &self.auto_adjust,
            &self.auto_capture,
            &self.auto_scan,
            &self.barcode_detection,
            &self.color,
            &self.compression,
            &self.device_events,
            &self.device_params,
            &self.double_feed,
            &self.file_transfer,
            &self.general,
            &self.image_information,
            &self.image_parameters,
            &self.image_type,
            &self.imprinter,
            &self.job_control,
            &self.language,
            &self.micr,
            &self.pages,
            &self.paper_handling,
            &self.patch_code_detection,
            &self.pdf,
            &self.power_monitor,
            &self.resolution,
            &self.user_interface,
        ];
        groups.into_iter()
    }

    /// Visit every group together with the capabilities it governs.
    pub fn for_each_group<F>(&self, mut visitor: F)
    where
        F: FnMut(&dyn OptionGroup, &'static [CapabilityId]),
    {
        for group in self.groups() {
            visitor(group, group.affected_caps());
        }
    }

    /// Translate into an ordered negotiation plan.
    pub fn plan(&self) -> NegotiationPlan {
        NegotiationPlan::build(self)
    }

    /// Load an acquisition profile. Anything the file omits stays unset.
    pub fn load_profile(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(TwainError::Profile(format!("{} is empty", path.display())));
        }
        let profile: Self = serde_json::from_str(&text)?;
        info!(
            path = %path.display(),
            enabled_groups = profile.groups().filter(|g| g.is_enabled()).count(),
            "loaded acquisition profile"
        );
        Ok(profile)
    }

    /// Write the profile as JSON. Fails if a number is NaN or infinite,
    /// since JSON would store it as `null` and it would load back as unset.
    pub fn save_profile(&self, path: &Path) -> Result<()> {
        if let Some(field) = self.first_non_finite() {
            return Err(TwainError::Profile(format!(
                "{field} is not a finite number and cannot be saved"
            )));
        }
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        debug!(path = %path.display(), "saved acquisition profile");
        Ok(())
    }

    /// First field holding a NaN or infinite number, enabled or not.
    fn first_non_finite(&self) -> Option<String> {
        let mut instructions = Vec::new();
        let mut session = Vec::new();
        for group in self.groups() {
            let mut out = Emitter::new(group.kind(), &mut instructions, &mut session);
            group.emit(&mut out);
        }
        instructions
            .iter()
            .find(|i| !i.value.is_finite())
            .map(|i| format!("{} in {}", i.cap, i.group))
            .or_else(|| {
                session
                    .iter()
                    .find(|s| !s.value.is_finite())
                    .map(|s| format!("{:?} in {}", s.key, s.group))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupKind;
    use twainkit_core::capability::*;
    use twainkit_core::{BarcodeType, Compression, Frame, PixelType, Units};

    #[test]
    fn groups_follow_registry_order() {
        let chars = AcquireCharacteristics::new();
        let kinds: Vec<GroupKind> = chars.groups().map(|g| g.kind()).collect();
        assert_eq!(kinds, GroupKind::ALL.to_vec());
    }

    #[test]
    fn groups_iteration_is_restartable() {
        let chars = AcquireCharacteristics::new();
        assert_eq!(chars.groups().count(), 26);
        assert_eq!(chars.groups().count(), 26);
    }

    #[test]
    fn for_each_group_passes_registry_caps() {
        let chars = AcquireCharacteristics::new();
        let mut visited = 0;
        chars.for_each_group(|group, caps| {
            assert_eq!(caps, group.kind().affected_caps());
            visited += 1;
        });
        assert_eq!(visited, 26);
    }

    #[test]
    fn only_switchless_groups_start_enabled() {
        let chars = AcquireCharacteristics::new();
        let enabled: Vec<GroupKind> = chars
            .groups()
            .filter(|g| g.is_enabled())
            .map(|g| g.kind())
            .collect();
        assert_eq!(
            enabled,
            vec![
                GroupKind::AudibleAlarms,
                GroupKind::General,
                GroupKind::UserInterface
            ]
        );
    }

    #[test]
    fn every_instruction_cap_belongs_to_its_group() {
        let mut chars = AcquireCharacteristics::new();
        chars.general.set_transfer_count(5).set_units(Units::Inches);
        chars.compression.enable(true).set_compression(Compression::Group4);
        chars
            .barcode_detection
            .enable(true)
            .add_search_priority(BarcodeType::Code128);
        chars.imprinter.enable(true).add_string("X");
        chars.micr.enable(true);

        for i in chars.plan().instructions {
            assert!(i.group.affects(i.cap), "{} not governed by {}", i.cap, i.group);
        }
    }

    #[test]
    fn reset_clears_everything() {
        let mut chars = AcquireCharacteristics::new();
        chars.resolution.enable(true).set_resolution(200.0);
        chars.audible_alarms.set_volume(10);
        chars.reset();
        assert_eq!(chars, AcquireCharacteristics::default());
        assert!(chars.plan().is_empty());
    }

    #[test]
    fn groups_are_not_shared_between_sets() {
        let mut a = AcquireCharacteristics::new();
        let b = a.clone();
        a.image_type.enable(true).set_pixel_type(PixelType::Rgb);
        assert_eq!(b.image_type.pixel_type(), None);
    }

    #[test]
    fn profile_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let mut chars = AcquireCharacteristics::new();
        chars.resolution.enable(true).set_resolution(300.0);
        chars.paper_handling.enable(true).set_duplex_enabled(true);
        chars.save_profile(&path).unwrap();

        let loaded = AcquireCharacteristics::load_profile(&path).unwrap();
        assert_eq!(loaded, chars);
        assert_eq!(loaded.plan().fingerprint(), chars.plan().fingerprint());
    }

    #[test]
    fn non_finite_value_is_not_saved_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");

        let mut chars = AcquireCharacteristics::new();
        chars.image_parameters.set_brightness(f64::INFINITY);
        let err = chars.save_profile(&path).unwrap_err();
        assert!(matches!(err, TwainError::Profile(ref m) if m.contains("ICAP_BRIGHTNESS")));
        assert!(!path.exists());

        chars.image_parameters.set_brightness(None);
        chars.pages.set_frame(Frame::new(0.0, 0.0, f64::NAN, 11.0));
        assert!(matches!(
            chars.save_profile(&path),
            Err(TwainError::Profile(_))
        ));

        chars.pages.set_frame(Frame::new(0.0, 0.0, 8.5, 11.0));
        chars.image_parameters.set_brightness(-1000.0);
        chars.save_profile(&path).unwrap();
        let loaded = AcquireCharacteristics::load_profile(&path).unwrap();
        assert_eq!(loaded.image_parameters.brightness(), Some(-1000.0));
        assert_eq!(loaded, chars);
    }

    #[test]
    fn non_finite_custom_pdf_page_is_not_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        let mut chars = AcquireCharacteristics::new();
        chars.pdf.set_page_size(PdfPageSize::Custom {
            width: f64::NAN,
            height: 792.0,
        });
        assert!(matches!(
            chars.save_profile(&path),
            Err(TwainError::Profile(_))
        ));
    }

    #[test]
    fn partial_profile_leaves_rest_unset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(
            &path,
            r#"{ "resolution": { "enabled": true, "x_resolution": 150.0 } }"#,
        )
        .unwrap();

        let loaded = AcquireCharacteristics::load_profile(&path).unwrap();
        assert_eq!(loaded.resolution.x_resolution(), Some(150.0));
        assert_eq!(loaded.resolution.y_resolution(), None);

        let plan = loaded.plan();
        assert_eq!(plan.instructions.len(), 1);
        assert_eq!(plan.instructions[0].cap, ICAP_XRESOLUTION);
    }

    #[test]
    fn empty_profile_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "  \n").unwrap();
        assert!(matches!(
            AcquireCharacteristics::load_profile(&path),
            Err(TwainError::Profile(_))
        ));
    }

    #[test]
    fn malformed_profile_is_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AcquireCharacteristics::load_profile(&path),
            Err(TwainError::Serialization(_))
        ));
    }
}
