// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF output settings. These configure the file the session writes, not the
// device, so the group governs no capabilities and emits session settings only.

use serde::{Deserialize, Serialize};

use twainkit_core::{CapabilityValue, Frame};

use crate::group::{
    Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors, string_accessors,
};
use crate::plan::SessionKey;

/// Page size of the generated PDF.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdfPageSize {
    Letter,
    Legal,
    A4,
    A3,
    /// Width and height in points.
    Custom { width: f64, height: f64 },
}

impl PdfPageSize {
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Letter => "letter",
            Self::Legal => "legal",
            Self::A4 => "a4",
            Self::A3 => "a3",
            Self::Custom { .. } => "custom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdfOrientation {
    Portrait,
    Landscape,
}

/// Permissions granted to readers of an encrypted PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PdfPermission {
    Print,
    Modify,
    Copy,
    ModifyAnnotations,
    FillIn,
    ExtractForAccessibility,
    Assemble,
    DegradedPrint,
}

impl PdfPermission {
    /// Bit in the PDF `/P` permissions word (PDF 1.7, table 22).
    pub fn bit(self) -> i32 {
        match self {
            Self::Print => 1 << 2,
            Self::Modify => 1 << 3,
            Self::Copy => 1 << 4,
            Self::ModifyAnnotations => 1 << 5,
            Self::FillIn => 1 << 8,
            Self::ExtractForAccessibility => 1 << 9,
            Self::Assemble => 1 << 10,
            Self::DegradedPrint => 1 << 11,
        }
    }
}

/// Password protection for the generated PDF.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfEncryption {
    pub user_password: Option<String>,
    pub owner_password: Option<String>,
    pub permissions: Vec<PdfPermission>,
    /// AES instead of RC4. Unset leaves the writer's choice.
    pub use_aes: Option<bool>,
}

impl PdfEncryption {
    /// OR of the permission bits; duplicates collapse.
    pub fn permission_mask(&self) -> i32 {
        self.permissions.iter().fold(0, |mask, p| mask | p.bit())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfOptions {
    enabled: bool,
    author: Option<String>,
    creator: Option<String>,
    keywords: Option<String>,
    subject: Option<String>,
    title: Option<String>,
    page_size: Option<PdfPageSize>,
    orientation: Option<PdfOrientation>,
    ascii_compression: Option<bool>,
    encryption: Option<PdfEncryption>,
}

impl PdfOptions {
    enable_switch!();

    string_accessors! {
        author, set_author;
        creator, set_creator;
        keywords, set_keywords;
        subject, set_subject;
        title, set_title;
    }

    scalar_accessors! {
        page_size, set_page_size: PdfPageSize;
        orientation, set_orientation: PdfOrientation;
        /// ASCII85-encode image streams.
        ascii_compression, set_ascii_compression: bool;
    }

    pub fn set_encryption(&mut self, encryption: impl Into<Option<PdfEncryption>>) -> &mut Self {
        self.encryption = encryption.into();
        self
    }

    pub fn encryption(&self) -> Option<&PdfEncryption> {
        self.encryption.as_ref()
    }
}

fn text(value: &Option<String>) -> Option<CapabilityValue> {
    value.clone().map(CapabilityValue::Str)
}

impl OptionGroup for PdfOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::Pdf
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.session(SessionKey::PdfAuthor, text(&self.author));
        out.session(SessionKey::PdfCreator, text(&self.creator));
        out.session(SessionKey::PdfKeywords, text(&self.keywords));
        out.session(SessionKey::PdfSubject, text(&self.subject));
        out.session(SessionKey::PdfTitle, text(&self.title));

        if let Some(size) = self.page_size {
            out.session(
                SessionKey::PdfPageSize,
                Some(CapabilityValue::Str(size.keyword().to_owned())),
            );
            if let PdfPageSize::Custom { width, height } = size {
                out.session(
                    SessionKey::PdfCustomPageSize,
                    Some(CapabilityValue::Frame(Frame::new(0.0, 0.0, width, height))),
                );
            }
        }
        out.session(
            SessionKey::PdfOrientation,
            self.orientation.map(|o| {
                CapabilityValue::Str(
                    match o {
                        PdfOrientation::Portrait => "portrait",
                        PdfOrientation::Landscape => "landscape",
                    }
                    .to_owned(),
                )
            }),
        );
        out.session(
            SessionKey::PdfAsciiCompression,
            self.ascii_compression.map(CapabilityValue::Bool),
        );

        if let Some(enc) = &self.encryption {
            out.session(SessionKey::PdfUserPassword, text(&enc.user_password));
            out.session(SessionKey::PdfOwnerPassword, text(&enc.owner_password));
            if !enc.permissions.is_empty() {
                out.session(
                    SessionKey::PdfPermissions,
                    Some(CapabilityValue::Int(enc.permission_mask())),
                );
            }
            out.session(SessionKey::PdfUseAes, enc.use_aes.map(CapabilityValue::Bool));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permission_mask_collapses_duplicates() {
        let enc = PdfEncryption {
            permissions: vec![PdfPermission::Print, PdfPermission::Copy, PdfPermission::Print],
            ..Default::default()
        };
        assert_eq!(enc.permission_mask(), 4 | 16);
    }

    fn session_keys(opts: &PdfOptions) -> Vec<SessionKey> {
        let mut chars = crate::characteristics::AcquireCharacteristics::new();
        chars.pdf = opts.clone();
        chars.plan().session_settings.iter().map(|s| s.key).collect()
    }

    #[test]
    fn unset_encryption_fields_emit_nothing() {
        let mut opts = PdfOptions::default();
        opts.enable(true).set_encryption(PdfEncryption::default());
        assert!(session_keys(&opts).is_empty());

        opts.set_encryption(PdfEncryption {
            owner_password: Some("s3cret".into()),
            use_aes: Some(false),
            ..Default::default()
        });
        assert_eq!(
            session_keys(&opts),
            vec![SessionKey::PdfOwnerPassword, SessionKey::PdfUseAes]
        );
    }

    #[test]
    fn governs_no_capabilities() {
        assert!(PdfOptions::default().affected_caps().is_empty());
    }

    #[test]
    fn encryption_defaults_to_none() {
        let mut opts = PdfOptions::default();
        assert!(opts.encryption().is_none());
        opts.set_encryption(PdfEncryption {
            owner_password: Some("s3cret".into()),
            ..Default::default()
        });
        assert_eq!(
            opts.encryption().and_then(|e| e.owner_password.as_deref()),
            Some("s3cret")
        );
    }
}
