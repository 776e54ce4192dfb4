// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Negotiation plans: the ordered instructions produced from an option set.
//
// A plan is built once from a populated `AcquireCharacteristics` and consumed
// read-only by the negotiation driver.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::info;

use twainkit_core::{CapabilityId, CapabilityValue, PlanId};

use crate::characteristics::AcquireCharacteristics;
use crate::group::{Emitter, GroupKind};

/// One "set capability" instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityInstruction {
    /// Group the field belongs to.
    pub group: GroupKind,
    pub cap: CapabilityId,
    pub value: CapabilityValue,
}

/// Acquisition-session settings that are not device capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKey {
    FileName,
    AutoCreateDirectory,
    MaxAcquisitions,
    ShowUi,
    ShowUiOnly,
    PdfAuthor,
    PdfCreator,
    PdfKeywords,
    PdfSubject,
    PdfTitle,
    PdfPageSize,
    PdfCustomPageSize,
    PdfOrientation,
    PdfAsciiCompression,
    PdfUserPassword,
    PdfOwnerPassword,
    PdfPermissions,
    PdfUseAes,
}

impl SessionKey {
    /// Whether the value must be kept out of logs.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::PdfUserPassword | Self::PdfOwnerPassword)
    }
}

/// A session setting produced by a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSetting {
    pub group: GroupKind,
    pub key: SessionKey,
    pub value: CapabilityValue,
}

/// The complete, ordered output of translating an option set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NegotiationPlan {
    pub id: PlanId,
    pub instructions: Vec<CapabilityInstruction>,
    pub session_settings: Vec<SessionSetting>,
}

impl NegotiationPlan {
    /// Walk every enabled group in registry order and collect its instructions.
    pub fn build(characteristics: &AcquireCharacteristics) -> Self {
        let mut instructions = Vec::new();
        let mut session_settings = Vec::new();

        characteristics.for_each_group(|group, _caps| {
            if !group.is_enabled() {
                return;
            }
            let mut out = Emitter::new(group.kind(), &mut instructions, &mut session_settings);
            group.emit(&mut out);
        });

        let plan = Self {
            id: PlanId::new(),
            instructions,
            session_settings,
        };
        info!(
            plan = %plan.id,
            instructions = plan.instructions.len(),
            session_settings = plan.session_settings.len(),
            "built negotiation plan"
        );
        plan
    }

    /// True when no capability and no session setting would be touched.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty() && self.session_settings.is_empty()
    }

    /// The instruction for `cap`, if the plan sets it.
    pub fn instruction(&self, cap: CapabilityId) -> Option<&CapabilityInstruction> {
        self.instructions.iter().find(|i| i.cap == cap)
    }

    pub fn session_setting(&self, key: SessionKey) -> Option<&SessionSetting> {
        self.session_settings.iter().find(|s| s.key == key)
    }

    /// Instructions contributed by one group.
    pub fn instructions_for(
        &self,
        group: GroupKind,
    ) -> impl Iterator<Item = &CapabilityInstruction> {
        self.instructions.iter().filter(move |i| i.group == group)
    }

    /// SHA-256 over the ordered instructions and session settings, as lowercase hex.
    ///
    /// The plan id is excluded, so equal option sets give equal fingerprints.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for instruction in &self.instructions {
            hasher.update(instruction.cap.raw().to_be_bytes());
            hasher.update(instruction.value.canonical_bytes());
        }
        hasher.update(b"--session--");
        for setting in &self.session_settings {
            hasher.update(format!("{:?}", setting.key).as_bytes());
            hasher.update(setting.value.canonical_bytes());
        }
        hex::encode(hasher.finalize())
    }
}
