// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Feeder, duplex, and paper handling.

use serde::{Deserialize, Serialize};

use twainkit_core::capability::*;
use twainkit_core::{FeederAlignment, FeederOrder, FeederType, PaperHandling};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaperHandlingOptions {
    enabled: bool,
    feeder_enabled: Option<bool>,
    auto_feed: Option<bool>,
    duplex_enabled: Option<bool>,
    feeder_alignment: Option<FeederAlignment>,
    feeder_order: Option<FeederOrder>,
    feeder_prep: Option<bool>,
    paper_handling: Option<PaperHandling>,
    automatic_sense_medium: Option<bool>,
    feeder_type: Option<FeederType>,
}

impl PaperHandlingOptions {
    enable_switch!();

    scalar_accessors! {
        /// Scan from the document feeder instead of the flatbed.
        feeder_enabled, set_feeder_enabled: bool;
        auto_feed, set_auto_feed: bool;
        duplex_enabled, set_duplex_enabled: bool;
        feeder_alignment, set_feeder_alignment: FeederAlignment;
        feeder_order, set_feeder_order: FeederOrder;
        feeder_prep, set_feeder_prep: bool;
        paper_handling, set_paper_handling: PaperHandling;
        /// Pick feeder or flatbed from whichever holds paper.
        automatic_sense_medium, set_automatic_sense_medium: bool;
        feeder_type, set_feeder_type: FeederType;
    }
}

impl OptionGroup for PaperHandlingOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::PaperHandling
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        // Feeder must be enabled before auto-feed and duplex are accepted.
        out.bool(CAP_FEEDERENABLED, self.feeder_enabled);
        out.bool(CAP_AUTOFEED, self.auto_feed);
        out.bool(CAP_DUPLEXENABLED, self.duplex_enabled);
        out.enumerated(CAP_FEEDERALIGNMENT, self.feeder_alignment);
        out.enumerated(CAP_FEEDERORDER, self.feeder_order);
        out.bool(CAP_FEEDERPREP, self.feeder_prep);
        out.enumerated(CAP_PAPERHANDLING, self.paper_handling);
        out.bool(CAP_AUTOMATICSENSEMEDIUM, self.automatic_sense_medium);
        out.enumerated(ICAP_FEEDERTYPE, self.feeder_type);
    }
}
