// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use serde::{Deserialize, Serialize};

use twainkit_core::JobControl;
use twainkit_core::capability::CAP_JOBCONTROL;

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};

/// Job separator sheet handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobControlOptions {
    enabled: bool,
    job_control: Option<JobControl>,
}

impl JobControlOptions {
    enable_switch!();

    scalar_accessors! {
        job_control, set_job_control: JobControl;
    }
}

impl OptionGroup for JobControlOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::JobControl
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enumerated(CAP_JOBCONTROL, self.job_control);
    }
}
