// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Tolerant negotiation driver.
//
// Applies a plan instruction by instruction. A source refusing one setting is
// recorded and logged, and the remaining instructions are still attempted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use twainkit_core::error::Result;
use twainkit_core::{CapabilityId, CapabilityValue, NegotiationConfig, OutOfRangePolicy, PlanId};

use crate::plan::{CapabilityInstruction, NegotiationPlan, SessionKey, SessionSetting};

/// The device side of negotiation: an open data source.
pub trait CapabilityNegotiator {
    /// Apply one capability value.
    fn set_capability(&mut self, cap: CapabilityId, value: &CapabilityValue) -> Result<()>;

    /// Value currently in effect, if the source can report it.
    fn current_value(&self, _cap: CapabilityId) -> Option<CapabilityValue> {
        None
    }

    /// Inclusive numeric range the source advertises for `cap`.
    fn range(&self, _cap: CapabilityId) -> Option<(f64, f64)> {
        None
    }

    /// Apply a session-level setting. Sources without session state accept
    /// everything.
    fn apply_session_setting(&mut self, _setting: &SessionSetting) -> Result<()> {
        Ok(())
    }
}

/// What happened to one instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Accepted. `read_back` is filled when the config asks for it.
    Applied { read_back: Option<CapabilityValue> },
    /// The source refused it.
    Rejected { reason: String },
    /// Not sent, e.g. outside the advertised range under `SkipAndWarn`.
    Skipped { reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstructionOutcome {
    pub instruction: CapabilityInstruction,
    pub outcome: Outcome,
}

/// Result of running a plan against a source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NegotiationReport {
    pub plan_id: PlanId,
    pub fingerprint: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub outcomes: Vec<InstructionOutcome>,
    /// Session settings the source refused, with the reason.
    pub session_failures: Vec<(SessionKey, String)>,
}

impl NegotiationReport {
    pub fn applied(&self) -> impl Iterator<Item = &InstructionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Applied { .. }))
    }

    pub fn rejected(&self) -> impl Iterator<Item = &InstructionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Rejected { .. }))
    }

    pub fn skipped(&self) -> impl Iterator<Item = &InstructionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.outcome, Outcome::Skipped { .. }))
    }

    /// Every instruction and session setting was accepted.
    pub fn is_clean(&self) -> bool {
        self.applied().count() == self.outcomes.len() && self.session_failures.is_empty()
    }

    pub fn outcome(&self, cap: CapabilityId) -> Option<&Outcome> {
        self.outcomes
            .iter()
            .find(|o| o.instruction.cap == cap)
            .map(|o| &o.outcome)
    }
}

/// Run every instruction of `plan` against `negotiator`.
///
/// Never fails: per-instruction errors end up in the report.
pub fn negotiate<N>(
    plan: &NegotiationPlan,
    negotiator: &mut N,
    config: &NegotiationConfig,
) -> NegotiationReport
where
    N: CapabilityNegotiator + ?Sized,
{
    let started_at = Utc::now();
    let mut outcomes = Vec::with_capacity(plan.instructions.len());

    for instruction in &plan.instructions {
        if config.trace_instructions {
            debug!(
                group = %instruction.group,
                cap = %instruction.cap,
                value = %instruction.value,
                "set capability"
            );
        }
        let outcome = apply_one(instruction, negotiator, config);
        outcomes.push(InstructionOutcome {
            instruction: instruction.clone(),
            outcome,
        });
    }

    let mut session_failures = Vec::new();
    for setting in &plan.session_settings {
        if let Err(e) = negotiator.apply_session_setting(setting) {
            warn!(key = ?setting.key, error = %e, "session setting refused");
            session_failures.push((setting.key, e.to_string()));
        }
    }

    let report = NegotiationReport {
        plan_id: plan.id,
        fingerprint: plan.fingerprint(),
        started_at,
        finished_at: Utc::now(),
        outcomes,
        session_failures,
    };
    info!(
        plan = %report.plan_id,
        applied = report.applied().count(),
        rejected = report.rejected().count(),
        skipped = report.skipped().count(),
        "negotiation finished"
    );
    report
}

fn apply_one<N>(
    instruction: &CapabilityInstruction,
    negotiator: &mut N,
    config: &NegotiationConfig,
) -> Outcome
where
    N: CapabilityNegotiator + ?Sized,
{
    let cap = instruction.cap;

    if config.out_of_range == OutOfRangePolicy::SkipAndWarn {
        if let (Some((min, max)), Some(v)) = (negotiator.range(cap), instruction.value.as_float()) {
            if !(min..=max).contains(&v) {
                let reason = format!("{v} outside advertised range [{min}, {max}]");
                warn!(cap = %cap, %reason, "skipping instruction");
                return Outcome::Skipped { reason };
            }
        }
    }

    match negotiator.set_capability(cap, &instruction.value) {
        Ok(()) => {
            let read_back = if config.read_back {
                negotiator.current_value(cap)
            } else {
                None
            };
            Outcome::Applied { read_back }
        }
        Err(e) => {
            // Unsupported settings are expected; keep going.
            warn!(cap = %cap, error = %e, "source refused capability");
            Outcome::Rejected {
                reason: e.to_string(),
            }
        }
    }
}
