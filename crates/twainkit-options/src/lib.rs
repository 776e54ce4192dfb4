// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// twainkit options: the acquisition option groups, their translation into
// negotiation plans, and a tolerant driver that applies a plan to a source.
// Capability ids and wire enumerations live in `twainkit-core`.

pub mod acquire;
pub mod characteristics;
pub mod group;
pub mod groups;
pub mod negotiate;
pub mod plan;
pub mod simulated;

pub use acquire::{
    AcquireListener, AcquireSummary, DiscardBlankPages, PageDecision, PageInfo, SimulatedPage,
    StripDecision, StripInfo,
};
pub use characteristics::AcquireCharacteristics;
pub use group::{Emitter, GroupKind, OptionGroup};
pub use negotiate::{
    CapabilityNegotiator, InstructionOutcome, NegotiationReport, Outcome, negotiate,
};
pub use plan::{CapabilityInstruction, NegotiationPlan, SessionKey, SessionSetting};
pub use simulated::SimulatedSource;
