// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory data source for tests, demos, and CI machines without scanner
// hardware.
//
// Behaves like a cooperative driver: it remembers what it was told, refuses
// capabilities it was configured not to support, and enforces numeric ranges.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use twainkit_core::capability::{CAP_XFERCOUNT, CAPABILITY_NAMES};
use twainkit_core::error::{Result, TwainError};
use twainkit_core::{CapabilityId, CapabilityValue};

use crate::acquire::{AcquireListener, AcquireSummary, SimulatedPage, run_acquisition};
use crate::groups::ALL_PAGES;
use crate::negotiate::CapabilityNegotiator;
use crate::plan::{SessionKey, SessionSetting};

/// A fake TWAIN source.
#[derive(Debug, Clone)]
pub struct SimulatedSource {
    name: String,
    open: bool,
    supported: BTreeSet<CapabilityId>,
    ranges: HashMap<CapabilityId, (f64, f64)>,
    values: HashMap<CapabilityId, CapabilityValue>,
    session: HashMap<SessionKey, CapabilityValue>,
}

impl SimulatedSource {
    /// An open source supporting every known capability.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            open: true,
            supported: CAPABILITY_NAMES.iter().map(|(id, _)| *id).collect(),
            ranges: HashMap::new(),
            values: HashMap::new(),
            session: HashMap::new(),
        }
    }

    /// Drop support for the given capabilities.
    pub fn without(mut self, caps: impl IntoIterator<Item = CapabilityId>) -> Self {
        for cap in caps {
            self.supported.remove(&cap);
        }
        self
    }

    /// Support only the given capabilities.
    pub fn with_only(mut self, caps: impl IntoIterator<Item = CapabilityId>) -> Self {
        self.supported = caps.into_iter().collect();
        self
    }

    /// Advertise and enforce an inclusive range for a numeric capability.
    pub fn with_range(mut self, cap: CapabilityId, min: f64, max: f64) -> Self {
        self.ranges.insert(cap, (min, max));
        self
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn supports(&self, cap: CapabilityId) -> bool {
        self.supported.contains(&cap)
    }

    pub fn session_value(&self, key: SessionKey) -> Option<&CapabilityValue> {
        self.session.get(&key)
    }

    /// Transfer pages through `listener`, honouring the negotiated
    /// `CAP_XFERCOUNT`.
    pub fn acquire<L>(&self, pages: &[SimulatedPage], listener: &mut L) -> Result<AcquireSummary>
    where
        L: AcquireListener + ?Sized,
    {
        if !self.open {
            return Err(TwainError::SourceNotOpen);
        }
        let transfer_count = self
            .values
            .get(&CAP_XFERCOUNT)
            .and_then(CapabilityValue::as_int)
            .unwrap_or(ALL_PAGES);
        debug!(source = %self.name, transfer_count, pages = pages.len(), "starting acquisition");
        Ok(run_acquisition(pages, transfer_count, listener))
    }
}

impl CapabilityNegotiator for SimulatedSource {
    fn set_capability(&mut self, cap: CapabilityId, value: &CapabilityValue) -> Result<()> {
        if !self.open {
            return Err(TwainError::SourceNotOpen);
        }
        if !self.supported.contains(&cap) {
            return Err(TwainError::CapabilityUnsupported(cap));
        }
        if let (Some(&(min, max)), Some(v)) = (self.ranges.get(&cap), value.as_float()) {
            if !(min..=max).contains(&v) {
                return Err(TwainError::ValueRejected {
                    cap,
                    reason: format!("{v} not in [{min}, {max}]"),
                });
            }
        }
        self.values.insert(cap, value.clone());
        Ok(())
    }

    fn current_value(&self, cap: CapabilityId) -> Option<CapabilityValue> {
        self.values.get(&cap).cloned()
    }

    fn range(&self, cap: CapabilityId) -> Option<(f64, f64)> {
        self.ranges.get(&cap).copied()
    }

    fn apply_session_setting(&mut self, setting: &SessionSetting) -> Result<()> {
        if !self.open {
            warn!(key = ?setting.key, "session setting on closed source");
            return Err(TwainError::SourceNotOpen);
        }
        self.session.insert(setting.key, setting.value.clone());
        Ok(())
    }
}
