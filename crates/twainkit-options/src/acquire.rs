// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Acquisition callbacks.
//
// A source hands each page over as a series of strips, then the page as a
// whole. The listener may stop the transfer after any strip and may discard a
// finished page.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One strip of image rows as it arrives.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StripInfo {
    pub page_index: usize,
    pub strip_index: usize,
    pub rows: u32,
    pub bytes: usize,
}

/// A completely transferred page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageInfo {
    pub index: usize,
    pub width: u32,
    pub height: u32,
    pub bytes: usize,
    /// Fraction of non-background pixels, 0.0 to 1.0.
    pub ink_coverage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StripDecision {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageDecision {
    Keep,
    Discard,
}

/// Receives transfer events in order.
pub trait AcquireListener {
    fn on_strip(&mut self, _strip: &StripInfo) -> StripDecision {
        StripDecision::Continue
    }

    fn on_page(&mut self, _page: &PageInfo) -> PageDecision {
        PageDecision::Keep
    }
}

/// Counters for a finished acquisition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcquireSummary {
    pub pages_kept: usize,
    pub pages_discarded: usize,
    pub strips_transferred: usize,
    /// The listener asked to stop before the transfer count was reached.
    pub stopped_early: bool,
}

impl AcquireSummary {
    pub fn pages_transferred(&self) -> usize {
        self.pages_kept + self.pages_discarded
    }
}

/// A page waiting in a simulated feeder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulatedPage {
    pub width: u32,
    pub height: u32,
    pub bytes_per_row: usize,
    pub rows_per_strip: u32,
    pub ink_coverage: f64,
}

impl SimulatedPage {
    /// A Letter page at 100 dpi, 8-bit grey.
    pub fn letter(ink_coverage: f64) -> Self {
        Self {
            width: 850,
            height: 1100,
            bytes_per_row: 850,
            rows_per_strip: 256,
            ink_coverage,
        }
    }

    pub fn blank() -> Self {
        Self::letter(0.0)
    }

    fn strips(&self) -> impl Iterator<Item = u32> + '_ {
        let per = self.rows_per_strip.max(1);
        (0..self.height.div_ceil(per)).map(move |i| per.min(self.height - i * per))
    }
}

/// Drive `listener` through `pages`, transferring at most `transfer_count`
/// pages ([`ALL_PAGES`](crate::groups::ALL_PAGES) for no limit).
pub fn run_acquisition<L>(
    pages: &[SimulatedPage],
    transfer_count: i32,
    listener: &mut L,
) -> AcquireSummary
where
    L: AcquireListener + ?Sized,
{
    // Any negative count, ALL_PAGES included, means no limit.
    let limit = usize::try_from(transfer_count).map_or(pages.len(), |n| n.min(pages.len()));

    let mut summary = AcquireSummary::default();

    'pages: for (index, page) in pages.iter().take(limit).enumerate() {
        let mut bytes = 0;
        for (strip_index, rows) in page.strips().enumerate() {
            let strip = StripInfo {
                page_index: index,
                strip_index,
                rows,
                bytes: rows as usize * page.bytes_per_row,
            };
            bytes += strip.bytes;
            summary.strips_transferred += 1;
            if listener.on_strip(&strip) == StripDecision::Stop {
                debug!(page = index, strip = strip_index, "listener stopped transfer");
                summary.stopped_early = true;
                break 'pages;
            }
        }

        let info = PageInfo {
            index,
            width: page.width,
            height: page.height,
            bytes,
            ink_coverage: page.ink_coverage,
        };
        match listener.on_page(&info) {
            PageDecision::Keep => summary.pages_kept += 1,
            PageDecision::Discard => {
                debug!(page = index, "page discarded");
                summary.pages_discarded += 1;
            }
        }
    }

    info!(
        kept = summary.pages_kept,
        discarded = summary.pages_discarded,
        strips = summary.strips_transferred,
        stopped_early = summary.stopped_early,
        "acquisition finished"
    );
    summary
}

/// Discards pages whose ink coverage is at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscardBlankPages {
    pub threshold: f64,
}

impl Default for DiscardBlankPages {
    fn default() -> Self {
        Self { threshold: 0.01 }
    }
}

impl AcquireListener for DiscardBlankPages {
    fn on_page(&mut self, page: &PageInfo) -> PageDecision {
        if page.ink_coverage <= self.threshold {
            PageDecision::Discard
        } else {
            PageDecision::Keep
        }
    }
}
