// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Values carried by a capability "set" instruction.

use serde::{Deserialize, Serialize};

/// Rectangular acquisition frame, in the units negotiated through ICAP_UNITS.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Frame {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// Wire representation of a capability value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CapabilityValue {
    Bool(bool),
    Int(i32),
    Float(f64),
    Str(String),
    IntList(Vec<i32>),
    StrList(Vec<String>),
    Frame(Frame),
}

impl CapabilityValue {
    /// Integer view of scalar values. Booleans map to TW_BOOL (0/1).
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Bool(b) => Some(i32::from(*b)),
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(f64::from(*i)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// False for a NaN or infinite number, which JSON cannot carry.
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Float(v) => v.is_finite(),
            Self::Frame(fr) => [fr.left, fr.top, fr.right, fr.bottom]
                .iter()
                .all(|v| v.is_finite()),
            _ => true,
        }
    }

    /// Canonical byte encoding used when fingerprinting a plan.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            Self::Bool(b) => {
                out.push(b'b');
                out.push(u8::from(*b));
            }
            Self::Int(i) => {
                out.push(b'i');
                out.extend_from_slice(&i.to_be_bytes());
            }
            Self::Float(f) => {
                out.push(b'f');
                out.extend_from_slice(&f.to_bits().to_be_bytes());
            }
            Self::Str(s) => {
                out.push(b's');
                push_str(&mut out, s);
            }
            Self::IntList(v) => {
                out.push(b'I');
                out.extend_from_slice(&(v.len() as u32).to_be_bytes());
                for i in v {
                    out.extend_from_slice(&i.to_be_bytes());
                }
            }
            Self::StrList(v) => {
                out.push(b'S');
                out.extend_from_slice(&(v.len() as u32).to_be_bytes());
                for s in v {
                    push_str(&mut out, s);
                }
            }
            Self::Frame(fr) => {
                out.push(b'F');
                for edge in [fr.left, fr.top, fr.right, fr.bottom] {
                    out.extend_from_slice(&edge.to_bits().to_be_bytes());
                }
            }
        }
        out
    }
}

fn push_str(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(&(s.len() as u32).to_be_bytes());
    out.extend_from_slice(s.as_bytes());
}

impl std::fmt::Display for CapabilityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::IntList(v) => write!(f, "{v:?}"),
            Self::StrList(v) => write!(f, "{v:?}"),
            Self::Frame(fr) => write!(
                f,
                "[{}, {}, {}, {}]",
                fr.left, fr.top, fr.right, fr.bottom
            ),
        }
    }
}
