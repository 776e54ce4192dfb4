// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File transfer: the source writes images straight to disk.
//
// Transfer mechanism and file format are device capabilities. The output file
// name and directory handling belong to the acquisition session.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use twainkit_core::capability::{ICAP_IMAGEFILEFORMAT, ICAP_XFERMECH};
use twainkit_core::{CapabilityValue, FileFormat, TransferMechanism};

use crate::group::{Emitter, GroupKind, OptionGroup, enable_switch, scalar_accessors};
use crate::plan::SessionKey;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTransferOptions {
    enabled: bool,
    transfer_mechanism: Option<TransferMechanism>,
    file_format: Option<FileFormat>,
    file_name: Option<PathBuf>,
    auto_create_directory: Option<bool>,
}

impl FileTransferOptions {
    enable_switch!();

    scalar_accessors! {
        transfer_mechanism, set_transfer_mechanism: TransferMechanism;
        file_format, set_file_format: FileFormat;
        /// Create missing parent directories of the output file.
        auto_create_directory, set_auto_create_directory: bool;
    }

    /// Output file. For single-page formats the session numbers each page,
    /// see [`page_file_name`](Self::page_file_name).
    pub fn set_file_name(&mut self, path: impl Into<PathBuf>) -> &mut Self {
        self.file_name = Some(path.into());
        self
    }

    pub fn file_name(&self) -> Option<&Path> {
        self.file_name.as_deref()
    }

    /// File that receives page `index` (zero-based).
    ///
    /// Multi-page formats write every page to the configured file. Single-page
    /// formats get `<stem>_<NNNN>.<ext>`, numbered from 1. A missing extension
    /// is taken from the file format.
    pub fn page_file_name(&self, index: usize) -> Option<PathBuf> {
        let base = self.file_name.as_deref()?;
        let Some(format) = self.file_format else {
            return Some(base.to_path_buf());
        };
        let ext = base
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or(format.extension());
        if format.is_multipage() {
            return Some(base.with_extension(ext));
        }
        let stem = base
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(base.with_file_name(format!("{stem}_{:04}.{ext}", index + 1)))
    }
}

impl OptionGroup for FileTransferOptions {
    fn kind(&self) -> GroupKind {
        GroupKind::FileTransfer
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn emit(&self, out: &mut Emitter<'_>) {
        out.enumerated(ICAP_XFERMECH, self.transfer_mechanism);
        out.enumerated(ICAP_IMAGEFILEFORMAT, self.file_format);
        out.session(
            SessionKey::FileName,
            self.file_name
                .as_ref()
                .map(|p| CapabilityValue::Str(p.to_string_lossy().into_owned())),
        );
        out.session(
            SessionKey::AutoCreateDirectory,
            self.auto_create_directory.map(CapabilityValue::Bool),
        );
    }
}
