// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// twainkit demo
//
// Loads an acquisition profile (or builds a sample one), prints the resulting
// negotiation plan, negotiates it against a simulated source that lacks a few
// capabilities, then runs an acquisition that drops blank pages.
//
//     twainkit-demo [PROFILE.json] [--config CONFIG.json]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use twainkit_core::capability::{ICAP_BARCODEDETECTIONENABLED, ICAP_XRESOLUTION};
use twainkit_core::{
    BarcodeType, CapabilityValue, Compression, FileFormat, NegotiationConfig, PixelType, Result,
    Units,
};
use twainkit_options::groups::ALL_PAGES;
use twainkit_options::{
    AcquireCharacteristics, DiscardBlankPages, Outcome, SessionKey, SimulatedPage, SimulatedSource,
    negotiate,
};

/// Negotiate an acquisition profile against a simulated TWAIN source
#[derive(Debug, Parser)]
#[command(name = "twainkit-demo")]
#[command(version)]
#[command(about = "Negotiate an acquisition profile against a simulated TWAIN source", long_about = None)]
struct Args {
    /// Acquisition profile (JSON). A built-in sample is used when omitted
    profile: Option<PathBuf>,

    /// Negotiation config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Duplex greyscale document scan with QR detection and a PDF output file.
fn sample_profile() -> AcquireCharacteristics {
    let mut chars = AcquireCharacteristics::new();
    chars.general.set_transfer_count(ALL_PAGES).set_units(Units::Inches);
    chars.resolution.enable(true).set_resolution(300.0);
    chars.image_type.enable(true).set_pixel_type(PixelType::Gray);
    chars.compression.enable(true).set_compression(Compression::Jpeg);
    chars.paper_handling.enable(true).set_duplex_enabled(true);
    chars
        .barcode_detection
        .enable(true)
        .set_search_priorities([BarcodeType::QrCode])
        .set_max_retries(3);
    chars
        .file_transfer
        .enable(true)
        .set_file_name("scan.pdf")
        .set_file_format(FileFormat::Pdf);
    chars
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => NegotiationConfig::load(path)?,
        None => NegotiationConfig::default(),
    };
    let profile = match &args.profile {
        Some(path) => AcquireCharacteristics::load_profile(path)?,
        None => {
            tracing::info!("no profile given, using built-in sample");
            sample_profile()
        }
    };

    let plan = profile.plan();
    println!("plan {} fingerprint {}", plan.id, plan.fingerprint());
    for instruction in &plan.instructions {
        println!(
            "  [{}] {} = {}",
            instruction.group, instruction.cap, instruction.value
        );
    }
    for setting in &plan.session_settings {
        if setting.key.is_secret() {
            println!("  [{}] {:?} = <redacted>", setting.group, setting.key);
        } else {
            println!("  [{}] {:?} = {}", setting.group, setting.key, setting.value);
        }
    }

    // A budget flatbed: no barcode engine, 600 dpi ceiling.
    let mut source = SimulatedSource::new("Simulated Flatbed")
        .without([ICAP_BARCODEDETECTIONENABLED])
        .with_range(ICAP_XRESOLUTION, 75.0, 600.0);

    let report = negotiate(&plan, &mut source, &config);
    for o in report.outcomes.iter() {
        match &o.outcome {
            Outcome::Applied { .. } => {}
            Outcome::Rejected { reason } => println!("  rejected {}: {reason}", o.instruction.cap),
            Outcome::Skipped { reason } => println!("  skipped {}: {reason}", o.instruction.cap),
        }
    }
    println!(
        "negotiated with {}: {} applied, {} rejected, {} skipped",
        source.name(),
        report.applied().count(),
        report.rejected().count(),
        report.skipped().count()
    );

    let feeder = [
        SimulatedPage::letter(0.18),
        SimulatedPage::blank(),
        SimulatedPage::letter(0.22),
        SimulatedPage::letter(0.004),
        SimulatedPage::letter(0.31),
    ];
    let summary = source.acquire(&feeder, &mut DiscardBlankPages::default())?;
    println!(
        "acquired {} pages, discarded {} blank, {} strips",
        summary.pages_kept, summary.pages_discarded, summary.strips_transferred
    );

    if let Some(name) = source
        .session_value(SessionKey::FileName)
        .and_then(CapabilityValue::as_str)
    {
        println!("source writes to {name}");
        for page in 0..summary.pages_kept {
            if let Some(file) = profile.file_transfer.page_file_name(page) {
                println!("  page {} -> {}", page + 1, file.display());
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    tracing::info!("twainkit demo starting");

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "demo failed");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_and_config_are_optional() {
        let args = Args::try_parse_from(["twainkit-demo"]).unwrap();
        assert!(args.profile.is_none());
        assert!(args.config.is_none());
    }

    #[test]
    fn config_accepts_equals_form() {
        let args =
            Args::try_parse_from(["twainkit-demo", "scan.json", "--config=negotiation.json"])
                .unwrap();
        assert_eq!(args.profile, Some(PathBuf::from("scan.json")));
        assert_eq!(args.config, Some(PathBuf::from("negotiation.json")));
    }

    #[test]
    fn unknown_flag_is_a_usage_error() {
        let err = Args::try_parse_from(["twainkit-demo", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_and_version_are_available() {
        let err = Args::try_parse_from(["twainkit-demo", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        let err = Args::try_parse_from(["twainkit-demo", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn sample_profile_plans_barcode_and_file_output() {
        let plan = sample_profile().plan();
        assert!(plan.instruction(ICAP_BARCODEDETECTIONENABLED).is_some());
        assert!(plan.session_setting(SessionKey::FileName).is_some());
    }
}
