//! Parse command - extract contact fields from a single card.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info, warn};

use cardscan_core::{CardParser, CardScanConfig, ExtractionResult, OcrSpaceResponse, SAMPLE_CARD_TEXT};

use super::config::load_config;
use super::output::{detected_fields, format_result, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input file with recognized card text ("-" reads stdin)
    #[arg(required_unless_present = "sample")]
    input: Option<PathBuf>,

    /// Treat the input as an OCR.space JSON response
    #[arg(long)]
    ocr_json: bool,

    /// Parse the built-in sample card instead of an input file
    #[arg(long, conflicts_with_all = ["input", "ocr_json"])]
    sample: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Show extraction confidence and detected fields
    #[arg(long)]
    show_confidence: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    let text = if args.sample {
        SAMPLE_CARD_TEXT.to_string()
    } else {
        let input = args
            .input
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("No input file given"))?;
        read_card_text(input, args.ocr_json)?
    };

    let result = parse_text(&text, &config);

    // Format output
    let output = format_result(&result, args.format, config.output.pretty_json)?;

    // Write output
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_confidence {
        println!();
        println!(
            "{} Extraction confidence: {:.1}%",
            style("ℹ").blue(),
            result.card.confidence * 100.0
        );
        println!(
            "{} Detected fields: {}",
            style("ℹ").blue(),
            detected_fields(&result.card)
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Read recognized text from a file or stdin, unwrapping OCR responses.
pub fn read_card_text(input: &Path, ocr_json: bool) -> anyhow::Result<String> {
    let raw = if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        if !input.exists() {
            anyhow::bail!("Input file not found: {}", input.display());
        }
        info!("Reading card text from {}", input.display());
        fs::read_to_string(input)?
    };

    if ocr_json {
        let response = OcrSpaceResponse::from_json(&raw)?;
        Ok(response.full_text()?)
    } else {
        Ok(raw)
    }
}

/// Parse text with the configured parser, flagging weak results.
pub fn parse_text(text: &str, config: &CardScanConfig) -> ExtractionResult {
    if text.trim().is_empty() {
        warn!("Card text is empty");
    }

    let result = CardParser::from_config(&config.extraction).parse(text);

    let threshold = config.extraction.low_confidence_threshold;
    if result.card.confidence < threshold {
        warn!(
            "Low extraction confidence {:.2} (threshold {:.2}), review the fields",
            result.card.confidence, threshold
        );
    }

    result
}
