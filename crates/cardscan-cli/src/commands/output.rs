//! Output formatting shared by the parse and batch commands.

use cardscan_core::{ExtractionResult, ParsedCardInfo};

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    /// File extension used when writing to a directory.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub fn format_result(
    result: &ExtractionResult,
    format: OutputFormat,
    pretty_json: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json if pretty_json => Ok(serde_json::to_string_pretty(&result.card)?),
        OutputFormat::Json => Ok(serde_json::to_string(&result.card)?),
        OutputFormat::Csv => format_csv(result),
        OutputFormat::Text => Ok(format_text(result)),
    }
}

/// Comma-joined detected field names.
pub fn detected_fields(card: &ParsedCardInfo) -> String {
    card.detected_fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

fn format_csv(result: &ExtractionResult) -> anyhow::Result<String> {
    let card = &result.card;
    let phones = &result.phones;
    let mut wtr = csv::Writer::from_writer(vec![]);

    // Write header
    wtr.write_record([
        "name",
        "company",
        "title",
        "phone",
        "mobile",
        "landline",
        "fax",
        "email",
        "address",
        "website",
        "confidence",
        "detected_fields",
    ])?;

    // Write data
    wtr.write_record([
        card.name.as_deref().unwrap_or_default(),
        card.company.as_deref().unwrap_or_default(),
        card.title.as_deref().unwrap_or_default(),
        card.phone.as_deref().unwrap_or_default(),
        phones.mobile.as_deref().unwrap_or_default(),
        phones.landline.as_deref().unwrap_or_default(),
        phones.fax.as_deref().unwrap_or_default(),
        card.email.as_deref().unwrap_or_default(),
        card.address.as_deref().unwrap_or_default(),
        card.website.as_deref().unwrap_or_default(),
        format!("{:.2}", card.confidence).as_str(),
        detected_fields(card).as_str(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(result: &ExtractionResult) -> String {
    let card = &result.card;
    let phones = &result.phones;
    let mut output = String::new();

    let rows = [
        ("Name", &card.name),
        ("Company", &card.company),
        ("Title", &card.title),
        ("Phone", &card.phone),
        ("Email", &card.email),
        ("Website", &card.website),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            output.push_str(&format!("{:<9}{}\n", format!("{}:", label), value));
        }
    }

    if let Some(address) = &card.address {
        // Address capture may span several OCR lines
        output.push_str("Address:\n");
        for line in address.lines() {
            output.push_str(&format!("  {}\n", line.trim()));
        }
    }

    if phones.mobile.is_some() || phones.landline.is_some() || phones.fax.is_some() {
        output.push_str("\nNumbers:\n");
        if let Some(mobile) = &phones.mobile {
            output.push_str(&format!("  Mobile:   {}\n", mobile));
        }
        if let Some(landline) = &phones.landline {
            output.push_str(&format!("  Landline: {}\n", landline));
        }
        if let Some(fax) = &phones.fax {
            output.push_str(&format!("  Fax:      {}\n", fax));
        }
    }

    output.push_str(&format!(
        "\nConfidence: {:.1}% ({} fields from {} lines)\n",
        card.confidence * 100.0,
        card.detected_fields.len(),
        result.line_count
    ));

    output
}
