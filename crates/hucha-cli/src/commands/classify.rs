//! Merchant classification commands

use std::path::Path;

use anyhow::{Context, Result};

use hucha_core::MerchantClassifier;

pub fn cmd_classify_description(description: &str) -> Result<()> {
    let classifier = MerchantClassifier::default();

    match classifier.classify(description) {
        Some(classification) => {
            let sub = classification
                .sub_category
                .as_deref()
                .map(|s| format!(" / {}", s))
                .unwrap_or_default();
            println!("{} → {}{}", description, classification.category, sub);
        }
        None => println!("{} → (sin categoría)", description),
    }

    Ok(())
}

/// Classify every row of a CSV file
///
/// Uses the first column whose header mentions "desc"; falls back to the
/// first column for headerless exports.
pub fn cmd_classify_file(path: &Path) -> Result<()> {
    let classifier = MerchantClassifier::default();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open CSV {}", path.display()))?;

    let headers = reader.headers().context("Failed to read CSV headers")?;
    let column = headers
        .iter()
        .position(|h| h.to_lowercase().contains("desc"))
        .unwrap_or(0);

    let mut total = 0usize;
    let mut matched = 0usize;

    for record in reader.records() {
        let record = record.context("Failed to read CSV record")?;
        let Some(description) = record.get(column) else {
            continue;
        };
        if description.trim().is_empty() {
            continue;
        }

        total += 1;
        match classifier.classify(description) {
            Some(classification) => {
                matched += 1;
                let sub = classification
                    .sub_category
                    .as_deref()
                    .map(|s| format!(" / {}", s))
                    .unwrap_or_default();
                println!("{} → {}{}", description, classification.category, sub);
            }
            None => println!("{} → (sin categoría)", description),
        }
    }

    println!();
    println!("📊 Classified {}/{} descriptions", matched, total);

    Ok(())
}
