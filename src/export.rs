//! Writes an analysis to disk.
//!
//! An export directory holds:
//! - `seo_analysis_results.json`: the complete report
//! - `seo_analysis_results.csv`: a summary row, the suggestions and the
//!   image URLs missing alt text, one section after another
//! - `keywords_chart.csv`: chart labels and counts (only when there is a chart)

use crate::error::Result;
use crate::report::{CHART_KEYWORDS, SeoReport};
use std::fs;
use std::path::{Path, PathBuf};

pub const REPORT_JSON: &str = "seo_analysis_results.json";
pub const REPORT_CSV: &str = "seo_analysis_results.csv";
pub const CHART_CSV: &str = "keywords_chart.csv";

const SUMMARY_HEADER: [&str; 9] = [
    "title",
    "metaDescription",
    "h1Tags",
    "h2Tags",
    "imagesWithoutAlt",
    "internalLinks",
    "externalLinks",
    "topKeywords",
    "readabilityScore",
];

/// Files written by an export
#[derive(Debug, Clone, Default)]
pub struct ExportSummary {
    pub files: Vec<PathBuf>,
}

/// Export a report into `dir`, creating the directory if needed
pub fn export_report(report: &SeoReport, dir: impl AsRef<Path>) -> Result<ExportSummary> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    ::log::info!("Exporting SEO report for {} to {}", report.url, dir.display());

    let mut summary = ExportSummary::default();

    let json_path = dir.join(REPORT_JSON);
    fs::write(&json_path, serde_json::to_string_pretty(report)?)?;
    summary.files.push(json_path);

    let csv_path = dir.join(REPORT_CSV);
    write_report_csv(report, &csv_path)?;
    summary.files.push(csv_path);

    if report.chart.is_some() {
        let chart_path = dir.join(CHART_CSV);
        write_chart_csv(report, &chart_path)?;
        summary.files.push(chart_path);
    } else {
        ::log::debug!("No keyword chart, exporting report files only");
    }

    ::log::info!("Exported {} files", summary.files.len());
    Ok(summary)
}

fn write_report_csv(report: &SeoReport, path: &Path) -> Result<()> {
    let signals = &report.signals;
    let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    wtr.write_record(SUMMARY_HEADER)?;
    wtr.write_record([
        signals.title.clone(),
        signals.meta_description.clone(),
        signals.h1_tags.to_string(),
        signals.h2_tags.to_string(),
        signals.img_without_alt.len().to_string(),
        signals.internal_links.to_string(),
        signals.external_links.to_string(),
        report.top_keywords_label(CHART_KEYWORDS),
        report.readability.display_score(),
    ])?;

    wtr.write_record(["Content Improvement Suggestions"])?;
    wtr.write_record(["The following suggestions are based on the analysis:"])?;
    for suggestion in &report.suggestions {
        wtr.write_record([suggestion])?;
    }

    wtr.write_record(["Missed Image URLs"])?;
    wtr.write_record(["The following images are missing alt text:"])?;
    for img in &signals.img_without_alt {
        wtr.write_record([&img.src])?;
    }

    wtr.flush()?;
    Ok(())
}

fn write_chart_csv(report: &SeoReport, path: &Path) -> Result<()> {
    let Some(chart) = &report.chart else {
        return Ok(());
    };

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["keyword", "count"])?;
    for (label, count) in chart.labels.iter().zip(&chart.counts) {
        wtr.write_record([label.clone(), count.to_string()])?;
    }
    wtr.flush()?;
    Ok(())
}
