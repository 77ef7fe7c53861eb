use crate::analysis::keywords::ScoredKeyword;
use crate::analysis::readability::ReadabilityResult;
use crate::analysis::suggestions::{
    self, LengthBand, META_DESCRIPTION_LENGTH_RANGE, TITLE_LENGTH_RANGE,
};
use crate::signals::PageSignals;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Number of keywords plotted in the chart and listed in exports
pub const CHART_KEYWORDS: usize = 5;

/// Width of the widest bar in the text chart
const CHART_WIDTH: usize = 30;

/// Status shown next to a summary value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Good,
    Warning,
    Bad,
    Neutral,
}

impl Condition {
    fn marker(self) -> &'static str {
        match self {
            Condition::Good => "[ok]",
            Condition::Warning => "[!!]",
            Condition::Bad => "[xx]",
            Condition::Neutral => "    ",
        }
    }
}

/// One row of the page summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoItem {
    pub label: String,
    pub value: String,
    pub condition: Condition,
}

impl SeoItem {
    fn new(label: &str, value: impl ToString, condition: Condition) -> Self {
        Self {
            label: label.to_string(),
            value: value.to_string(),
            condition,
        }
    }

    fn render(&self) -> String {
        format!("{} {:<20} {}", self.condition.marker(), self.label, self.value)
    }
}

pub fn title_condition(length: usize) -> Condition {
    match LengthBand::classify(length, TITLE_LENGTH_RANGE) {
        LengthBand::Good => Condition::Good,
        _ => Condition::Warning,
    }
}

pub fn meta_description_condition(length: usize) -> Condition {
    if length == 0 {
        return Condition::Bad;
    }
    match LengthBand::classify(length, META_DESCRIPTION_LENGTH_RANGE) {
        LengthBand::Good => Condition::Good,
        _ => Condition::Warning,
    }
}

/// Summary rows for a page, in display order
pub fn summary_items(signals: &PageSignals) -> Vec<SeoItem> {
    let meta_value = if signals.meta_description.is_empty() {
        "Missing!"
    } else {
        signals.meta_description.as_str()
    };
    let missing_alt = signals.img_without_alt.len();

    vec![
        SeoItem::new(
            "Title",
            &signals.title,
            title_condition(signals.title_len()),
        ),
        SeoItem::new(
            "Meta Description",
            meta_value,
            meta_description_condition(signals.meta_description_len()),
        ),
        SeoItem::new(
            "H1 Tags",
            signals.h1_tags,
            if signals.h1_tags != 1 {
                Condition::Warning
            } else {
                Condition::Good
            },
        ),
        SeoItem::new(
            "H2 Tags",
            signals.h2_tags,
            if signals.h2_tags < 2 {
                Condition::Warning
            } else {
                Condition::Good
            },
        ),
        SeoItem::new(
            "Images without alt",
            missing_alt,
            if missing_alt > 0 {
                Condition::Bad
            } else {
                Condition::Good
            },
        ),
        SeoItem::new("Internal Links", signals.internal_links, Condition::Neutral),
        SeoItem::new("External Links", signals.external_links, Condition::Neutral),
    ]
}

/// Bar chart of keyword frequency for the top keywords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordChart {
    pub label: String,
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
}

impl KeywordChart {
    /// Builds a chart of the top keywords; `None` when there are none
    pub fn from_keywords(keywords: &[ScoredKeyword]) -> Option<Self> {
        if keywords.is_empty() {
            return None;
        }
        let top = &keywords[..keywords.len().min(CHART_KEYWORDS)];
        Some(Self {
            label: "Keyword Frequency".to_string(),
            labels: top.iter().map(|k| k.word.clone()).collect(),
            counts: top.iter().map(|k| k.count).collect(),
        })
    }

    /// Horizontal bars scaled so the largest count fills the chart width
    pub fn render(&self) -> String {
        let max = self.counts.iter().copied().max().unwrap_or(0).max(1);
        let label_width = self.labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = String::new();
        for (label, &count) in self.labels.iter().zip(&self.counts) {
            let bar = (count * CHART_WIDTH).div_ceil(max);
            let _ = writeln!(
                out,
                "  {:<width$} | {} {}",
                label,
                "#".repeat(bar),
                count,
                width = label_width
            );
        }
        out
    }
}

/// Everything produced by analysing one page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoReport {
    /// Page the report describes
    pub url: String,
    pub signals: PageSignals,
    pub readability: ReadabilityResult,
    pub suggestions: Vec<String>,
    pub items: Vec<SeoItem>,
    pub chart: Option<KeywordChart>,
}

impl SeoReport {
    /// Evaluates the signals and assembles the report
    pub fn build(url: impl Into<String>, signals: PageSignals) -> Self {
        let readability = ReadabilityResult::evaluate(&signals.readability_text());
        let suggestions = suggestions::generate_suggestions(&signals, &readability);
        let items = summary_items(&signals);
        let chart = KeywordChart::from_keywords(&signals.keywords);

        Self {
            url: url.into(),
            signals,
            readability,
            suggestions,
            items,
            chart,
        }
    }

    /// Swaps in a new chart and hands back the previous one
    pub fn replace_chart(&mut self, chart: Option<KeywordChart>) -> Option<KeywordChart> {
        std::mem::replace(&mut self.chart, chart)
    }

    /// Top keywords as "word (count)", comma separated
    pub fn top_keywords_label(&self, limit: usize) -> String {
        self.signals
            .keywords
            .iter()
            .take(limit)
            .map(|k| format!("{} ({})", k.word, k.count))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Plain-text rendering for the terminal
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "SEO analysis: {}", self.url);
        let _ = writeln!(out);

        let _ = writeln!(out, "Content Improvement Suggestions");
        let _ = writeln!(
            out,
            "  Readability Score: {}",
            self.readability.display_score()
        );
        let _ = writeln!(out, "  {}", self.readability.suggestion);
        for suggestion in &self.suggestions {
            let _ = writeln!(out, "  - {}", suggestion);
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Page Summary");
        for item in &self.items {
            let _ = writeln!(out, "  {}", item.render());
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Top Keywords");
        if self.signals.keywords.is_empty() {
            let _ = writeln!(out, "  (none)");
        } else {
            let _ = writeln!(out, "  {}", self.top_keywords_label(usize::MAX));
        }
        if let Some(chart) = &self.chart {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", chart.label);
            out.push_str(&chart.render());
        }
        let _ = writeln!(out);

        let _ = writeln!(out, "Images Missing Alt Text");
        if self.signals.img_without_alt.is_empty() {
            let _ = writeln!(out, "  No images missing alt text. Great job!");
        } else {
            for img in &self.signals.img_without_alt {
                let _ = writeln!(out, "  {} ({})", img.src, img.dimensions);
            }
        }

        out
    }
}
