use clap::{Parser, ValueEnum};
use page_seo::PageSource;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "page-seo")]
#[command(about = "On-page SEO analysis: keywords, readability and content suggestions")]
#[command(version)]
pub struct Args {
    /// Page to analyse (URL for web pages, path for saved HTML files)
    pub target: String,

    /// Source type (web, file)
    #[arg(short, long, value_enum, default_value_t = SourceArg::Web)]
    pub type_: SourceArg,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of keywords to keep
    #[arg(short, long)]
    pub max_keywords: Option<usize>,

    /// Page-load timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Export the report, optionally into DIR (defaults to the configured output_dir)
    #[arg(short, long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Web,
    File,
}

/// Convert from CLI arguments to a page source
pub fn convert_source(arg_type: SourceArg, target: &str) -> PageSource {
    match arg_type {
        SourceArg::Web => PageSource::Web(target.to_string()),
        SourceArg::File => PageSource::File(PathBuf::from(target)),
    }
}
