use clap::Parser;
use page_seo::{Analysis, AnalyzerConfig, PageSource, SeoReport, export, utils};
use std::process::ExitCode;
use std::time::Duration;

mod args;
use args::{Args, convert_source};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> page_seo::Result<()> {
    let source = convert_source(args.type_, &args.target);
    ::log::info!("Starting SEO analysis for: {}", args.target);

    if let PageSource::Web(_) = &source {
        ::log::info!(
            "Web analysis requires a WebDriver server; set WEBDRIVER_URL if not using http://localhost:4444"
        );
    }

    let config = match &args.config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    };

    let mut analysis = Analysis::new(source).with_config(config);
    if let Some(max_keywords) = args.max_keywords {
        analysis = analysis.with_max_keywords(max_keywords);
    }
    if let Some(secs) = args.timeout {
        analysis = analysis.with_page_load_timeout(Duration::from_secs(secs));
    }

    let default_output_dir = analysis.config().output_dir.clone();

    let report = analysis.run().await?;
    print_report(&report, args.json)?;

    if let Some(dir) = args.export {
        // Without an explicit directory each page gets its own folder under output_dir
        let output_dir =
            dir.unwrap_or_else(|| default_output_dir.join(utils::sanitize_filename(&report.url)));
        let summary = export::export_report(&report, &output_dir)?;
        for file in &summary.files {
            println!("Wrote {}", file.display());
        }
    }

    Ok(())
}

fn print_report(report: &SeoReport, json: bool) -> page_seo::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", report.render_text());
    }
    Ok(())
}
