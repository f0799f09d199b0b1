use anyhow::{Context, Result};
use clap::Parser;
use sinoscope::{
    ClassificationResult, ReferenceData, SiteClassifier, config::Config, fetcher::PageRetriever,
    telemetry,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::error;

/// Decide whether websites are Chinese-oriented.
#[derive(Debug, Parser)]
#[command(name = "sinoscope", version, about)]
struct Cli {
    /// Absolute URLs to classify
    #[arg(required = true)]
    urls: Vec<String>,

    /// Write each result to <DIR>/result_<url>.json instead of stdout
    #[arg(long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    telemetry::init(cli.json_logs);

    let config = Config::from_env()?;
    let reference = match &config.reference_data {
        Some(path) => ReferenceData::from_json_file(path)?,
        None => ReferenceData::default(),
    };
    let retriever = PageRetriever::new(&config.fetcher)?;
    let classifier = SiteClassifier::new(retriever, reference);

    if let Some(dir) = &cli.output_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }

    let mut failures = 0;
    for url in &cli.urls {
        let result = classifier.classify(url).await;
        print_summary(&result);

        if let Err(err) = emit(&result, cli.output_dir.as_deref()) {
            error!(url = %url, error = %format!("{err:#}"), "failed to write result");
            failures += 1;
        }
    }

    Ok(if failures == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_summary(result: &ClassificationResult) {
    eprintln!("{}", "=".repeat(50));
    eprintln!("site:       {}", result.url);
    eprintln!(
        "verdict:    {}",
        if result.is_chinese {
            "Chinese-oriented"
        } else {
            "not Chinese-oriented"
        }
    );
    eprintln!("confidence: {}", result.confidence);
    eprintln!("reason:     {}", result.summary.reason);
    if let Some(indicators) = &result.summary.chinese_indicators {
        eprintln!("characters: {}", indicators.chars_count);
        eprintln!("cities:     {}", indicators.cities_count);
        eprintln!("surnames:   {}", indicators.surnames_count);
    }
}

fn emit(result: &ClassificationResult, output_dir: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;

    match output_dir {
        Some(dir) => {
            let path = dir.join(result_file_name(&result.url));
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            eprintln!("saved:      {}", path.display());
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// `https://example.com/a/b` → `result_example.com_a_b.json`
fn result_file_name(url: &str) -> String {
    let stripped = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let name = stripped
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '?' | '*' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect::<String>();
    format!("result_{name}.json")
}
