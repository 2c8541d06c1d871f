use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use docbot::{
    Config, DetailLevel, DocumentationGenerator, GeneratorConfig, OpenAiProvider,
    RepositoryProfile, RepositoryScanner,
};

#[derive(Parser, Debug)]
#[command(name = "docbot")]
#[command(version = "0.1.0")]
#[command(about = "Generate README and documentation for a code repository")]
struct Args {
    /// Path to the repository to document
    #[arg(short, long)]
    repo_path: PathBuf,

    /// Level of detail for generated documentation
    #[arg(long, value_enum, default_value_t = DetailLevel::Medium)]
    detail_level: DetailLevel,

    /// Maximum number of LLM API calls
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    max_llm_calls: u32,

    /// Analyze the repository and print its profile without calling the LLM
    #[arg(long)]
    scan_only: bool,

    /// Output format for the scan profile (json, text)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file for the scan profile (defaults to stdout)
    #[arg(short, long)]
    output: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("docbot=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let scanner = RepositoryScanner::new(&args.repo_path);
    let profile = scanner.scan()?;
    tracing::info!(
        "Repository analysis complete, {} files found",
        profile.structure.len()
    );

    if args.scan_only {
        output_profile(&profile, &args)?;
        return Ok(());
    }

    // The LLM layer is only configured when generation is requested, so
    // --scan-only works without an API key.
    let config = Config::from_env()?;
    let provider = OpenAiProvider::new(config.openai_api_key.clone(), Some(config.model.clone()));

    let generator_config = GeneratorConfig {
        detail_level: args.detail_level,
        max_llm_calls: args.max_llm_calls,
    };

    let mut generator = DocumentationGenerator::new(provider, generator_config);
    let report = generator.run(&args.repo_path, &profile).await?;

    for path in &report.documents_written {
        println!("wrote {}", path.display());
    }
    println!("LLM calls made: {}", report.llm_calls_made);

    Ok(())
}

fn output_profile(profile: &RepositoryProfile, args: &Args) -> anyhow::Result<()> {
    let output = match args.format.as_str() {
        "json" => serde_json::to_string_pretty(profile)?,
        _ => format_text(profile),
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &output)?;
        tracing::info!("Output written to: {}", path);
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_text(profile: &RepositoryProfile) -> String {
    let mut output = String::new();

    output.push_str("\n=== Repository Analysis ===\n\n");
    output.push_str(&format!("Project Type: {}\n", profile.project_type));
    output.push_str(&format!("Languages: {}\n", join_set(&profile.languages)));
    output.push_str(&format!("File Types: {}\n", join_set(&profile.file_types)));
    output.push_str(&format!("Main Files: {}\n", profile.main_files.join(", ")));
    output.push_str(&format!(
        "Config Files: {}\n",
        profile.config_files.join(", ")
    ));
    output.push_str(&format!(
        "Dependencies: {}\n",
        profile.dependencies.join(", ")
    ));
    output.push_str(&format!("Total Files: {}\n", profile.structure.len()));

    output.push_str("\nFile Structure:\n");
    for path in &profile.structure {
        output.push_str(&format!("  - {}\n", path));
    }

    output
}

fn join_set(items: &BTreeSet<String>) -> String {
    items.iter().cloned().collect::<Vec<_>>().join(", ")
}
