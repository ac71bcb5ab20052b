use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

use cv_builder::cover_letter::{self, LetterRequest};
use cv_builder::{render_html, start_web_server, CvData, EnvironmentConfig, TemplateId};

#[derive(Parser)]
#[command(name = "cvforge", about = "CV builder: edit, render and export résumés")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the JSON API server
    Serve,
    /// Render a CV data file to an HTML document
    Render {
        /// Path to a CV record in JSON form
        input: PathBuf,
        /// Template style (modern, classic, minimal, creative, dark, gradient)
        #[arg(short, long)]
        template: Option<String>,
        /// Output file; defaults to the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Compose a cover letter from a CV data file
    Letter {
        input: PathBuf,
        #[arg(long)]
        job_title: String,
        #[arg(long)]
        company: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List available template styles
    Templates,
}

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("cv_builder=info,cvforge=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    let config = EnvironmentConfig::load()?;

    match cli.command {
        Command::Serve => start_web_server(config).await,
        Command::Render {
            input,
            template,
            output,
        } => {
            let cv = load_cv(&input)?;
            let template = template
                .as_deref()
                .map(TemplateId::from_name)
                .unwrap_or_else(|| config.default_template_id());
            let html = render_html(&cv, template);

            let output = match output {
                Some(path) => path,
                None => config.output_path.join(cv_builder::utils::document_filename(
                    &cv.personal_info.full_name,
                )),
            };
            write_output(&output, &html).await?;
            info!(
                "Rendered {} with template {} to {}",
                input.display(),
                template.name(),
                output.display()
            );
            Ok(())
        }
        Command::Letter {
            input,
            job_title,
            company,
            description,
            output,
        } => {
            let cv = load_cv(&input)?;
            let request = LetterRequest {
                job_title,
                company_name: company,
                job_description: description,
            };
            let letter = cover_letter::compose(&cv, &request);

            match output {
                Some(path) => {
                    write_output(&path, &letter).await?;
                    info!("Wrote cover letter to {}", path.display());
                }
                None => {
                    let path = config.output_path.join(cover_letter::letter_filename(&request));
                    write_output(&path, &letter).await?;
                    info!("Wrote cover letter to {}", path.display());
                }
            }
            Ok(())
        }
        Command::Templates => {
            for id in TemplateId::ALL {
                println!("{:<10} {}", id.name(), id.description());
            }
            Ok(())
        }
    }
}

fn load_cv(path: &PathBuf) -> Result<CvData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read CV file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse CV JSON: {}", path.display()))
}

async fn write_output(path: &PathBuf, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    tokio::fs::write(path, content)
        .await
        .with_context(|| format!("Failed to write file: {}", path.display()))
}
