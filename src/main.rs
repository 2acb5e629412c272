use std::io::Write as _;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use sonix_api::{
    Language, SpeechApi, SpeechService, TranscriptionRequest, TranslationRequest, WorkflowResult,
};
use sonix_core::bootstrap::build_service;
use sonix_core::config::Config;
use sonix_core::vault::EnvKeyProvider;

#[derive(Debug, Parser)]
#[command(name = "sonix", version, about = "Transcribe and translate audio with Sonix")]
struct Cli {
    /// Path to the TOML config file.
    #[arg(
        long,
        global = true,
        env = "SONIX_CONFIG",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Print the full result as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Upload audio and wait for its transcript.
    Transcribe {
        /// Publicly reachable audio URL.
        #[arg(long)]
        url: Option<String>,
        /// Local audio file to upload.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Display name for the media in Sonix.
        #[arg(long)]
        name: Option<String>,
        /// Spoken language; defaults to `api.default_language`.
        #[arg(long, value_parser = language_parser())]
        language: Option<Language>,
    },
    /// Translate an existing transcript.
    Translate {
        #[arg(long)]
        job_id: String,
        /// Target language of the translation.
        #[arg(long, value_parser = language_parser())]
        language: Language,
    },
}

fn language_parser() -> impl clap::builder::TypedValueParser<Value = Language> {
    clap::builder::PossibleValuesParser::new(Language::ALL.iter().map(|language| language.code()))
        .try_map(|code| code.parse::<Language>())
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_subscriber();
    let cli = Cli::parse();

    let mut config = Config::load(&cli.config)?;
    config.validate()?;
    config.resolve_secrets(&EnvKeyProvider).await?;
    let service = build_service(&config)?;

    let result = run(&service, cli.command, config.api.default_language).await;

    if result.is_success() || cli.json {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", render(&result, cli.json)?)?;
    }
    if let Some(err) = result.error_message.as_deref() {
        eprintln!("error: {err}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn init_subscriber() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run<A: SpeechApi>(
    service: &SpeechService<A>,
    command: Command,
    default_language: Language,
) -> WorkflowResult {
    match command {
        Command::Transcribe {
            url,
            file,
            name,
            language,
        } => {
            let request = TranscriptionRequest {
                audio_url: url,
                audio_file_path: file,
                file_name: name,
                language: language.unwrap_or(default_language),
            };
            service.run_transcription(request).await
        }
        Command::Translate { job_id, language } => {
            service
                .run_translation(TranslationRequest::new(job_id, language))
                .await
        }
    }
}

fn render(result: &WorkflowResult, json: bool) -> anyhow::Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(result)?)
    } else {
        Ok(result.text.clone())
    }
}
