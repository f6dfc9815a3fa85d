use clap::{Parser, Subcommand, ValueEnum};
use deckhand::common::Result;
use deckhand::deck::{Deck, DeckFile, TemplateConfig, inspect_template};
use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "deckhand", version, about = "Render branded slide decks and inspect PowerPoint templates")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a YAML deck file to .pptx
    Render {
        deck: PathBuf,
        #[arg(short, long, help = "Output file (overrides the deck file's `output`)")]
        output: Option<PathBuf>,
        #[arg(long, help = "Template .pptx (overrides the deck file's `template.path`)")]
        template: Option<PathBuf>,
    },
    /// Describe a template's canvas, layouts and slides
    Inspect {
        template: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ReportFormat {
    Text,
    Yaml,
}

fn render(deck: PathBuf, output: Option<PathBuf>, template: Option<PathBuf>) -> Result<()> {
    let mut file = DeckFile::load(&deck)?;

    if let Some(path) = template {
        let layouts = file.template.take().map(|t| t.layouts).unwrap_or_default();
        file.template = Some(TemplateConfig { path, layouts });
    }
    let output = output
        .or_else(|| file.output.clone())
        .unwrap_or_else(|| deck.with_extension("pptx"));

    let mut rendered = Deck::from_deck_file(&file)?;
    rendered.render_all(&file.slides)?;
    rendered.save(&output)?;
    println!("{} slides -> {}", rendered.slides().len(), output.display());
    Ok(())
}

fn inspect(template: PathBuf, format: ReportFormat) -> Result<()> {
    let report = inspect_template(&template)?;
    match format {
        ReportFormat::Text => print!("{}", report),
        ReportFormat::Yaml => print!("{}", report.to_yaml()?),
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Render {
            deck,
            output,
            template,
        } => render(deck, output, template),
        Commands::Inspect { template, format } => inspect(template, format),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        },
    }
}
