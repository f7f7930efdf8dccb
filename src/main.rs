use clap::{Args, Parser, Subcommand};
use mantelbogen::{FillError, FillOutcome, FillerBuilder, Payload};
use serde_json::json;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Fills the XFA data packet of a funding-application cover sheet.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the leaf paths, identities and the fill preview as JSON
    Analyze {
        /// The PDF to inspect
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        payload: PayloadSource,
    },
    /// Write the payload into the PDF and print the fill report as JSON
    Fill {
        /// The PDF to fill
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        payload: PayloadSource,
        /// Where to write the filled PDF
        #[arg(long)]
        output: PathBuf,
        /// Fill even when the document names a different project
        #[arg(long, default_value_t = false)]
        confirm_mismatch: bool,
        /// Last part of the suggested download filename
        #[arg(long, default_value = "Mantelbogen")]
        download_suffix: String,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
struct PayloadSource {
    /// The payload as inline JSON
    #[arg(long)]
    payload: Option<String>,
    /// A file holding the payload JSON
    #[arg(long)]
    payload_file: Option<PathBuf>,
}

impl PayloadSource {
    fn load(&self) -> Result<Payload, FillError> {
        let source = match (&self.payload, &self.payload_file) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) => fs::read_to_string(path)?,
            (None, None) => "{}".to_string(),
        };
        Ok(Payload::from_json(&source)?)
    }
}

fn main() -> Result<ExitCode, FillError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("mantelbogen=info")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Analyze { input, payload } => {
            let payload = payload.load()?;
            let pdf = fs::read(&input)?;
            let analysis = mantelbogen::analyze(&pdf, &payload)?;
            println!("{}", serde_json::to_string_pretty(&analysis)?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Fill { input, payload, output, confirm_mismatch, download_suffix } => {
            let payload = payload.load()?;
            let pdf = fs::read(&input)?;
            let filler = FillerBuilder::new().with_download_suffix(download_suffix).build();

            match filler.fill(&pdf, &payload, confirm_mismatch)? {
                FillOutcome::Filled(document) => {
                    fs::write(&output, &document.bytes)?;
                    log::info!("Wrote {}", output.display());
                    println!("{}", serde_json::to_string_pretty(&document.report)?);
                    Ok(ExitCode::SUCCESS)
                }
                FillOutcome::MismatchNotConfirmed(conflict) => {
                    let error = json!({
                        "error": "Akronym in PDF passt nicht zum Projekt.",
                        "documentIdentity": conflict.document_identity,
                        "payloadProjectName": conflict.payload_project_name,
                        "identityMismatch": true,
                    });
                    println!("{}", serde_json::to_string_pretty(&error)?);
                    Ok(ExitCode::from(2))
                }
            }
        }
    }
}
