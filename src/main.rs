use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use contour::batch;
use contour::emit::{idl, json, Format};
use contour::StructuralModel;

#[derive(Parser)]
#[command(author, version, about = "Extract code structure from Python files", long_about = None)]
struct Cli {
    /// File or directory to process
    path: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "idl")]
    format: Format,

    /// Output file (default: stdout)
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Exclude patterns (can be specified multiple times)
    #[arg(long, short)]
    exclude: Vec<String>,

    /// Include the explanatory preamble with IDL output
    #[arg(long)]
    include_prompt: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let models: Vec<StructuralModel> = if cli.path.is_file() {
        vec![batch::process_file(&cli.path)?]
    } else if cli.path.is_dir() {
        batch::process_directory(&cli.path, &cli.exclude)
    } else {
        eprintln!("Error: {} is not a valid file or directory", cli.path.display());
        process::exit(1);
    };

    let output = match cli.format {
        Format::Json => json::to_json_batch(&models),
        Format::Idl => render_idl_batch(&models, cli.include_prompt),
    };

    match &cli.output {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", output),
    }

    Ok(())
}

/// Frame each unit's IDL with file markers, optionally after the preamble.
fn render_idl_batch(models: &[StructuralModel], include_prompt: bool) -> String {
    let mut output = if include_prompt {
        idl::IDL_PREAMBLE.to_string()
    } else {
        String::new()
    };

    for model in models {
        let path = model.file_path.as_deref().unwrap_or("<source>");
        if !output.is_empty() {
            output.push_str("\n\n");
        }
        output.push_str(&format!("// File: {}\n", path));
        output.push_str(&idl::to_idl(model));
        output.push_str(&format!("\n// End of {}\n", path));
    }

    output
}
