use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use texsplit::{
    DEFAULT_CONVERTER, DisabledConverter, ExternalConverter, FailurePolicy, SplitterBuilder,
};
use tracing_subscriber::EnvFilter;

/// Split a texture atlas into standalone PVR containers and convert each one
#[derive(Parser, Debug)]
#[command(name = "texsplit", version)]
struct Cli {
    /// Atlas file to split; output goes to `<INPUT>_parsed/`
    input: PathBuf,

    /// Converter executable, invoked as `<CONVERTER> <pvr> <jpg>`
    #[arg(long, default_value = DEFAULT_CONVERTER)]
    converter: PathBuf,

    /// Only write the .pvr containers
    #[arg(long)]
    no_convert: bool,

    /// What to do when a conversion fails: ignore, warn or fail
    #[arg(long, value_name = "POLICY", default_value_t = FailurePolicy::Ignore)]
    on_convert_failure: FailurePolicy,

    /// Write manifest.json describing every chunk
    #[arg(long)]
    manifest: bool,

    /// Reassemble the containers afterwards and compare with the input
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let start_time = Instant::now();

    let builder = SplitterBuilder::new()
        .failure_policy(cli.on_convert_failure)
        .write_manifest(cli.manifest)
        .verify(cli.verify);
    let builder = if cli.no_convert {
        builder.converter(DisabledConverter)
    } else {
        builder.converter(ExternalConverter::new(cli.converter.clone()))
    };
    let splitter = builder.build();

    let report = splitter
        .split(&cli.input)
        .with_context(|| format!("Failed to split {}", cli.input.display()))?;

    println!("=== texsplit ===");
    println!("Input:            {}", report.input.display());
    println!("Output directory: {}", report.output_dir.display());
    println!("Input bytes:      {}", report.input_len);
    println!("Chunks written:   {}", report.chunk_count());
    if !cli.no_convert {
        println!("Images converted: {}", report.converted_count());
    }
    if cli.verify {
        println!("Verified sha256:  {}", report.input_sha256);
    }

    if cli.on_convert_failure == FailurePolicy::Warn {
        let failures: Vec<_> = report.conversion_failures().collect();
        if !failures.is_empty() {
            println!("\nConversion failures:");
            for record in failures {
                println!("  {}: {}", record.pvr_path.display(), record.conversion);
            }
        }
    }

    println!(
        "\nTotal execution:  {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}
