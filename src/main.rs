//! Command-line favicon generator.

use std::path::PathBuf;

use clap::Parser;
use netglyph::{
    IconRenderer, OutputPlan, Progress, RenderProfile, Variant, generate, read_container_sizes,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "netglyph")]
#[command(about = "Render network-glyph favicons and bundle them into an ICO", long_about = None)]
struct Cli {
    /// Glyph design to draw
    #[arg(short, long, value_enum, default_value_t = Variant::HexNetwork)]
    variant: Variant,

    /// Smooth shape edges instead of crisp pixels
    #[arg(long)]
    anti_alias: bool,

    /// Print the render profile as JSON before generating
    #[arg(long)]
    print_profile: bool,

    /// Decode the written container and list its resolutions
    #[arg(long)]
    verify: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let out_dir = executable_dir()?;

    let profile = RenderProfile::new(cli.variant).with_anti_alias(cli.anti_alias);
    if cli.print_profile {
        println!("{}", profile.to_json_pretty().map_err(netglyph::Error::from)?);
    }

    let renderer = IconRenderer::new(profile);
    let report = generate(&renderer, &OutputPlan::FAVICONS, &out_dir, |step| match step {
        Progress::Png { path, .. } => println!("Created {}", path.display()),
        Progress::BundleStarted => println!("\nCreating {}...", OutputPlan::FAVICONS.container_name),
        Progress::Container { path } => println!("Created {}", path.display()),
    })?;

    if cli.verify {
        let sizes = read_container_sizes(&report.container)?;
        let listed: Vec<String> = sizes
            .iter()
            .map(|s| format!("{}x{}", s.width, s.height))
            .collect();
        println!("Container holds: {}", listed.join(", "));
    }

    println!("\n✅ All favicons generated successfully!");
    Ok(())
}

fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "executable has no parent directory",
        )
    })
}
