use clap::Parser;

/// Vitrine, a GPU-composited host for off-screen browser views.
#[derive(Parser, Debug)]
#[command(name = "vitrine", version, about)]
pub struct Args {
    /// URLs to open, one view per URL, tiled left to right.
    /// Overrides the `[[views]]` section of the config file.
    pub urls: Vec<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Spin every view about its viewport center while compositing.
    #[arg(long)]
    pub spin: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
