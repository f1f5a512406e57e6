use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardframe", version, about = "Frame catalog screenshots as cards")]
pub struct CliArgs {
    /// Input screenshot (single file mode)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output PNG (single file mode)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Directory with one subdirectory of screenshots per collection (batch mode)
    #[arg(long)]
    pub captures: Option<PathBuf>,

    /// Output directory for framed cards (batch mode)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Only frame these collections (repeatable); default is all
    #[arg(long = "collection")]
    pub collections: Vec<String>,

    /// Directory holding frame sets
    #[arg(long, default_value = "images")]
    pub frames: PathBuf,

    /// Frame set to draw (subdirectory of --frames)
    #[arg(long, default_value = "silver")]
    pub frame_set: String,

    /// JSON layout config; missing fields use the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
