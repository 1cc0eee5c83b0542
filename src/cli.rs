use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "icon-tool",
    version,
    about = "Turn any image into a macOS-style app icon",
    long_about = "\
Turn any image into a macOS-style app icon.

The source is cover-cropped into a rounded square, a soft drop shadow is
composited behind it, and the result is written as a 1024x1024 PNG.

Options go before the paths; paths may start with '-'."
)]
pub struct Cli {
    /// Source image (any format the decoder supports)
    #[arg(allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Where to write the 1024x1024 PNG
    #[arg(allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Anything after the two paths is accepted and ignored
    #[arg(hide = true, num_args = 0.., allow_hyphen_values = true)]
    pub rest: Vec<OsString>,

    /// Print each processing stage to stderr
    #[arg(long)]
    pub verbose: bool,
}
