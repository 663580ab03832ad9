use std::path::PathBuf;

use clap::Parser;
use shout_common::config::Config;

#[derive(Parser)]
#[command(name = "shout", version)]
#[command(about = "Reads a text file and writes an uppercase copy named modified_<file>.")]
pub struct CommandLine {
    /// Directory the file is read from and the modified copy written to
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,
    /// Do not echo the file content
    #[arg(short, long)]
    pub quiet: bool,
    /// Print a banner before the prompt
    #[arg(long)]
    pub banner: bool,
    /// Print a summary after a successful write
    #[arg(short, long)]
    pub summary: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn into_config(self) -> Config {
        Config {
            banner: self.banner,
            summary: self.summary,
            quiet: self.quiet,
            directory: self.directory,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
