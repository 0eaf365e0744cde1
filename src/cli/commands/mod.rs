//! Subcommands of the irmf CLI

pub mod check;
pub mod fmt;
pub mod footer;
pub mod groups;

use crate::ParserConfig;
use clap::Subcommand;
use std::io;
use std::path::PathBuf;

/// irmf subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Parse and validate documents, reporting the line of each problem
    Check {
        /// IRMF files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print a document in canonical form
    Fmt {
        /// IRMF file
        file: PathBuf,

        /// Rewrite the file in place instead of printing it
        #[arg(short, long, conflicts_with = "check")]
        write: bool,

        /// Fail if the file is not already canonical
        #[arg(long)]
        check: bool,
    },

    /// Print the generated GLSL footer
    Footer {
        /// IRMF file
        file: PathBuf,

        /// Print the whole shader (body followed by footer)
        #[arg(short, long)]
        full: bool,
    },

    /// Show the color groups inferred from the material names
    Groups {
        /// IRMF file
        file: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if a document fails to parse or a file cannot be
    /// read or written.
    pub fn execute(&self, config: &ParserConfig) -> anyhow::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self {
            Commands::Check { files } => check::execute(files, config, &mut out),
            Commands::Fmt { file, write, check } => {
                fmt::execute(file, *write, *check, config, &mut out)
            }
            Commands::Footer { file, full } => footer::execute(file, *full, config, &mut out),
            Commands::Groups { file } => groups::execute(file, config, &mut out),
        }
    }
}
