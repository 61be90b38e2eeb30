//! Command-line interface implementation for sourcetpl.
//! Provides argument parsing and help text formatting using clap.

use crate::config::{Defaults, License, ProjectKind, ProjectOptions};
use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for sourcetpl.
#[derive(Parser, Debug)]
#[command(author, version, about = "sourcetpl: C project scaffolding generator", long_about = None)]
pub struct Args {
    /// Name of the project, used for the root directory and file names
    #[arg(value_name = "PROJECT_NAME")]
    pub project_name: String,

    /// Kind of project to generate
    #[arg(short, long, value_enum)]
    pub kind: Option<ProjectKind>,

    /// Generate the Debian packaging layout (`package-<name>/`)
    #[arg(short, long)]
    pub package: bool,

    /// Author written in the generated-file banners
    #[arg(short, long)]
    pub author: Option<String>,

    /// License notice added to the generated-file banners
    #[arg(short, long, value_enum)]
    pub license: Option<License>,

    /// Generate the project in this directory instead of the current one
    #[arg(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Merges the arguments with the values of a defaults file.
    /// Explicit arguments win; `--package` is added to the file's value.
    pub fn project_options(&self, defaults: Defaults) -> ProjectOptions {
        ProjectOptions::new(self.project_name.clone())
            .with_kind(self.kind.or(defaults.kind).unwrap_or_default())
            .with_package(self.package || defaults.package)
            .with_author(self.author.clone().or(defaults.author))
            .with_license(self.license.or(defaults.license))
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 1 if required arguments are missing
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                let _ = Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
