//! sourcetpl's main application entry point.
//! Parses the command line, loads defaults and generates the project.

use sourcetpl::{
    cli::{get_args, Args},
    config::load_defaults,
    error::{default_error_handler, Error, Result},
    logger::init_logger,
    project::Project,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the working directory
/// 2. Loads the defaults file, if any
/// 3. Builds the project options and the project
/// 4. Writes the project to disk
fn run(args: Args) -> Result<()> {
    let working_dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir().map_err(Error::WorkingDirError)?,
    };

    let defaults = load_defaults(&working_dir)?;
    let options = args.project_options(defaults);

    let project = Project::new(options, || Ok(working_dir))?;
    project.build()?;

    println!("{project} created in {}.", project.root_path().display());
    Ok(())
}
