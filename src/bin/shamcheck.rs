//! SHAM Data Checker.
//!
//! Verifies that the local data files exist and can be loaded. Problems with individual files
//! are reported and never stop the run.

use anyhow::Error;
use clap::Arg;

use sham_data::{CommonCmdLineArgs, IntegrityChecker, Manifest};

fn main() {
    if let Err(ref e) = run() {
        println!("error: {}", e);

        for cause in e.chain().skip(1) {
            println!("caused by: {}", cause);
        }

        ::std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let app = CommonCmdLineArgs::new_app("shamcheck", "Check the local archaeological data files.")
        .arg(
            Arg::new("manifest")
                .short('m')
                .long("manifest")
                .value_name("FILE")
                .help("YAML manifest of the files to check.")
                .long_help(concat!(
                    "YAML manifest of the files to check, relative to the root. Without it the ",
                    "built in list of museum, excavation, geophysical, database and image files ",
                    "is used."
                )),
        );

    let (common_args, matches) = CommonCmdLineArgs::matches(app);
    common_args.init_logging();

    let manifest = match matches.get_one::<String>("manifest") {
        Some(path) => Manifest::load(&common_args.resolve(path))?,
        None => Manifest::default(),
    };

    let checker = IntegrityChecker::new(&common_args.root(), manifest);

    let stdout = std::io::stdout();
    checker.run(&mut stdout.lock())?;

    Ok(())
}
