//! SHAM Fetcher.
//!
//! Loads the inventory of external data sources, dispatches the ones with an API to their
//! fetchers and saves the results in a timestamped json file.

use anyhow::{anyhow, Error};
use clap::{builder::PossibleValuesParser, Arg, ArgAction, ArgMatches};
use strum::IntoEnumIterator;

use sham_data::{
    load_inventory, write_listing, CollisionPolicy, CommonCmdLineArgs, Dispatcher, Registry,
    ResultsWriter, DEFAULT_INVENTORY,
};

const DEFAULT_OUTPUT_DIR: &str = "data";

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
    let policies: Vec<&'static str> = CollisionPolicy::iter().map(|p| p.into()).collect();

    let app = CommonCmdLineArgs::new_app(
        "shamfetch",
        "Fetch data for the sources in the archaeological data inventory.",
    )
    .arg(
        Arg::new("inventory")
            .short('i')
            .long("inventory")
            .value_name("FILE")
            .default_value(DEFAULT_INVENTORY)
            .help("Inventory of data sources, relative to the root."),
    )
    .arg(
        Arg::new("output-dir")
            .short('o')
            .long("output-dir")
            .value_name("DIR")
            .default_value(DEFAULT_OUTPUT_DIR)
            .help("Where to save the results, relative to the root."),
    )
    .arg(
        Arg::new("on-collision")
            .long("on-collision")
            .value_name("POLICY")
            .value_parser(PossibleValuesParser::new(policies))
            .default_value("suffix")
            .help("What to do if a results file with the same timestamp exists.")
            .long_help(concat!(
                "What to do if a results file with the same timestamp exists. 'suffix' adds ",
                "_1, _2, ... to the name, 'overwrite' replaces the file, 'fail' stops with an ",
                "error."
            )),
    )
    .arg(
        Arg::new("list")
            .short('l')
            .long("list")
            .action(ArgAction::SetTrue)
            .help("List the inventory instead of fetching."),
    );

    let (common_args, matches) = CommonCmdLineArgs::matches(app);
    common_args.init_logging();

    let inventory = common_args.resolve(&value(&matches, "inventory")?);
    let sources = load_inventory(&inventory)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if matches.get_flag("list") {
        write_listing(&sources, &mut out)?;
        return Ok(());
    }

    let policy = CollisionPolicy::from_name(value(&matches, "on-collision")?)?;
    let output_dir = common_args.resolve(&value(&matches, "output-dir")?);
    let writer = ResultsWriter::new(&output_dir, policy);

    let registry = Registry::default();
    Dispatcher::new(&registry).dispatch_and_save(&sources, &writer, &mut out)?;

    Ok(())
}

fn value<'a>(matches: &'a ArgMatches, name: &str) -> Result<&'a str, Error> {
    matches
        .get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("missing value for --{}", name))
}
