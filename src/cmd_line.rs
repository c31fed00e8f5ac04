//! Command line options that are used across applications.

use std::path::{Path, PathBuf};

use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::EnvFilter;

/// Struct to package up command line arguments.
#[derive(Clone, Debug)]
pub struct CommonCmdLineArgs {
    // Path that all the fixed relative paths are resolved against
    root: PathBuf,
    // Number of times -v was given
    verbosity: u8,
}

impl CommonCmdLineArgs {
    const DEFAULT_ROOT: &'static str = ".";

    /// Create a new set of args.
    pub fn new_app(app_name: &'static str, about: &'static str) -> Command {
        Command::new(app_name)
            .about(about)
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("root")
                    .short('r')
                    .long("root")
                    .value_name("DIR")
                    .default_value(Self::DEFAULT_ROOT)
                    .help("Path to the data root.")
                    .long_help(
                        "Path to the data root. All the default file locations are relative to \
                         this directory. Defaults to the current directory.",
                    ),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Log more, repeat for debug output.")
                    .long_help(concat!(
                        "Log more to stderr. Once for info, twice for debug. ",
                        "RUST_LOG overrides this when it is set."
                    )),
            )
    }

    /// Process a `Command` to get the parsed values out of it and the matches object so an
    /// application can continue with further argument parsing.
    pub fn matches(app: Command) -> (Self, ArgMatches) {
        let matches = app.get_matches();
        let args = Self::from_matches(&matches);

        (args, matches)
    }

    /// Pull the common values out of already parsed matches.
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let root = matches
            .get_one::<String>("root")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_ROOT));

        let verbosity = matches.get_count("verbose");

        CommonCmdLineArgs { root, verbosity }
    }

    /// Get the root of the data set.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve a path against the root, absolute paths are left alone.
    pub fn resolve(&self, path: &dyn AsRef<Path>) -> PathBuf {
        self.root.join(path.as_ref())
    }

    /// Get the default log filter directive for the verbosity.
    pub fn log_level(&self) -> &'static str {
        match self.verbosity {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// Send log output to stderr so stdout only carries the status lines.
    pub fn init_logging(&self) {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.log_level()));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }
}

#[cfg(test)]
mod unit {
    use super::*;

    fn parse(args: &[&str]) -> CommonCmdLineArgs {
        let matches = CommonCmdLineArgs::new_app("test", "testing")
            .try_get_matches_from(args)
            .expect("Error parsing args.");

        CommonCmdLineArgs::from_matches(&matches)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["test"]);

        assert_eq!(args.root(), Path::new("."));
        assert_eq!(args.log_level(), "warn");
    }

    #[test]
    fn test_root_and_verbosity() {
        let args = parse(&["test", "--root", "/srv/sham", "-vv"]);

        assert_eq!(args.root(), Path::new("/srv/sham"));
        assert_eq!(args.log_level(), "debug");
        assert_eq!(
            args.resolve(&"data/inventory.csv"),
            PathBuf::from("/srv/sham/data/inventory.csv")
        );
        assert_eq!(
            args.resolve(&"/tmp/manifest.yaml"),
            PathBuf::from("/tmp/manifest.yaml")
        );
    }
}
