use super::VERSION;
use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;

/// The parsed command line of the plotting app.
#[derive(Debug, Clone, PartialEq)]
pub struct CliArgs {
    pub directory: PathBuf,
    pub labels: String,
    pub output: PathBuf,
    pub verbose: bool,
}

fn app() -> App<'static, 'static> {
    let arg_directory = Arg::with_name("directory")
        .help("directory containing the benchmark csv files to scan")
        .required(true)
        .index(1);
    let arg_labels = Arg::with_name("labels")
        .help("comma-separated list of labels used in the test setups")
        .long_help(
            "comma-separated list of labels used in the test setups; \
            each label selects the first file whose name contains it and \
            is used as its legend entry, in the given order",
        )
        .short("l")
        .long("labels")
        .takes_value(true)
        .required(true);
    let arg_output = Arg::with_name("output")
        .help("the output image file, format from the extension (svg, png, bmp, jpg)")
        .short("o")
        .long("output")
        .takes_value(true)
        .required(true);
    let arg_verbose = Arg::with_name("verbose")
        .help("print verbose information")
        .short("v")
        .long("verbose")
        .takes_value(false)
        .required(false);
    App::new("bench_graphs")
        .version(VERSION.unwrap_or("unknown"))
        .about("cli app to plot benchmark time series from labelled csv files")
        .arg(arg_directory)
        .arg(arg_labels)
        .arg(arg_output)
        .arg(arg_verbose)
}

fn from_matches(cli_args: &ArgMatches) -> CliArgs {
    CliArgs {
        directory: PathBuf::from(cli_args.value_of("directory").unwrap_or_default()),
        labels: String::from(cli_args.value_of("labels").unwrap_or_default()),
        output: PathBuf::from(cli_args.value_of("output").unwrap_or_default()),
        verbose: cli_args.is_present("verbose"),
    }
}

/// Takes the CLI arguments of the process; exits on usage errors.
pub fn parse_cli() -> CliArgs {
    from_matches(&app().get_matches())
}

/// Same as `parse_cli` for an explicit argument list.
pub fn parse_cli_from<I, T>(args: I) -> Result<CliArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    Ok(from_matches(&cli_args))
}
