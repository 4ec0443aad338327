use anyhow::Context;
use std::{
    io::{BufWriter, Write},
    path::PathBuf,
};
use structopt::StructOpt;

const USAGE: &str = "\
Usage: dasher-strings /path/to/dasher_strings.csv
 Expects a two-column csv file, i.e. internal names and one language's worth
 of translations. Outputs bulk of XML, but some changes needed by hand";

#[derive(Debug, StructOpt)]
#[structopt(
    name = "dasher-strings",
    about = "Turns a strings CSV into an XML resource fragment on stdout."
)]
struct Opts {
    /// The two-column CSV to convert
    #[structopt(parse(from_os_str))]
    path: PathBuf,
}

fn usage() -> ! {
    println!("{}", USAGE);
    std::process::exit(1)
}

fn run(input: PathBuf) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut writer = BufWriter::new(stdout.lock());

    let res = dasher_strings::csv_to_fragment(&input, &mut writer);
    // rows converted before a failure still go out
    writer.flush().context("Could not flush stdout")?;
    res.with_context(|| format!("Could not convert `{}`", input.display()))?;

    Ok(())
}

fn main() {
    // exactly one argument, and it is the path; flags count too
    if std::env::args_os().len() != 2 {
        usage();
    }
    let opts = Opts::from_args_safe().unwrap_or_else(|_| usage());

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(opts.path) {
        eprintln!("{} {:?}", console::style("error:").red().bold().for_stderr(), e);
        std::process::exit(1);
    }
}
