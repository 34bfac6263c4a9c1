use std::ffi::OsString;

use anyhow::Context as _;
use clap::{command, Arg, ArgAction};
use context::Context;
use generator::generate;

mod clock;
mod context;
mod error;
mod generator;
mod metadata;

/// clap drops a leading `--` as its end-of-options marker.
/// Escape it so it stays a title word.
fn cli_args() -> Vec<OsString> {
    let mut args: Vec<OsString> = std::env::args_os().collect();
    if args.get(1).is_some_and(|arg| arg == "--") {
        args.insert(1, OsString::from("--"));
    }
    args
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .about("Create a dated Markdown post stub in the current directory")
        .arg(
            Arg::new("title")
                .help("Words of the post title")
                .num_args(0..)
                .action(ArgAction::Append)
                .allow_hyphen_values(true)
                .trailing_var_arg(true),
        )
        .get_matches_from(cli_args());

    let words: Vec<String> = matches
        .get_many::<String>("title")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let ctx = Context::from_env()?;
    let path = generate(&ctx, &words).context("Could not create post")?;
    println!("{}", path.display());

    Ok(())
}
