use crate::utils::{
    logger::{LogLevel, Logger},
    signature::get_signature,
    version::get_version,
};
use anyhow::Context;
use clap::CommandFactory;
use clap::FromArgMatches;
use clap::Parser;
use std::io::{self, Write};

mod bump;
mod utils;

#[derive(Parser)]
#[command(name = "nexttag")]
#[command(about = "Computes the next semantic-version release tag from the latest one")]
struct Cli {
    /// Latest release tag, e.g. v1.2.3. Omit when the repository has no release yet.
    current_tag: Option<String>,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let next = bump::next_tag(cli.current_tag.as_deref());

    // Stdout carries exactly one line: the computed tag.
    let mut out = io::stdout().lock();
    writeln!(out, "{}", next).context("failed to write the next tag to stdout")?;

    Ok(())
}

fn main() {
    let version = get_version();
    let signature = get_signature(&version);

    let version_static: &'static str = Box::leak(format!("v{}", version).into_boxed_str());
    let signature_static: &'static str = Box::leak(signature.into_boxed_str());

    let mut cmd = Cli::command();
    cmd = cmd.version(version_static).before_help(signature_static);

    let raw_args: Vec<String> = std::env::args().collect();
    if raw_args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", signature_static);
        return;
    }

    let matches = cmd.get_matches();
    let cli: Cli = Cli::from_arg_matches(&matches).expect("failed to parse cli args");

    if let Err(e) = run(&cli) {
        Logger::new().log_message(LogLevel::Error, &format!("{:#}", e));
        std::process::exit(1);
    }
}
