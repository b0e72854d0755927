mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::commands::trust::TrustArgs;
use cli::context::Context;
use cli::{Cli, Commands};

fn run(args: &Cli) -> crate::core::errors::Result<()> {
    let ctx = Context::resolve(args)?;

    match &args.command {
        Commands::Trust {
            keys,
            prefix,
            root,
            insecure_allow_http,
            skip_fingerprint_review,
            debug,
        } => cli::commands::trust::execute(
            &ctx,
            &TrustArgs {
                keys,
                prefix: prefix.as_deref(),
                root: *root,
                insecure_allow_http: *insecure_allow_http,
                skip_fingerprint_review: *skip_fingerprint_review,
                debug: *debug,
            },
        ),
        Commands::List { prefix, root } => {
            cli::commands::list::execute(&ctx, prefix.as_deref(), *root)
        }
    }
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = run(&args) {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
