use std::io;

use crate::adapters::discovery::meta_discovery::MetaDiscovery;
use crate::adapters::fetchers::remote_fetcher::RemoteKeyFetcher;
use crate::adapters::parsers::armored_key_parser::ArmoredKeyParser;
use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::{Result, TrustError};
use crate::core::models::app_identifier::AppIdentifier;
use crate::core::models::trust_options::TrustOptions;
use crate::core::models::trust_scope::TrustScope;
use crate::core::services::locator::Locator;
use crate::core::services::operator::Operator;
use crate::core::services::trust_service::TrustService;

/// Flags of `keytrust trust`, borrowed from the parsed CLI.
pub struct TrustArgs<'a> {
    pub keys: &'a [String],
    pub prefix: Option<&'a str>,
    pub root: bool,
    pub insecure_allow_http: bool,
    pub skip_fingerprint_review: bool,
    pub debug: bool,
}

/// Execute the `keytrust trust` command.
pub fn execute(ctx: &Context, args: &TrustArgs) -> Result<()> {
    let prefix = args.prefix.unwrap_or_default();
    // Keys are stored under the bare name; version and labels only feed discovery.
    let scope = if prefix.is_empty() {
        if !args.root && !args.keys.is_empty() {
            return Err(TrustError::RootNotRequested);
        }
        TrustScope::Root
    } else {
        TrustScope::Prefix(AppIdentifier::parse(prefix)?.name)
    };

    let options = TrustOptions {
        allow_insecure_http: args.insecure_allow_http || ctx.insecure_allow_http,
        force_accept: args.skip_fingerprint_review,
        debug: args.debug,
    };
    let mut operator = Operator::new(io::stdin().lock(), io::stderr());

    let discovery = MetaDiscovery::new();
    let locator = Locator {
        discovery: &discovery,
    };

    // Debug output is written while discovery runs, so no spinner then.
    let sp = (args.keys.is_empty() && !prefix.is_empty() && !args.debug)
        .then(|| output::spinner(&format!("Discovering keys for {prefix}...")));
    let resolved = locator.resolve_locations(args.keys, prefix, &options, &mut operator);
    if let Some(sp) = sp {
        output::finish_spinner(sp);
    }
    let locations = resolved?;

    output::debug(
        options.debug,
        &format!("{} key location(s) to review", locations.len()),
    );

    let service = TrustService {
        fetcher: RemoteKeyFetcher::new(),
        parser: ArmoredKeyParser::new(),
        store: ctx.trust_store(),
    };
    service.add_keys(&locations, &scope, &options, &mut operator)
}
