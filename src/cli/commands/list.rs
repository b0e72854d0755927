use crate::cli::context::Context;
use crate::cli::output;
use crate::core::errors::Result;
use crate::core::models::app_identifier::validate_name;
use crate::core::models::trust_scope::TrustScope;

/// Execute the `keytrust list` command.
///
/// One `<scope>\t<path>` line per key on stdout, so the output can be piped.
pub fn execute(ctx: &Context, prefix: Option<&str>, root: bool) -> Result<()> {
    let scope = match prefix {
        Some(p) => {
            validate_name(p)?;
            Some(TrustScope::from_prefix(p))
        }
        None if root => Some(TrustScope::Root),
        None => None,
    };

    let keys = ctx.trust_store().list(scope.as_ref())?;

    if keys.is_empty() {
        output::warning("No trusted keys found.");
        return Ok(());
    }

    output::header(&format!("Trusted keys ({})", keys.len()));
    for key in &keys {
        let label = match &key.scope {
            TrustScope::Root => "root",
            TrustScope::Prefix(p) => p.as_str(),
        };
        println!("{label}\t{}", key.path.display());
    }

    Ok(())
}
