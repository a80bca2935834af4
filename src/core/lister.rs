//! Secret list expansion.
//!
//! Turns configured input lines into the concrete secrets to fetch. A line
//! ending in `*` is a name prefix and expands to every live secret under it.

use tracing::{debug, warn};

use crate::core::client::SecretsClient;
use crate::core::constants::KEY_SEPARATOR;
use crate::core::reference::SecretRef;
use crate::core::transform::{to_env_name, NameTransformation};
use crate::error::{Error, Result};

/// Build the list of secrets to fetch.
///
/// Every line is parsed before the first listing call, so malformed input
/// never reaches the store. Results are unique by secret id and keep
/// first-seen order.
///
/// # Errors
///
/// - `Error::Config` for malformed lines
/// - `Error::List` if any prefix listing fails
pub fn build_secret_list(
    client: &dyn SecretsClient,
    inputs: &[String],
    transformation: NameTransformation,
) -> Result<Vec<SecretRef>> {
    let references = inputs
        .iter()
        .map(|line| -> Result<SecretRef> {
            let reference = SecretRef::parse(line, transformation)?;
            reference.prefix()?;
            Ok(reference)
        })
        .collect::<Result<Vec<_>>>()?;

    let mut secrets: Vec<SecretRef> = Vec::new();

    for reference in references {
        let prefix = reference.prefix()?.map(str::to_string);
        match prefix {
            Some(prefix) => {
                let expanded = expand_prefix(client, &reference, &prefix, transformation)?;
                debug!(prefix = %prefix, matches = expanded.len(), "expanded prefix");
                for item in expanded {
                    push_unique(&mut secrets, item);
                }
            }
            None => push_unique(&mut secrets, reference),
        }
    }

    Ok(secrets)
}

/// List every live secret under `prefix`, following pagination.
fn expand_prefix(
    client: &dyn SecretsClient,
    reference: &SecretRef,
    prefix: &str,
    transformation: NameTransformation,
) -> Result<Vec<SecretRef>> {
    let mut expanded = Vec::new();
    let mut next_token: Option<String> = None;

    loop {
        let page = client
            .list_secrets(prefix, next_token.as_deref())
            .map_err(|source| Error::List {
                prefix: prefix.to_string(),
                source,
            })?;

        for entry in page.entries {
            if entry.deleted || !entry.name.starts_with(prefix) {
                continue;
            }
            let alias = expanded_alias(
                reference.alias.as_deref(),
                prefix,
                &entry.name,
                transformation,
            );
            expanded.push(SecretRef {
                alias,
                id: entry.name,
            });
        }

        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }

    Ok(expanded)
}

/// Alias for one secret found under a prefix.
///
/// A named alias becomes the stem of per-secret names, `ALIAS_<suffix>`,
/// except for an exact match where it is used as-is.
fn expanded_alias(
    alias: Option<&str>,
    prefix: &str,
    name: &str,
    transformation: NameTransformation,
) -> Option<String> {
    let alias = alias?;
    if alias.is_empty() {
        return Some(String::new());
    }

    let suffix = name[prefix.len()..].trim_start_matches('/');
    if suffix.is_empty() {
        return Some(alias.to_string());
    }

    Some(to_env_name(
        &format!("{}{}{}", alias, KEY_SEPARATOR, suffix),
        transformation,
    ))
}

fn push_unique(secrets: &mut Vec<SecretRef>, reference: SecretRef) {
    match secrets.iter().find(|seen| seen.id == reference.id) {
        Some(seen) if seen.alias != reference.alias => {
            warn!(
                secret_id = %reference.id,
                "secret listed more than once with different aliases; keeping the first"
            );
        }
        Some(_) => {}
        None => secrets.push(reference),
    }
}
