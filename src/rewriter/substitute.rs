use super::RewriteScope;
use crate::argument::Flavor;
use crate::config::SubstitutionPolicy;
use crate::constants::TOKEN_PATTERN;
use crate::error::Result;
use regex::Regex;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("placeholder token pattern is valid"));

/// Replaces registered `$NAME$` tokens inside `text` with the `flavor` text of
/// the matching argument.
///
/// Unregistered tokens are kept verbatim. Under [`SubstitutionPolicy::First`]
/// only the first token of the text is looked at, registered or not.
///
/// # Returns
/// * `Ok(None)` - Nothing was substituted
/// * `Ok(Some(String))` - The substituted text
pub(crate) fn substitute(
    text: &str,
    flavor: Flavor,
    scope: &RewriteScope<'_>,
) -> Result<Option<String>> {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut changed = false;

    for caps in TOKEN.captures_iter(text) {
        let (Some(token), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if scope.registry.contains(name.as_str()) {
            let replacement = scope.argument(name.as_str())?.to_text(flavor)?;
            out.push_str(&text[last..token.start()]);
            out.push_str(replacement);
            last = token.end();
            changed = true;
        }
        if scope.policy == SubstitutionPolicy::First {
            break;
        }
    }

    if !changed {
        return Ok(None);
    }
    out.push_str(&text[last..]);
    Ok(Some(out))
}
