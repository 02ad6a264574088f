//! `${VAR}` and `${VAR:-default}` expansion for configuration strings.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand environment variable references in `value`.
///
/// Only strings containing `${` are expanded, so bare `$` in URLs survives.
/// A referenced variable that is unset and has no default is an error naming
/// `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| std::env::var(name).map(Some))
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} is unusable: {}", e.var_name, e.cause),
        })
}
