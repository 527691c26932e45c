// ABOUTME: Resolution of the tabcmd executable location.
// ABOUTME: Explicit override, then the TABCMD env var, then the bare name.

use crate::session::DEFAULT_EXECUTABLE;

/// Environment variable overriding the tabcmd location.
pub const TABCMD_ENV: &str = "TABCMD";

/// Resolve the executable to invoke.
///
/// Resolution order:
/// 1. Explicit override (CLI flag or config field)
/// 2. `TABCMD` environment variable
/// 3. The conventional name `tabcmd`, left to the platform search path
///    at spawn time
pub fn resolve_executable(explicit: Option<&str>) -> String {
    if let Some(path) = explicit {
        return path.to_string();
    }

    if let Ok(path) = std::env::var(TABCMD_ENV)
        && !path.is_empty()
    {
        return path;
    }

    DEFAULT_EXECUTABLE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        temp_env::with_var(TABCMD_ENV, Some("/from/env/tabcmd"), || {
            assert_eq!(
                resolve_executable(Some("/explicit/tabcmd")),
                "/explicit/tabcmd"
            );
        });
    }

    #[test]
    fn env_var_used_without_override() {
        temp_env::with_var(TABCMD_ENV, Some("/from/env/tabcmd"), || {
            assert_eq!(resolve_executable(None), "/from/env/tabcmd");
        });
    }

    #[test]
    fn empty_env_var_is_ignored() {
        temp_env::with_var(TABCMD_ENV, Some(""), || {
            assert_eq!(resolve_executable(None), DEFAULT_EXECUTABLE);
        });
    }

    #[test]
    fn falls_back_to_conventional_name() {
        temp_env::with_var_unset(TABCMD_ENV, || {
            assert_eq!(resolve_executable(None), DEFAULT_EXECUTABLE);
        });
    }
}
