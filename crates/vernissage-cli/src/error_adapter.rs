//! Adapters from CLI errors to miette diagnostics.
//!
//! Errors are converted into self-contained [`Reportable`] values so the
//! binary can render each one independently through miette's graphical
//! report handler.

use miette::Diagnostic;
use thiserror::Error;

use vernissage::VernissageError;

use crate::error::CliError;

/// A renderable diagnostic derived from a [`CliError`].
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct Reportable {
    message: String,

    #[help]
    help: Option<String>,
}

/// Convert an error into independently renderable diagnostics.
pub fn to_reportables(err: &CliError) -> Vec<Reportable> {
    let help = match err {
        CliError::Manifest { .. } => {
            Some("exhibit manifests are TOML files with [[images]] entries".to_string())
        }
        CliError::Config { .. } => {
            Some("gallery configs are TOML files with [room] and [style] sections".to_string())
        }
        CliError::Gallery(VernissageError::Config(_)) => Some(
            "check the [room] section: margins and spacing must leave hanging space on the walls"
                .to_string(),
        ),
        _ => None,
    };

    vec![Reportable {
        message: err.to_string(),
        help,
    }]
}

#[cfg(test)]
mod tests {
    use vernissage::ConfigError;

    use super::*;

    #[test]
    fn test_config_errors_carry_help() {
        let err = CliError::Gallery(VernissageError::Config(ConfigError::RoomTooNarrow {
            wall_width: 2.0,
            min_margin: 1.0,
        }));

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);
        assert!(reportables[0].help.is_some());
    }

    #[test]
    fn test_io_errors_have_no_help() {
        let err = CliError::Io(std::io::Error::other("boom"));

        let reportables = to_reportables(&err);
        assert!(reportables[0].help.is_none());
    }
}
