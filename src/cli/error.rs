//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::Io { source, .. } => match source.kind() {
                    std::io::ErrorKind::NotFound => crate::exitcode::NOINPUT,
                    _ => crate::exitcode::IOERR,
                },
                InfraError::Application(ApplicationError::Config { .. }) => crate::exitcode::CONFIG,
                InfraError::Application(_) => crate::exitcode::DATAERR,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn given_domain_error_when_mapping_exit_code_then_data_error() {
        let err = CliError::from(ApplicationError::from(DomainError::SelfParent { node: 0 }));

        assert_eq!(err.exit_code(), crate::exitcode::DATAERR);
    }

    #[test]
    fn given_missing_file_when_mapping_exit_code_then_no_input() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = CliError::from(InfraError::io("read forest.txt", io));

        assert_eq!(err.exit_code(), crate::exitcode::NOINPUT);
    }

    #[test]
    fn given_unreadable_stdin_when_mapping_exit_code_then_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8");
        let err = CliError::from(InfraError::io("read stdin", io));

        assert_eq!(err.exit_code(), crate::exitcode::IOERR);
    }

    #[test]
    fn given_bad_config_when_mapping_exit_code_then_config_error() {
        let err = CliError::from(ApplicationError::Config {
            message: "unknown output format: json".into(),
        });

        assert_eq!(err.exit_code(), crate::exitcode::CONFIG);
    }
}
