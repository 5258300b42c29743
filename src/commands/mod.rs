pub mod deploy;

use apollo::DeployError;

/// Process exit code for a failed command.
///
/// Errors raised before the deploy flow starts (config, working directory)
/// count as configuration failures.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<DeployError>()
        .map(DeployError::exit_code)
        .unwrap_or(4)
}

/// Whether the error still has to be shown to the user.
///
/// The event sink already reports authorization, abort, credential, build,
/// validation and upload failures as they happen.
pub fn needs_report(err: &anyhow::Error) -> bool {
    match err.downcast_ref::<DeployError>() {
        Some(DeployError::Config(_) | DeployError::Prompt(_) | DeployError::File { .. }) => true,
        Some(_) => false,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apollo::ApolloError;
    use std::path::PathBuf;

    #[test]
    fn exit_code_follows_deploy_error() {
        let err = anyhow::Error::new(DeployError::Validation {
            log_path: PathBuf::from("sanity_check_errors.log"),
            detail: "bad".into(),
        });
        assert_eq!(exit_code(&err), 6);
        assert!(!needs_report(&err));
    }

    #[test]
    fn bootstrap_errors_are_config_failures() {
        let err = anyhow::anyhow!("failed to read current directory");
        assert_eq!(exit_code(&err), 4);
        assert!(needs_report(&err));
    }

    #[test]
    fn config_errors_inside_deploy_are_reported() {
        let err = anyhow::Error::new(DeployError::Config(ApolloError::InvalidWorkingPath {
            path: PathBuf::from("/nope"),
        }));
        assert_eq!(exit_code(&err), 4);
        assert!(needs_report(&err));
    }

    #[test]
    fn aborted_is_already_reported() {
        let err = anyhow::Error::new(DeployError::Aborted);
        assert_eq!(exit_code(&err), 3);
        assert!(!needs_report(&err));
    }
}
