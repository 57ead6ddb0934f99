use thiserror::Error;

/// Failures that end a pipeline invocation.
///
/// A stage addressing this bot is not an error, see
/// [`PipelineOutcome::AbortedSelfReference`](super::models::PipelineOutcome).
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A provider returned a game, which cannot be resubmitted
    #[error("Games are not supported (result {result_id})")]
    UnsupportedMedia { result_id: String },

    /// Resolving or querying a provider failed
    #[error("Provider {handle} failed")]
    Provider {
        handle: String,
        #[source]
        source: anyhow::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_chain_names_cause_once() {
        let err = anyhow::Error::from(PipelineError::Provider {
            handle: "@flaky".to_string(),
            source: anyhow::anyhow!("Connection reset"),
        });

        let report = format!("{:?}", err);

        assert!(report.starts_with("Provider @flaky failed"));
        assert_eq!(report.matches("Connection reset").count(), 1);
    }
}
