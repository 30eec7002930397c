use thiserror::Error;

pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("Invalid metric '{metric}'. Choose from: {}", valid.join(", "))]
    InvalidMetric {
        metric: String,
        valid: Vec<&'static str>,
    },

    #[error("At least {required} players required for comparison, got {provided}")]
    InsufficientInput { required: usize, provided: usize },

    #[error("Data source error: {0:#}")]
    DataSource(#[from] anyhow::Error),
}

impl AnalyzerError {
    /// True for errors caused by the caller's input rather than the store.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AnalyzerError::InvalidMetric { .. } | AnalyzerError::InsufficientInput { .. }
        )
    }
}
