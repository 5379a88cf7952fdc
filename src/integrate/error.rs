//! Error types for the integration module

use thiserror::Error;

/// Errors reported by model construction and integration runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// A model or configuration parameter is unusable
    #[error("invalid parameter: {reason}")]
    InvalidParameter { reason: String },

    /// The state became NaN or infinite during the run
    ///
    /// Usually means dt is too large for the configured stiffness, or the
    /// model parameters drive the system into overflow.
    #[error(
        "non-finite state at step {step} (theta = {theta}, omega = {omega}); \
         reduce dt or check model parameters"
    )]
    NonFiniteState { step: usize, theta: f64, omega: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = IntegrationError::InvalidParameter {
            reason: "dt must be positive and finite, got 0".to_string(),
        };
        assert!(err.to_string().contains("dt must be positive"));

        let err = IntegrationError::NonFiniteState {
            step: 42,
            theta: f64::NAN,
            omega: 1.0,
        };
        let message = err.to_string();
        assert!(message.contains("step 42"));
        assert!(message.contains("reduce dt"));
    }
}
