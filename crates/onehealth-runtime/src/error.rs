use thiserror::Error;

pub type RuntimeResult<T> = Result<T, RuntimeError>;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Credential resolution failed for '{profile}': {message}")]
    CredentialResolution { profile: String, message: String },

    #[error("Execution error: {0}")]
    Execution(String),
}

impl RuntimeError {
    pub fn credential_resolution(
        profile: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::CredentialResolution { profile: profile.into(), message: message.into() }
    }

    pub fn execution(msg: impl Into<String>) -> Self {
        Self::Execution(msg.into())
    }
}
