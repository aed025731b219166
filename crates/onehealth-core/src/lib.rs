pub mod error;
pub mod params;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use params::ParameterSource;
pub use store::{CredentialSource, CredentialStore};
pub use types::{CredentialProfile, CredentialRecord, InputItem, ItemOutcome, OutputItem};
