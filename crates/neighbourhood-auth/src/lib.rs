pub mod error;
pub mod flow;
pub mod verifier;

pub use error::{AuthError, AuthResult};
pub use flow::{Credentials, FlowState, LoginFlow, Outcome};
pub use verifier::{CredentialVerifier, Subject};
