//! `sparestock-auth` — operator authentication boundary.
//!
//! Credential storage (bcrypt-hashed), HS256 token issuance/verification, and
//! deterministic claim validation. Intentionally decoupled from HTTP; the API
//! layer wires these pieces into middleware and routes.

pub mod claims;
pub mod registry;
pub mod token;

pub use claims::{OperatorClaims, TokenValidationError, validate_claims};
pub use registry::{CredentialError, Operator, OperatorRegistry};
pub use token::{Hs256TokenCodec, TokenError};
