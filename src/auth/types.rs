use serde::{Deserialize, Serialize};

use super::roles::Role;

/// JWT claims issued by the identity provider for a signed-in member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthClaims {
    pub sub: String, // Member identifier at the identity provider
    pub email: String,
    pub role: Role,
    pub exp: usize, // Expiration timestamp (standard JWT claim)
    pub iat: usize, // Issued at timestamp (standard JWT claim)
}
