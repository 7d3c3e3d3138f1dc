//! Role-based visibility rules.
//!
//! These predicates know nothing about HTTP routing; handlers call
//! [`require_access`] / [`require_modify`] with the claims the auth
//! middleware attached to the request.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::warn;

use super::types::AuthClaims;
use crate::shared::AppError;

/// Role carried in the member's session token
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    Admin,
    Treasurer,
    Player,
    Viewer,
}

/// Areas of the application a role may see or change
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Resource {
    Roster,
    Games,
    Goals,
    Championships,
    Treasury,
    Statistics,
    Administration,
}

/// Whether `role` may view `resource`
pub fn can_access(role: Role, resource: Resource) -> bool {
    match role {
        Role::Admin => true,
        Role::Treasurer => resource != Resource::Administration,
        Role::Player => !matches!(resource, Resource::Treasury | Resource::Administration),
        Role::Viewer => matches!(
            resource,
            Resource::Roster | Resource::Games | Resource::Championships | Resource::Statistics
        ),
    }
}

/// Whether `role` may create, update or delete records of `resource`.
/// Implies [`can_access`].
pub fn can_modify(role: Role, resource: Resource) -> bool {
    match role {
        Role::Admin => true,
        Role::Treasurer => resource == Resource::Treasury,
        Role::Player | Role::Viewer => false,
    }
}

pub fn require_access(claims: &AuthClaims, resource: Resource) -> Result<(), AppError> {
    if can_access(claims.role, resource) {
        return Ok(());
    }
    warn!(sub = %claims.sub, role = %claims.role, %resource, "Read access denied");
    Err(AppError::Forbidden(format!(
        "Role {} cannot view {}",
        claims.role, resource
    )))
}

pub fn require_modify(claims: &AuthClaims, resource: Resource) -> Result<(), AppError> {
    if can_modify(claims.role, resource) {
        return Ok(());
    }
    warn!(sub = %claims.sub, role = %claims.role, %resource, "Write access denied");
    Err(AppError::Forbidden(format!(
        "Role {} cannot modify {}",
        claims.role, resource
    )))
}
