//! The permission oracle boundary and built-in implementations.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use herald_types::{ActorId, ActorRef, Permission, ScopeId};

/// Answers whether an actor holds a set of permissions in a scope.
///
/// This is an external-collaborator boundary: the dispatch pipeline passes
/// the command's required-permission set through verbatim and applies no
/// policy of its own. Embedders back it with their platform's permission
/// primitive.
pub trait PermissionOracle: Send + Sync {
    /// `true` when `actor` holds every permission in `required` for `scope`.
    fn check(&self, actor: &ActorRef, scope: &ScopeId, required: &[Permission]) -> bool;
}

/// Grants everything. Useful for tests and permissionless deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllowAll;

impl PermissionOracle for AllowAll {
    fn check(&self, _actor: &ActorRef, _scope: &ScopeId, _required: &[Permission]) -> bool {
        true
    }
}

/// A fixed grant table: each actor holds an explicit permission set,
/// identical across scopes.
///
/// Fail closed: an actor absent from the table holds nothing, though
/// commands with an empty requirement set still pass.
#[derive(Debug, Clone, Default)]
pub struct StaticPermissions {
    grants: HashMap<ActorId, HashSet<Permission>>,
}

impl StaticPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grant one permission to one actor.
    pub fn grant(&mut self, actor: impl Into<ActorId>, permission: impl Into<Permission>) {
        self.grants
            .entry(actor.into())
            .or_default()
            .insert(permission.into());
    }
}

impl PermissionOracle for StaticPermissions {
    fn check(&self, actor: &ActorRef, scope: &ScopeId, required: &[Permission]) -> bool {
        if required.is_empty() {
            return true;
        }

        let Some(held) = self.grants.get(&actor.id) else {
            warn!(actor = %actor.id, %scope, "permission check failed: unknown actor");
            return false;
        };

        let allowed = required.iter().all(|p| held.contains(p));
        if !allowed {
            warn!(actor = %actor.id, %scope, "permission check failed: missing grant");
        }
        allowed
    }
}
