use serenity::Error as SerenityError;
use tracing::{error, info};

use crate::models::{
    directory::{MemberRef, RoleRef},
    reaction::RoleChange,
};

/// Receives the outcome of every attempted role mutation, keeping the
/// reconciliation pipeline free of a hard-wired logging sink.
pub trait AuditSink: Send + Sync {
    fn role_change_applied(&self, change: RoleChange, member: &MemberRef, role: &RoleRef);
    fn role_change_failed(
        &self,
        change: RoleChange,
        member: &MemberRef,
        role: &RoleRef,
        error: &SerenityError,
    );
}

pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn role_change_applied(&self, change: RoleChange, member: &MemberRef, role: &RoleRef) {
        match change {
            RoleChange::Grant => info!(
                "Assigned role {} to {} (ID: {})",
                role.name, member.display_name, member.user_id
            ),
            RoleChange::Revoke => info!(
                "Removed role {} from {} (ID: {})",
                role.name, member.display_name, member.user_id
            ),
        }
    }

    fn role_change_failed(
        &self,
        change: RoleChange,
        member: &MemberRef,
        role: &RoleRef,
        error: &SerenityError,
    ) {
        let verb = match change {
            RoleChange::Grant => "assign",
            RoleChange::Revoke => "remove",
        };
        error!(
            "Could not {} role {} for {} (ID: {}). Failed with error: {:?}",
            verb, role.name, member.display_name, member.user_id, error
        );
    }
}
