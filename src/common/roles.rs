use tracing::{debug, error, info};

use crate::common::audit::AuditSink;
use crate::models::{
    config::ReactionRoleConfig,
    directory::{DirectoryService, MemberRef},
    reaction::{ReactionEvent, RoleChange},
};

/// Translates one reaction change on the watched message into at most one
/// role mutation. Off-target events, unmapped emoji and failed lookups are
/// quiet no-ops. A failed mutation is audited and suppresses the notice;
/// the notice itself is best-effort and never undoes the mutation.
pub async fn apply_reaction_change<D: DirectoryService>(
    config: &ReactionRoleConfig,
    directory: &D,
    audit: &dyn AuditSink,
    event: &ReactionEvent,
    change: RoleChange,
) {
    if !config.target.matches(event) {
        return;
    }

    let Some(role_id) = config.role_for(&event.emoji) else {
        debug!(
            "Ignoring {} on the watched message, no role is bound to it",
            event.emoji
        );
        return;
    };

    let Some(role) = directory.find_role(event.guild_id, role_id).await else {
        info!(
            "Role {} bound to {} was not found in guild {}",
            role_id, event.emoji, event.guild_id
        );
        return;
    };

    let Some(member) = directory.find_member(event.guild_id, event.user_id).await else {
        info!(
            "Member {} was not found in guild {}",
            event.user_id, event.guild_id
        );
        return;
    };

    let outcome = match change {
        RoleChange::Grant => directory.grant_role(&member, &role).await,
        RoleChange::Revoke => directory.revoke_role(&member, &role).await,
    };
    match outcome {
        Ok(()) => audit.role_change_applied(change, &member, &role),
        Err(err) => {
            audit.role_change_failed(change, &member, &role, &err);
            return;
        }
    }

    post_notice(directory, event, &member, change).await;
}

async fn post_notice<D: DirectoryService>(
    directory: &D,
    event: &ReactionEvent,
    member: &MemberRef,
    change: RoleChange,
) {
    let Some(channel) = directory
        .find_channel(event.guild_id, event.channel_id)
        .await
    else {
        info!(
            "Watched channel {} is unavailable, skipping the notice",
            event.channel_id
        );
        return;
    };

    let text = notice_text(change, &member.display_name, &event.emoji);
    if let Err(err) = directory.post_message(&channel, &text).await {
        error!(
            "Could not post the reaction notice to {}. Failed with error: {:?}",
            channel.name, err
        );
    }
}

pub fn notice_text(change: RoleChange, member_name: &str, emoji: &str) -> String {
    match change {
        RoleChange::Grant => format!("{member_name} reacted with {emoji}."),
        RoleChange::Revoke => format!("{member_name} removed reaction {emoji}."),
    }
}
