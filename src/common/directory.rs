use serenity::{
    all::{ChannelId, GuildId, RoleId, UserId},
    builder::CreateMessage,
    prelude::Context,
};
use tracing::info;

use crate::models::directory::{
    ChannelRef, DirectoryResult, DirectoryService, MemberRef, RoleRef,
};

/// `DirectoryService` backed by the live gateway session: cache first, REST
/// fallback. Lookup transport failures are reported as absent entities.
pub struct GatewayDirectory<'a> {
    ctx: &'a Context,
}

impl<'a> GatewayDirectory<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        GatewayDirectory { ctx }
    }
}

#[async_trait::async_trait]
impl DirectoryService for GatewayDirectory<'_> {
    async fn find_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<RoleRef> {
        if let Some(role) = guild_id
            .to_guild_cached(&self.ctx.cache)
            .and_then(|guild| guild.roles.get(&role_id).map(RoleRef::from))
        {
            return Some(role);
        }

        match guild_id.to_partial_guild(&self.ctx.http).await {
            Ok(guild) => guild.roles.get(&role_id).map(RoleRef::from),
            Err(err) => {
                info!(
                    "Could not fetch guild {} while resolving role {}. Failed with error: {:?}",
                    guild_id, role_id, err
                );
                None
            }
        }
    }

    async fn find_member(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRef> {
        match guild_id.member(self.ctx, user_id).await {
            Ok(member) => Some(MemberRef::from(&member)),
            Err(err) => {
                info!(
                    "Could not fetch member {} in guild {}. Failed with error: {:?}",
                    user_id, guild_id, err
                );
                None
            }
        }
    }

    async fn find_channel(&self, _guild_id: GuildId, channel_id: ChannelId) -> Option<ChannelRef> {
        match channel_id.to_channel(self.ctx).await {
            Ok(channel) => channel.guild().map(|channel| ChannelRef::from(&channel)),
            Err(err) => {
                info!(
                    "Could not fetch channel {}. Failed with error: {:?}",
                    channel_id, err
                );
                None
            }
        }
    }

    async fn grant_role(&self, member: &MemberRef, role: &RoleRef) -> DirectoryResult {
        self.ctx
            .http
            .add_member_role(
                member.guild_id,
                member.user_id,
                role.id,
                Some("Reacted to the role message"),
            )
            .await
    }

    async fn revoke_role(&self, member: &MemberRef, role: &RoleRef) -> DirectoryResult {
        self.ctx
            .http
            .remove_member_role(
                member.guild_id,
                member.user_id,
                role.id,
                Some("Removed reaction from the role message"),
            )
            .await
    }

    async fn post_message(&self, channel: &ChannelRef, text: &str) -> DirectoryResult {
        channel
            .id
            .send_message(&self.ctx.http, CreateMessage::new().content(text))
            .await?;
        Ok(())
    }
}
