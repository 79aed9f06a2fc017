use serenity::{
    all::{ChannelId, GuildChannel, GuildId, Member, Role, RoleId, UserId},
    Error as SerenityError,
};

pub type DirectoryResult = Result<(), SerenityError>;

#[derive(Debug, Clone)]
pub struct RoleRef {
    pub id: RoleId,
    pub name: String,
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        RoleRef {
            id: role.id,
            name: role.name.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemberRef {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub display_name: String,
}

impl From<&Member> for MemberRef {
    fn from(member: &Member) -> Self {
        MemberRef {
            guild_id: member.guild_id,
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChannelRef {
    pub id: ChannelId,
    pub name: String,
}

impl From<&GuildChannel> for ChannelRef {
    fn from(channel: &GuildChannel) -> Self {
        ChannelRef {
            id: channel.id,
            name: channel.name.clone(),
        }
    }
}

/// Lookups and mutations against the guild's member/role directory. Lookups
/// report missing entities as `None`; both role mutations are idempotent on
/// the platform side.
#[async_trait::async_trait]
pub trait DirectoryService: Send + Sync {
    async fn find_role(&self, guild_id: GuildId, role_id: RoleId) -> Option<RoleRef>;
    async fn find_member(&self, guild_id: GuildId, user_id: UserId) -> Option<MemberRef>;
    async fn find_channel(&self, guild_id: GuildId, channel_id: ChannelId) -> Option<ChannelRef>;
    async fn grant_role(&self, member: &MemberRef, role: &RoleRef) -> DirectoryResult;
    async fn revoke_role(&self, member: &MemberRef, role: &RoleRef) -> DirectoryResult;
    async fn post_message(&self, channel: &ChannelRef, text: &str) -> DirectoryResult;
}
