use serenity::all::{ChannelId, GuildId, MessageId, Reaction, ReactionType, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChange {
    Grant,
    Revoke,
}

#[derive(Debug, Clone)]
pub struct ReactionEvent {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub message_id: MessageId,
    pub emoji: String,
    pub user_id: UserId,
}

impl ReactionEvent {
    /// Reactions outside a guild, or without an attributable user, carry no
    /// role to reconcile and produce no event.
    pub fn from_gateway(reaction: &Reaction) -> Option<Self> {
        let guild_id = reaction.guild_id?;
        let user_id = reaction.user_id?;
        Some(ReactionEvent {
            guild_id,
            channel_id: reaction.channel_id,
            message_id: reaction.message_id,
            emoji: emoji_key(&reaction.emoji),
            user_id,
        })
    }
}

/// Canonical emoji key: the symbol itself for unicode emoji, `:name:` for
/// custom guild emoji. `EMOJI_ROLE_MAP` is written in the same two forms.
pub fn emoji_key(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(symbol) => symbol.clone(),
        ReactionType::Custom {
            name: Some(name), ..
        } => format!(":{name}:"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serenity::all::EmojiId;

    use super::*;

    #[test]
    fn unicode_emoji_keys_are_the_symbol_itself() {
        assert_eq!(emoji_key(&ReactionType::Unicode("🔥".to_string())), "🔥");
        assert_eq!(emoji_key(&ReactionType::Unicode("❤️‍🔥".to_string())), "❤️‍🔥");
    }

    #[test]
    fn custom_emoji_keys_are_colon_wrapped_names() {
        let emoji = ReactionType::Custom {
            animated: false,
            id: EmojiId::new(1330735745526272102),
            name: Some("heart_on_fire".to_string()),
        };

        assert_eq!(emoji_key(&emoji), ":heart_on_fire:");
    }
}
