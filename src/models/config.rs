use std::collections::HashMap;
use std::env;
use std::fmt;

use serenity::all::{ChannelId, GuildId, MessageId, RoleId};

use super::reaction::ReactionEvent;

#[derive(Debug)]
pub enum ConfigError {
    MissingVariable(&'static str),
    InvalidVariable(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVariable(name) => {
                write!(f, "required environment variable {name} is not set")
            }
            ConfigError::InvalidVariable(name, detail) => {
                write!(f, "environment variable {name} is invalid: {detail}")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchTarget {
    pub guild: GuildId,
    pub channel: ChannelId,
    pub message: MessageId,
}

impl WatchTarget {
    pub fn matches(&self, event: &ReactionEvent) -> bool {
        event.guild_id == self.guild
            && event.channel_id == self.channel
            && event.message_id == self.message
    }
}

pub struct ReactionRoleConfig {
    pub target: WatchTarget,
    pub roles: HashMap<String, RoleId>,
}

impl ReactionRoleConfig {
    /// Reads the watched message and the emoji-to-role table from
    /// `GUILD_ID`, `ROLE_CHANNEL_ID`, `ROLE_MESSAGE_ID` and `EMOJI_ROLE_MAP`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(ReactionRoleConfig {
            target: WatchTarget {
                guild: GuildId::new(id_var("GUILD_ID")?),
                channel: ChannelId::new(id_var("ROLE_CHANNEL_ID")?),
                message: MessageId::new(id_var("ROLE_MESSAGE_ID")?),
            },
            roles: parse_emoji_role_map(&required_var("EMOJI_ROLE_MAP")?)?,
        })
    }

    pub fn role_for(&self, emoji: &str) -> Option<RoleId> {
        self.roles.get(emoji).copied()
    }
}

fn required_var(name: &'static str) -> Result<String, ConfigError> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVariable(name)),
    }
}

fn id_var(name: &'static str) -> Result<u64, ConfigError> {
    let raw = required_var(name)?;
    match raw.trim().parse::<u64>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(ConfigError::InvalidVariable(
            name,
            format!("`{}` is not a valid Discord ID", raw.trim()),
        )),
    }
}

/// Parses `EMOJI_ROLE_MAP`, a comma-separated list of `emoji=role_id` pairs,
/// e.g. `🔥=1330735745526272102` or `:verified:=1330735745526272102`.
pub fn parse_emoji_role_map(raw: &str) -> Result<HashMap<String, RoleId>, ConfigError> {
    let mut roles = HashMap::new();
    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        let Some((emoji, role_id)) = entry.split_once('=') else {
            return Err(ConfigError::InvalidVariable(
                "EMOJI_ROLE_MAP",
                format!("`{entry}` is not an `emoji=role_id` pair"),
            ));
        };
        let emoji = emoji.trim();
        if emoji.is_empty() {
            return Err(ConfigError::InvalidVariable(
                "EMOJI_ROLE_MAP",
                format!("`{entry}` is missing the emoji key"),
            ));
        }
        let role_id = match role_id.trim().parse::<u64>() {
            Ok(id) if id != 0 => RoleId::new(id),
            _ => {
                return Err(ConfigError::InvalidVariable(
                    "EMOJI_ROLE_MAP",
                    format!("`{entry}` does not name a valid role ID"),
                ))
            }
        };
        if roles.insert(emoji.to_string(), role_id).is_some() {
            return Err(ConfigError::InvalidVariable(
                "EMOJI_ROLE_MAP",
                format!("`{emoji}` is bound more than once"),
            ));
        }
    }
    if roles.is_empty() {
        return Err(ConfigError::InvalidVariable(
            "EMOJI_ROLE_MAP",
            "no emoji=role_id pairs configured".to_string(),
        ));
    }
    Ok(roles)
}

#[cfg(test)]
mod tests {
    use serenity::all::UserId;

    use super::*;

    fn target() -> WatchTarget {
        WatchTarget {
            guild: GuildId::new(1329284464928624752),
            channel: ChannelId::new(1329284464928624755),
            message: MessageId::new(1330743887345487872),
        }
    }

    fn event_on(guild: u64, channel: u64, message: u64) -> ReactionEvent {
        ReactionEvent {
            guild_id: GuildId::new(guild),
            channel_id: ChannelId::new(channel),
            message_id: MessageId::new(message),
            emoji: "🔥".to_string(),
            user_id: UserId::new(4000),
        }
    }

    #[test]
    fn target_matches_the_watched_message_only() {
        let target = target();

        assert!(target.matches(&event_on(
            1329284464928624752,
            1329284464928624755,
            1330743887345487872
        )));
        assert!(!target.matches(&event_on(99, 1329284464928624755, 1330743887345487872)));
        assert!(!target.matches(&event_on(1329284464928624752, 99, 1330743887345487872)));
        assert!(!target.matches(&event_on(1329284464928624752, 1329284464928624755, 99)));
    }

    #[test]
    fn role_lookup_is_exact() {
        let config = ReactionRoleConfig {
            target: target(),
            roles: parse_emoji_role_map("🔥=1330735745526272102").unwrap(),
        };

        assert_eq!(
            config.role_for("🔥"),
            Some(RoleId::new(1330735745526272102))
        );
        assert_eq!(config.role_for("❤️"), None);
        assert_eq!(config.role_for(""), None);
    }

    #[test]
    fn parses_a_single_pair() {
        let roles = parse_emoji_role_map("🔥=1330735745526272102").unwrap();

        assert_eq!(roles.len(), 1);
        assert_eq!(roles.get("🔥"), Some(&RoleId::new(1330735745526272102)));
    }

    #[test]
    fn parses_multiple_pairs_with_whitespace() {
        let roles = parse_emoji_role_map(" 🔥=1 , :verified:=2 ,🎂=3, ").unwrap();

        assert_eq!(roles.len(), 3);
        assert_eq!(roles.get("🔥"), Some(&RoleId::new(1)));
        assert_eq!(roles.get(":verified:"), Some(&RoleId::new(2)));
        assert_eq!(roles.get("🎂"), Some(&RoleId::new(3)));
    }

    #[test]
    fn rejects_entries_without_a_role_id() {
        assert!(parse_emoji_role_map("🔥").is_err());
        assert!(parse_emoji_role_map("🔥=").is_err());
        assert!(parse_emoji_role_map("🔥=best-role").is_err());
        assert!(parse_emoji_role_map("🔥=0").is_err());
    }

    #[test]
    fn rejects_entries_without_an_emoji() {
        assert!(parse_emoji_role_map("=123").is_err());
        assert!(parse_emoji_role_map("  =123").is_err());
    }

    #[test]
    fn rejects_duplicate_emoji_keys() {
        assert!(parse_emoji_role_map("🔥=1,🔥=2").is_err());
    }

    #[test]
    fn rejects_an_empty_map() {
        assert!(parse_emoji_role_map("").is_err());
        assert!(parse_emoji_role_map(" , ,").is_err());
    }

    #[test]
    fn errors_name_the_offending_variable() {
        let missing = ConfigError::MissingVariable("GUILD_ID");
        assert!(missing.to_string().contains("GUILD_ID"));

        let invalid = parse_emoji_role_map("🔥=zero").unwrap_err();
        assert!(invalid.to_string().contains("EMOJI_ROLE_MAP"));
    }
}
