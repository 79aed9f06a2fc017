use super::config::ReactionRoleConfig;

pub struct Handler {
    pub config: ReactionRoleConfig,
}
