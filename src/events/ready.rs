use serenity::{gateway::ActivityData, model::prelude::Ready, prelude::Context};
use tracing::info;

use crate::models::handler::Handler;

impl Handler {
    pub async fn on_ready(&self, ctx: Context, ready: Ready) {
        info!("{} is connected", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("for reactions")));

        info!(
            "Watching message {} in channel {} of guild {} with {} emoji-to-role bindings",
            self.config.target.message,
            self.config.target.channel,
            self.config.target.guild,
            self.config.roles.len()
        );
    }
}
