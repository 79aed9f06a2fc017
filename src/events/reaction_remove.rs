use serenity::{all::Reaction, prelude::Context};

use crate::{
    common::{audit::TracingAudit, directory::GatewayDirectory, roles::apply_reaction_change},
    models::{
        handler::Handler,
        reaction::{ReactionEvent, RoleChange},
    },
};

impl Handler {
    pub async fn on_reaction_remove(&self, ctx: Context, reaction: Reaction) {
        let Some(event) = ReactionEvent::from_gateway(&reaction) else {
            return;
        };

        let directory = GatewayDirectory::new(&ctx);
        apply_reaction_change(
            &self.config,
            &directory,
            &TracingAudit,
            &event,
            RoleChange::Revoke,
        )
        .await;
    }
}
