use serenity::{
    all::Reaction,
    model::prelude::Ready,
    prelude::{Context, EventHandler},
};

use crate::models::handler::Handler;

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        self.on_ready(ctx, ready).await;
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        self.on_reaction_add(ctx, reaction).await;
    }

    async fn reaction_remove(&self, ctx: Context, reaction: Reaction) {
        self.on_reaction_remove(ctx, reaction).await;
    }
}
