pub mod reaction_add;
pub mod reaction_remove;
pub mod ready;
pub mod router;
