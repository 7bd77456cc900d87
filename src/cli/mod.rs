//! Terminal demo player

pub mod play;
pub mod view_state;
