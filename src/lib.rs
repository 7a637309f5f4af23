pub mod builder;
pub mod config;
pub mod contracts;
pub mod control;
pub mod events;
pub mod fab;
pub mod icon;
pub mod id;
pub mod item;
pub mod layout;
pub mod motion;
pub mod prelude;
pub mod scrim;
pub mod state;
pub mod transition;

#[cfg(test)]
mod test_public_api;
#[cfg(test)]
mod test_state_logic;

pub use builder::FabBuilder;
pub use config::FabConfig;
pub use events::FabDelegate;
pub use fab::Fab;
pub use item::FabItem;
