pub use crate::builder::FabBuilder;
pub use crate::config::FabConfig;
pub use crate::contracts::{Expandable, MotionAware, WithId};
pub use crate::events::FabDelegate;
pub use crate::fab::Fab;
pub use crate::item::FabItem;
pub use crate::motion::{FabMotion, MotionLevel, SpringCurve};
