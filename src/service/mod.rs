//! Business logic sitting between the Discord handlers and the repositories.
//!
//! - `presence` - Accrues presence durations into member accumulators
//! - `tracking` - Guild tracking configuration (enable, disable, reset)
//! - `panel` - Renders and posts the paginated status panel

pub mod panel;
pub mod presence;
pub mod tracking;
