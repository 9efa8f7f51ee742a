pub mod queue;
pub mod runner;
pub mod shelter;

pub use crate::domain::model::{Animal, Species};
pub use crate::domain::ports::{Clock, ManualClock, SystemClock};
pub use crate::utils::error::Result;
