pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::scenario::{ScenarioConfig, ScenarioEvent};
pub use crate::config::CliConfig;
pub use crate::core::queue::AdoptionQueue;
pub use crate::core::runner::{AdoptionReport, EventOutcome, ScenarioRunner};
pub use crate::core::shelter::Shelter;
pub use crate::domain::model::{Animal, Species};
pub use crate::domain::ports::{Clock, ManualClock, SystemClock};
pub use crate::utils::error::{Result, ShelterError};
