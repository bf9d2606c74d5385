pub mod catalog;
pub mod config;
pub mod display;
pub mod model;
pub mod planner;

pub use config::PlannerConfig;
pub use model::{
  Activity,
  ActivityDraft,
  ActivityId,
  Day
};
pub use planner::{
  PlanView,
  PlannerState
};
