pub(crate) mod error;
pub mod forecast;
pub mod model;
pub mod reconcile;
mod show;

pub use show::{PlanArgs, run};
