mod execute;
mod plan;

pub use execute::{execute_filter_plan, run_filter, ExecuteError, FilterResult};
pub use plan::{build_filter_plan, Candidate, FilterPlan, PlanError};
