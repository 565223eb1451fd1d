pub mod config;
pub mod filter;
pub mod keep_list;
pub mod report;
pub mod utils;

// Re-export commonly used types
pub use config::{BlankLinePolicy, ConfigError, Disposition, ExtensionFilter, FilterConfig};
pub use filter::{
    build_filter_plan, execute_filter_plan, run_filter, Candidate, ExecuteError, FilterPlan,
    FilterResult, PlanError,
};
pub use keep_list::{
    classify, load_keep_list, parse_keep_list, Classification, KeepList, KeepListError,
};
pub use report::{render_json, render_text, FilterReport};
