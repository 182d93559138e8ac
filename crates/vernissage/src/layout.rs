pub mod planner;
pub mod positioning;

// Public re-export of the planner entry points for easier access
pub use planner::{available_width, plan_walls};
