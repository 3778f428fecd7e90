pub mod calculator;

pub use calculator::{
    compute_duration_adjusted_goal, compute_flat_adjusted_goal, round2, GoalBreakdown,
    GoalInputs,
};
