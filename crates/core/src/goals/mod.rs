//! Goals module - domain models and traits.

mod goals_model;
mod goals_traits;

pub use goals_model::Goal;
pub use goals_traits::GoalRepositoryTrait;
