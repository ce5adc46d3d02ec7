use crate::errors::Result;
use crate::goals::goals_model::Goal;

/// Trait for goal repository operations
pub trait GoalRepositoryTrait: Send + Sync {
    fn load_goals(&self) -> Result<Vec<Goal>>;
}
