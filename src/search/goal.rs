/// The goal of a search query. Must be a pure function of the state.
///
/// Implemented for any `Fn(&S) -> bool` closure, so queries can pass a
/// predicate directly.
pub trait GoalCondition<S> {
    /// Returns true if the goal is satisfied by the given state.
    fn is_satisfied(&self, state: &S) -> bool;
}

impl<S, F> GoalCondition<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_satisfied(&self, state: &S) -> bool {
        self(state)
    }
}
