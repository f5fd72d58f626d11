// store.rs — GoalStore: ordered goal collection plus the aggregate score.
//
// The total score is an event log, not a derived sum: a goal's current
// award value is added at add-time and again at every recorded
// completion, whatever the value happens to be at that instant. Call
// order matters for Eternal and Checklist goals, whose award values
// mutate over time.

use crate::error::GoalError;
use crate::goal::Goal;

/// Ordered collection of goals with a running aggregate score.
///
/// Insertion order is preserved and is the display order. Process-local,
/// single-writer state; created empty and mutated in place.
#[derive(Debug, Default)]
pub struct GoalStore {
    goals: Vec<Goal>,
    total_score: i64,
}

impl GoalStore {
    /// Create an empty store with a zero score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a goal and credit its current award value to the total.
    ///
    /// No uniqueness check: duplicate names are permitted, and only the
    /// first match matters for completion lookup.
    pub fn add_goal(&mut self, goal: Goal) {
        self.total_score += goal.current_award();
        self.goals.push(goal);
    }

    /// Record a completion against the first goal whose name matches.
    ///
    /// On a match the goal mutates per its kind and its new current
    /// award is credited to the total. On no match, returns
    /// [`GoalError::NotFound`] and leaves the store and score untouched.
    pub fn record_completion(&mut self, name: &str) -> Result<(), GoalError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.name == name)
            .ok_or_else(|| GoalError::NotFound(name.to_string()))?;
        goal.record_completion();
        self.total_score += goal.current_award();
        Ok(())
    }

    /// Status lines for every goal, in insertion order.
    pub fn status_lines(&self) -> Vec<String> {
        self.goals.iter().map(Goal::status_line).collect()
    }

    /// The running aggregate score.
    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    /// Read-only view of the goals, in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Whether the store holds any goals.
    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    /// Number of goals in the store.
    pub fn len(&self) -> usize {
        self.goals.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::GoalKind;

    #[test]
    fn new_store_is_empty_with_zero_score() {
        let store = GoalStore::new();
        assert!(store.is_empty());
        assert_eq!(store.total_score(), 0);
    }

    #[test]
    fn add_goal_credits_current_award() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("run", "run a marathon", 1000));
        assert_eq!(store.total_score(), 1000);
        store.add_goal(Goal::eternal("read", "read scriptures", 100));
        assert_eq!(store.total_score(), 1100);
        assert_eq!(store.len(), 2);
    }

    // The scenario from the scoring contract: add Simple(10) and
    // Checklist(5, target 2), then complete the checklist twice.
    #[test]
    fn checklist_scoring_scenario() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("A", "desc", 10));
        store.add_goal(Goal::checklist("B", "desc", 5, 2));
        assert_eq!(store.total_score(), 15);

        store.record_completion("B").unwrap();
        assert_eq!(store.total_score(), 20);
        assert!(matches!(
            store.goals()[1].kind,
            GoalKind::Checklist {
                completed_count: 1,
                ..
            }
        ));

        store.record_completion("B").unwrap();
        assert_eq!(store.goals()[1].current_award(), 505);
        assert_eq!(store.total_score(), 525);
        assert!(store.goals()[1].completed);
    }

    #[test]
    fn simple_completion_awards_twice_but_flag_once() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("run", "run a marathon", 1000));
        assert_eq!(store.total_score(), 1000);

        store.record_completion("run").unwrap();
        assert_eq!(store.total_score(), 2000);

        // Non-idempotent total, idempotent flag.
        store.record_completion("run").unwrap();
        assert_eq!(store.total_score(), 3000);
        assert!(store.goals()[0].completed);
    }

    #[test]
    fn eternal_completions_credit_growing_award() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::eternal("read", "read scriptures", 100));
        assert_eq!(store.total_score(), 100);

        store.record_completion("read").unwrap();
        assert_eq!(store.total_score(), 201);
        store.record_completion("read").unwrap();
        assert_eq!(store.total_score(), 303);
    }

    #[test]
    fn unknown_name_returns_not_found_and_leaves_store_unchanged() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("run", "run a marathon", 1000));

        let result = store.record_completion("swim");
        assert!(matches!(result, Err(GoalError::NotFound(name)) if name == "swim"));
        assert_eq!(store.total_score(), 1000);
        assert!(!store.goals()[0].completed);
    }

    #[test]
    fn duplicate_names_first_match_wins() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("run", "first", 10));
        store.add_goal(Goal::simple("run", "second", 20));

        store.record_completion("run").unwrap();
        assert!(store.goals()[0].completed);
        assert!(!store.goals()[1].completed);
    }

    #[test]
    fn status_lines_keep_insertion_order() {
        let mut store = GoalStore::new();
        store.add_goal(Goal::simple("a", "one", 1));
        store.add_goal(Goal::simple("b", "two", 2));
        store.add_goal(Goal::checklist("c", "three", 3, 4));

        let lines = store.status_lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("a "));
        assert!(lines[1].starts_with("b "));
        assert_eq!(lines[2], "c (three) - Completed 0/4 times");
    }
}
