// goal.rs — Goal: one trackable objective with kind-specific completion
// semantics.
//
// The three kinds share a flat struct; kind-specific state lives in the
// GoalKind enum and a single dispatch in record_completion() implements
// the per-kind rules. No trait objects needed.

use std::fmt;

/// The kind of a goal, carrying any kind-specific state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GoalKind {
    /// Completed once; the award value never changes.
    Simple,

    /// Never truly done. Each completion bumps the award value by one;
    /// the `completed` flag is set anyway, as a side effect, but carries
    /// no terminal meaning.
    Eternal,

    /// Done after `target_count` completions, with a 500-point bonus on
    /// the final one. `completed_count` starts at 0.
    Checklist {
        target_count: u32,
        completed_count: u32,
    },
}

impl fmt::Display for GoalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoalKind::Simple => write!(f, "simple"),
            GoalKind::Eternal => write!(f, "eternal"),
            GoalKind::Checklist { .. } => write!(f, "checklist"),
        }
    }
}

/// One trackable objective.
///
/// `name` is the lookup key for recording completions. Names are expected
/// to be unique within a store; duplicates are permitted and the first
/// match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    pub name: String,
    pub description: String,
    /// Points contributed to the aggregate score per scoring event.
    /// Mutable for Eternal and Checklist goals.
    pub award_value: i64,
    pub completed: bool,
    pub kind: GoalKind,
}

impl Goal {
    /// Create a simple one-shot goal.
    pub fn simple(name: impl Into<String>, description: impl Into<String>, award: i64) -> Self {
        Self::with_kind(name, description, award, GoalKind::Simple)
    }

    /// Create an eternal goal (never terminal).
    pub fn eternal(name: impl Into<String>, description: impl Into<String>, award: i64) -> Self {
        Self::with_kind(name, description, award, GoalKind::Eternal)
    }

    /// Create a checklist goal that completes after `target_count`
    /// recorded completions.
    pub fn checklist(
        name: impl Into<String>,
        description: impl Into<String>,
        award: i64,
        target_count: u32,
    ) -> Self {
        Self::with_kind(
            name,
            description,
            award,
            GoalKind::Checklist {
                target_count,
                completed_count: 0,
            },
        )
    }

    fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        award: i64,
        kind: GoalKind,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            award_value: award,
            completed: false,
            kind,
        }
    }

    /// Record one completion of this goal.
    ///
    /// Pure state mutation, no failure modes:
    /// - Simple: sets `completed`; award unchanged. Repeated calls keep
    ///   setting the flag — the store still re-awards each time.
    /// - Eternal: bumps `award_value` by one, then sets `completed`.
    /// - Checklist: bumps `completed_count`; on reaching `target_count`,
    ///   adds the 500-point bonus and sets `completed`.
    pub fn record_completion(&mut self) {
        match &mut self.kind {
            GoalKind::Simple => {
                self.completed = true;
            }
            GoalKind::Eternal => {
                self.award_value += 1;
                self.completed = true;
            }
            GoalKind::Checklist {
                target_count,
                completed_count,
            } => {
                *completed_count += 1;
                if completed_count == target_count {
                    self.award_value += 500;
                    self.completed = true;
                }
            }
        }
    }

    /// The amount the store should add to its total at this instant:
    /// the award value after whatever mutation `record_completion` just
    /// performed, or the initial value right after construction.
    pub fn current_award(&self) -> i64 {
        self.award_value
    }

    /// Human-readable one-line status. Checklist goals show progress as
    /// `completed/target`; the others show a Yes/No indicator.
    pub fn status_line(&self) -> String {
        match &self.kind {
            GoalKind::Checklist {
                target_count,
                completed_count,
            } => format!(
                "{} ({}) - Completed {}/{} times",
                self.name, self.description, completed_count, target_count
            ),
            _ => format!(
                "{} ({}) - Completed: {}",
                self.name,
                self.description,
                if self.completed { "Yes" } else { "No" }
            ),
        }
    }
}
