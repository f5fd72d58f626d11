// codec.rs — Flat-file persistence for a GoalStore.
//
// One goal per line, comma-separated, no header, no escaping:
//
//   Simple/Eternal:  name,description,award_value,completed
//   Checklist:       name,description,award_value,completed,target_count,completed_count
//
// Two deliberate quirks, kept for compatibility with the historical
// format rather than fixed:
//
// - No kind tag is persisted. Lines are classified by field count alone,
//   so every 4-field line loads as a Simple goal — an Eternal goal does
//   not survive a save/load cycle with its kind intact.
// - Fields are not escaped. A name or description containing a comma
//   corrupts its record on reload (the line then parses as a different
//   shape, usually getting skipped).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::goal::Goal;
use crate::store::GoalStore;

/// Write every goal in the store to `path`, one line per goal,
/// newline-terminated. The in-memory store is untouched whether or not
/// the write succeeds.
pub fn save(store: &GoalStore, path: impl AsRef<Path>) -> Result<(), crate::GoalError> {
    let path = path.as_ref();
    let mut out = String::new();
    for goal in store.goals() {
        encode_line(goal, &mut out);
    }
    fs::write(path, out).map_err(|source| crate::GoalError::Io {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), goals = store.len(), "saved goal store");
    Ok(())
}

/// Read a store back from `path`.
///
/// A missing file is not an error — it loads as an empty store. Lines
/// with an unsupported field count, or fields that fail to parse, are
/// skipped with a warning; the rest of the file still loads. Goals enter
/// the store through `add_goal`, so the reloaded total score equals the
/// sum of the persisted award values.
pub fn load(path: impl AsRef<Path>) -> Result<GoalStore, crate::GoalError> {
    let path = path.as_ref();
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no goal file, starting empty");
            return Ok(GoalStore::new());
        }
        Err(source) => {
            return Err(crate::GoalError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    let mut store = GoalStore::new();
    let mut skipped = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        match decode_line(line) {
            Some(goal) => store.add_goal(goal),
            None => {
                skipped += 1;
                tracing::warn!(
                    path = %path.display(),
                    line = lineno + 1,
                    "skipping malformed goal record"
                );
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(path = %path.display(), skipped, "skipped malformed goal records");
    }
    tracing::debug!(path = %path.display(), goals = store.len(), "loaded goal store");
    Ok(store)
}

fn encode_line(goal: &Goal, out: &mut String) {
    use std::fmt::Write;
    match &goal.kind {
        crate::GoalKind::Checklist {
            target_count,
            completed_count,
        } => {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                goal.name,
                goal.description,
                goal.award_value,
                goal.completed,
                target_count,
                completed_count
            );
        }
        _ => {
            let _ = writeln!(
                out,
                "{},{},{},{}",
                goal.name, goal.description, goal.award_value, goal.completed
            );
        }
    }
}

/// Parse one record. `None` means the line doesn't fit either shape and
/// should be skipped.
fn decode_line(line: &str) -> Option<Goal> {
    let fields: Vec<&str> = line.split(',').collect();
    match fields.as_slice() {
        // 4 fields: reconstructed as Simple regardless of original kind.
        [name, description, award, completed] => {
            let award: i64 = award.parse().ok()?;
            let completed: bool = completed.parse().ok()?;
            let mut goal = Goal::simple(*name, *description, award);
            goal.completed = completed;
            Some(goal)
        }
        [name, description, award, completed, target, count] => {
            let award: i64 = award.parse().ok()?;
            let completed: bool = completed.parse().ok()?;
            let target_count: u32 = target.parse().ok()?;
            let completed_count: u32 = count.parse().ok()?;
            // Persisted fields are trusted as-is: the award value already
            // includes any earned bonus, and the counters are not replayed
            // through record_completion, so a completed checklist round-trips
            // with identical observable state.
            let mut goal = Goal::checklist(*name, *description, award, target_count);
            goal.completed = completed;
            if let crate::GoalKind::Checklist {
                completed_count: count,
                ..
            } = &mut goal.kind
            {
                *count = completed_count;
            }
            Some(goal)
        }
        _ => None,
    }
}
