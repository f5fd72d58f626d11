// shell.rs — The interactive menu loop.
//
// The shell owns the process-lifetime GoalStore and translates menu
// choices into core operations. Core errors (unknown goal name, save
// failures) are reported and the loop continues; a failed load leaves
// the in-memory store as it was.

use std::io::{self, Write};

use quest_core::{codec, Goal, GoalError, GoalStore};

pub struct Shell {
    store: GoalStore,
    default_file: String,
}

impl Shell {
    pub fn new(default_file: String) -> Self {
        Self {
            store: GoalStore::new(),
            default_file,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            println!();
            println!("Quest — goal tracker");
            println!("1. Create new goal");
            println!("2. List goals");
            println!("3. Save goals");
            println!("4. Load goals");
            println!("5. Record event");
            println!("6. Quit");
            let Some(choice) = prompt("Enter your choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => {
                    self.create_goal()?;
                    self.show_score();
                }
                "2" => self.list_goals(),
                "3" => self.save_goals()?,
                "4" => self.load_goals()?,
                "5" => {
                    self.record_event()?;
                    self.show_score();
                }
                "6" => break,
                _ => println!("Invalid choice. Please enter a number from 1 to 6."),
            }
        }
        Ok(())
    }

    fn create_goal(&mut self) -> anyhow::Result<()> {
        println!("Select goal type:");
        println!("1. Simple goal");
        println!("2. Eternal goal");
        println!("3. Checklist goal");
        let Some(kind) = prompt("Enter your choice: ")? else {
            return Ok(());
        };
        if !matches!(kind.as_str(), "1" | "2" | "3") {
            println!("Invalid choice.");
            return Ok(());
        }

        let Some(name) = prompt("Enter goal name: ")? else {
            return Ok(());
        };
        let Some(description) = prompt("Enter a short description of the goal: ")? else {
            return Ok(());
        };
        let Some(award) = prompt_parse::<i64>("Enter points for completion: ")? else {
            return Ok(());
        };

        let goal = match kind.as_str() {
            "1" => Goal::simple(name.as_str(), description.as_str(), award),
            "2" => Goal::eternal(name.as_str(), description.as_str(), award),
            _ => {
                let Some(target) =
                    prompt_parse::<u32>("Enter target count for the checklist goal: ")?
                else {
                    return Ok(());
                };
                Goal::checklist(name.as_str(), description.as_str(), award, target)
            }
        };
        println!("Added {} goal '{name}'.", goal.kind);
        self.store.add_goal(goal);
        Ok(())
    }

    fn list_goals(&self) {
        if self.store.is_empty() {
            println!("No goals yet.");
            return;
        }
        for line in self.store.status_lines() {
            println!("{line}");
        }
    }

    fn save_goals(&self) -> anyhow::Result<()> {
        let Some(file) = self.prompt_file("Enter the file to save goals to")? else {
            return Ok(());
        };
        match codec::save(&self.store, &file) {
            Ok(()) => println!("Goals saved to {file}."),
            Err(err) => println!("Error saving goals: {err}"),
        }
        Ok(())
    }

    fn load_goals(&mut self) -> anyhow::Result<()> {
        let Some(file) = self.prompt_file("Enter the file to load goals from")? else {
            return Ok(());
        };
        // On failure the current store stays in place, unsaved but intact.
        match codec::load(&file) {
            Ok(loaded) => {
                println!("Loaded {} goals from {file}.", loaded.len());
                self.store = loaded;
            }
            Err(err) => println!("Error loading goals: {err}"),
        }
        Ok(())
    }

    fn record_event(&mut self) -> anyhow::Result<()> {
        self.list_goals();
        let Some(name) = prompt("Enter the name of the goal to record: ")? else {
            return Ok(());
        };
        match self.store.record_completion(&name) {
            Ok(()) => println!("Goal '{name}' completed successfully."),
            Err(GoalError::NotFound(_)) => println!("Goal '{name}' not found."),
            Err(err) => println!("Error recording completion: {err}"),
        }
        Ok(())
    }

    fn show_score(&self) {
        println!("Total score: {}", self.store.total_score());
    }

    /// Prompt for a file name, falling back to the --file default on an
    /// empty answer.
    fn prompt_file(&self, text: &str) -> anyhow::Result<Option<String>> {
        let Some(answer) = prompt(&format!("{text} [{}]: ", self.default_file))? else {
            return Ok(None);
        };
        Ok(Some(if answer.is_empty() {
            self.default_file.clone()
        } else {
            answer
        }))
    }
}

/// Print a prompt and read one trimmed line. `None` means stdin hit EOF.
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{text}");
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompt until the user enters a valid integer. `None` means EOF.
fn prompt_parse<T: std::str::FromStr>(text: &str) -> anyhow::Result<Option<T>> {
    loop {
        let Some(answer) = prompt(text)? else {
            return Ok(None);
        };
        match answer.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => println!("Invalid input. Please enter a valid integer."),
        }
    }
}
