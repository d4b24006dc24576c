//! Menu text, menu choices, and the numbered task listing.

use std::fmt::Write as _;
use std::str::FromStr;

use crate::task::Task;

pub const WELCOME_BANNER: &str = "Welcome to the TODO List App\n\
                                  ----------------------------";

pub const MENU_TEXT: &str = "What Would You Like To Do?\n\
                             1. Add Task\n\
                             2. Complete Tasks\n\
                             3. Remove Completed Tasks\n\
                             4. Quit\n";

/// One entry of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddTask,
    CompleteTask,
    RemoveCompleted,
    Quit,
}

impl TryFrom<i64> for MenuChoice {
    type Error = i64;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::AddTask),
            2 => Ok(MenuChoice::CompleteTask),
            3 => Ok(MenuChoice::RemoveCompleted),
            4 => Ok(MenuChoice::Quit),
            other => Err(other),
        }
    }
}

/// Error for input that is not a menu number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .ok()
            .and_then(|n| MenuChoice::try_from(n).ok())
            .ok_or_else(|| InvalidChoice(s.to_string()))
    }
}

/// Render tasks as `<n>: <name>: Completed|Incomplete`, one per line.
#[must_use]
pub fn render_listing(tasks: &[Task]) -> String {
    let mut out = String::new();
    for (idx, task) in tasks.iter().enumerate() {
        let _ = writeln!(out, "{}: {}", idx + 1, task);
    }
    out
}

/// Heading shown above the listing.
#[must_use]
pub fn listing_heading(has_records: bool) -> &'static str {
    if has_records {
        "Current Tasks:"
    } else {
        "No Current Tasks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_menu_choices() {
        assert_eq!("1".parse(), Ok(MenuChoice::AddTask));
        assert_eq!("2".parse(), Ok(MenuChoice::CompleteTask));
        assert_eq!("3".parse(), Ok(MenuChoice::RemoveCompleted));
        assert_eq!(" 4 ".parse(), Ok(MenuChoice::Quit));
    }

    #[test]
    fn test_parse_invalid_choices() {
        for input in ["0", "5", "-1", "abc", "", "1.0"] {
            assert!(input.parse::<MenuChoice>().is_err(), "input {input:?}");
        }
    }

    #[test]
    fn test_render_listing() {
        let tasks = vec![Task::new("Buy milk"), Task::with_status("Walk dog", true)];
        assert_eq!(
            render_listing(&tasks),
            "1: Buy milk: Incomplete\n2: Walk dog: Completed\n"
        );
        assert_eq!(render_listing(&[]), "");
    }

    #[test]
    fn test_listing_heading() {
        assert_eq!(listing_heading(true), "Current Tasks:");
        assert_eq!(listing_heading(false), "No Current Tasks");
    }
}
