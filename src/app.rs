//! The interactive menu loop.
//!
//! [`App`] owns the input and output streams and a [`TaskStore`]. The task
//! sequence itself is owned by [`App::run`] and handed to each flow, which
//! returns the sequence to carry forward. Every flow persists before
//! returning to the menu.
//!
//! ```text
//! MenuDisplay -> AwaitChoice -> AddFlow | CompleteFlow | RemoveFlow -> MenuDisplay
//!                            -> QuitFlow (terminal)
//! ```

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, error, info};

use crate::error::Result;
use crate::menu::{self, MenuChoice};
use crate::ops;
use crate::store::TaskStore;
use crate::task::Task;

/// What a flow hands back to the main loop.
#[derive(Debug)]
enum Flow {
    /// Go back to the menu with this sequence.
    Continue(Vec<Task>),
    /// Input ran dry mid-flow; quit with this sequence.
    EndOfInput(Vec<Task>),
}

/// Interactive session over arbitrary input and output streams.
pub struct App<R, W> {
    store: TaskStore,
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> App<R, W> {
    /// Creates a session with colored warnings disabled.
    pub fn new(store: TaskStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
            color: false,
        }
    }

    /// Enables or disables colored warnings.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Runs the session until the user quits or input ends.
    ///
    /// Returns the final task sequence, which has been persisted.
    ///
    /// # Errors
    ///
    /// Fails if the task file cannot be read at startup, or if reading
    /// input or writing output fails. Save failures are reported to the
    /// user and do not end the session.
    pub fn run(mut self) -> Result<Vec<Task>> {
        let loaded = self.store.load()?;
        if loaded.created {
            info!("Created new task file {}", self.store.path().display());
        }
        info!(
            "Session started with {} task(s) from {}",
            loaded.tasks.len(),
            self.store.path().display()
        );

        writeln!(self.output, "{}", menu::WELCOME_BANNER)?;
        for line in &loaded.malformed {
            let msg = format!("Ignoring malformed line: {}", line.content);
            self.warn(&msg)?;
        }

        let mut tasks = loaded.tasks;
        loop {
            self.show_menu(&tasks)?;

            let Some(line) = self.read_line()? else {
                debug!("End of input at menu prompt");
                return self.quit(tasks);
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(MenuChoice::AddTask) => self.add_flow(tasks)?,
                Ok(MenuChoice::CompleteTask) => self.complete_flow(tasks)?,
                Ok(MenuChoice::RemoveCompleted) => self.remove_flow(tasks)?,
                Ok(MenuChoice::Quit) => return self.quit(tasks),
                Err(invalid) => {
                    debug!("Invalid menu choice: {:?}", invalid.0);
                    writeln!(self.output, "Invalid option, try again.")?;
                    Flow::Continue(tasks)
                }
            };

            tasks = match flow {
                Flow::Continue(next) => next,
                Flow::EndOfInput(next) => return self.quit(next),
            };
        }
    }

    // =========================================================================
    // Flows
    // =========================================================================

    fn add_flow(&mut self, tasks: Vec<Task>) -> Result<Flow> {
        loop {
            write!(self.output, "Type Your Task: ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::EndOfInput(tasks));
            };

            match ops::validate_task_name(&line) {
                Ok(name) => {
                    let next = ops::add_task(&tasks, name);
                    debug!("Added task {:?}", name);
                    self.persist(&next)?;
                    return Ok(Flow::Continue(next));
                }
                Err(rejection) => self.warn(&rejection.to_string())?,
            }
        }
    }

    fn complete_flow(&mut self, tasks: Vec<Task>) -> Result<Flow> {
        writeln!(self.output, "Select a task to mark as complete:")?;
        write!(self.output, "{}", menu::render_listing(&tasks))?;
        self.output.flush()?;

        let Some(line) = self.read_line()? else {
            return Ok(Flow::EndOfInput(tasks));
        };

        let completed = ops::parse_task_number(&line)
            .map(|number| ops::complete_task(&tasks, number));

        let next = match completed {
            Some(Ok(next)) => next,
            Some(Err(e)) => {
                debug!("{e}");
                self.invalid_task_number()?;
                tasks
            }
            None => {
                debug!("Unparseable task number: {line:?}");
                self.invalid_task_number()?;
                tasks
            }
        };

        self.persist(&next)?;
        Ok(Flow::Continue(next))
    }

    fn remove_flow(&mut self, tasks: Vec<Task>) -> Result<Flow> {
        let next = ops::remove_completed(&tasks);
        debug!("Removed {} completed task(s)", tasks.len() - next.len());
        self.persist(&next)?;
        Ok(Flow::Continue(next))
    }

    fn quit(mut self, tasks: Vec<Task>) -> Result<Vec<Task>> {
        self.persist(&tasks)?;
        writeln!(self.output, "Goodbye")?;
        self.output.flush()?;
        info!("Session ended with {} task(s)", tasks.len());
        Ok(tasks)
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn show_menu(&mut self, tasks: &[Task]) -> Result<()> {
        writeln!(self.output, "{}", menu::MENU_TEXT)?;
        writeln!(
            self.output,
            "{}",
            menu::listing_heading(self.store.has_records())
        )?;
        write!(self.output, "{}", menu::render_listing(tasks))?;
        self.output.flush()?;
        Ok(())
    }

    /// Saves the sequence, reporting rather than propagating failures.
    fn persist(&mut self, tasks: &[Task]) -> Result<()> {
        if let Err(e) = self.store.save(tasks) {
            error!("Failed to save {}: {e}", self.store.path().display());
            let msg = format!(
                "Failed to save tasks to {}: {e}",
                self.store.path().display()
            );
            self.warn(&msg)?;
        }
        Ok(())
    }

    fn invalid_task_number(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Invalid task number. Please enter a valid number."
        )?;
        Ok(())
    }

    fn warn(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", message.yellow())?;
        } else {
            writeln!(self.output, "{message}")?;
        }
        Ok(())
    }

    /// Reads one line without its terminator; `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced with U+FFFD so it is treated as ordinary
    /// bad input instead of ending the session.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}
