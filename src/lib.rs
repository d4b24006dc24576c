//! tasklist - a personal task list in a plain text file
//!
//! Tasks live in a flat file, one `name:true|false` record per line. The
//! `tasklist` binary loads that file, runs a numbered terminal menu, and
//! rewrites the file after every change.
//!
//! # Architecture
//!
//! - [`task`] - The immutable task record
//! - [`codec`] - Text format for task files
//! - [`store`] - Loading and saving a task file on disk
//! - [`ops`] - Pure operations over a task sequence
//! - [`menu`] - Menu choices and task listing rendering
//! - [`app`] - The interactive loop
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Custom error types and handling
//!
//! # Example
//!
//! ```rust,no_run
//! use std::io::{self, BufReader};
//! use tasklist::{App, TaskStore};
//!
//! let store = TaskStore::new("Task List");
//! let stdin = BufReader::new(io::stdin());
//! let tasks = App::new(store, stdin, io::stdout()).run()?;
//! println!("{} task(s) saved", tasks.len());
//! # Ok::<(), tasklist::TaskListError>(())
//! ```

pub mod app;
pub mod codec;
pub mod config;
pub mod error;
pub mod menu;
pub mod ops;
pub mod store;
pub mod task;

// Re-export commonly used types
pub use app::App;
pub use codec::{MalformedLine, RecordLayout};
pub use config::{Config, ConfigOverrides};
pub use error::{Result, TaskListError};
pub use menu::MenuChoice;
pub use store::{Loaded, TaskStore};
pub use task::Task;
