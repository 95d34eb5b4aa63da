//! Core library modules for tasktrack.
//!
//! - **Task model**: [`task`] records, statuses, sort keys and filters
//! - **Ordering**: [`sort`], the stable merge sort behind every listing
//! - **Reporting**: [`stats`] figures and chart series, [`view`] rendering
//! - **Infrastructure**: [`config`], [`data_storage`], [`messages`],
//!   [`logging`], [`error`], [`formatter`]
//!
//! ## Usage
//!
//! ```rust
//! use tasktrack::libs::sort::sort_by_name;
//! use tasktrack::libs::task::Task;
//!
//! let tasks = vec![Task::new(2, "b"), Task::new(1, "a")];
//! let sorted = sort_by_name(&tasks, "id", true)?;
//! assert_eq!(sorted[0].id, 1);
//! assert!(sort_by_name(&tasks, "priority", true).is_err());
//! # Ok::<(), tasktrack::libs::error::SortError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod sort;
pub mod stats;
pub mod task;
pub mod view;
