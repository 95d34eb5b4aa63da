//! Stable merge sort over task records.
//!
//! Ordering is driven by a [`SortKey`] and a direction. Keys are projected
//! once per record before sorting:
//!
//! - `id` → the integer id
//! - `title` → the title folded to lowercase, so ordering ignores case
//! - `status` → the status name as stored (`completed` < `pending`)
//! - `due_date` / `created_at` → the date or timestamp
//!
//! A record without a value for the active key always ends up after every
//! record that has one, in both directions. Records whose keys compare equal
//! (two missing keys included) keep their input order.
//!
//! ## Usage
//!
//! ```rust
//! use tasktrack::libs::sort::sort_tasks;
//! use tasktrack::libs::task::{SortKey, Task};
//!
//! let tasks = vec![Task::new(1, "Banana"), Task::new(2, "apple")];
//! let sorted = sort_tasks(&tasks, SortKey::Title, true);
//! assert_eq!(sorted[0].id, 2);
//! ```

use super::error::SortError;
use super::task::{SortKey, Task};
use chrono::{NaiveDate, NaiveDateTime};

/// Comparable projection of one task field.
///
/// Only values produced for the same [`SortKey`] are ever compared with each
/// other, so the derived ordering across variants is never observed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    Id(i64),
    Text(String),
    Status(&'static str),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

type Keyed<'a> = (Option<SortValue>, &'a Task);

/// Returns a new vector holding `tasks` ordered by `sort_by`.
///
/// The input slice is left untouched. Missing keys sort last regardless of
/// `ascending`, and equal keys preserve input order.
pub fn sort_tasks(tasks: &[Task], sort_by: SortKey, ascending: bool) -> Vec<Task> {
    tracing::trace!(count = tasks.len(), sort_by = %sort_by, ascending, "sorting tasks");

    let keyed: Vec<Keyed> = tasks.iter().map(|task| (sort_value(task, sort_by), task)).collect();

    merge_sort(keyed, ascending).into_iter().map(|(_, task)| task.clone()).collect()
}

/// Same as [`sort_tasks`], for callers holding the key as text.
///
/// The key is validated before any work is done; an unknown name is
/// reported as [`SortError::InvalidSortKey`] even for an empty slice.
pub fn sort_by_name(tasks: &[Task], sort_by: &str, ascending: bool) -> Result<Vec<Task>, SortError> {
    let key: SortKey = sort_by.parse()?;
    Ok(sort_tasks(tasks, key, ascending))
}

fn sort_value(task: &Task, sort_by: SortKey) -> Option<SortValue> {
    match sort_by {
        SortKey::Id => Some(SortValue::Id(task.id)),
        SortKey::Title => task.title.as_ref().map(|title| SortValue::Text(title.to_lowercase())),
        SortKey::Status => Some(SortValue::Status(task.status.as_str())),
        SortKey::DueDate => task.due_date.map(SortValue::Date),
        SortKey::CreatedAt => task.created_at.map(SortValue::Timestamp),
    }
}

fn merge_sort(mut items: Vec<Keyed<'_>>, ascending: bool) -> Vec<Keyed<'_>> {
    if items.len() <= 1 {
        return items;
    }

    // Left half gets the floor share
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, ascending);
    let right = merge_sort(right, ascending);

    merge(left, right, ascending)
}

fn merge<'a>(left: Vec<Keyed<'a>>, right: Vec<Keyed<'a>>, ascending: bool) -> Vec<Keyed<'a>> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => takes_left(a.0.as_ref(), b.0.as_ref(), ascending),
            _ => break,
        };

        if take_left {
            result.extend(left.next());
        } else {
            result.extend(right.next());
        }
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Whether the left candidate is emitted before the right one.
///
/// Missing values lose against present ones in both directions; ties and
/// double-missing pairs go to the left so the merge stays stable.
fn takes_left(a: Option<&SortValue>, b: Option<&SortValue>, ascending: bool) -> bool {
    match (a, b) {
        (None, None) => true,
        (None, Some(_)) => false,
        (Some(_), None) => true,
        (Some(a), Some(b)) => {
            if ascending {
                a <= b
            } else {
                a >= b
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<SortValue> {
        NaiveDate::from_ymd_opt(y, m, d).map(SortValue::Date)
    }

    #[test]
    fn test_takes_left_missing_values_lose_in_both_directions() {
        let present = date(2024, 1, 1);
        for ascending in [true, false] {
            assert!(!takes_left(None, present.as_ref(), ascending));
            assert!(takes_left(present.as_ref(), None, ascending));
            assert!(takes_left(None, None, ascending));
        }
    }

    #[test]
    fn test_takes_left_prefers_left_on_ties() {
        let a = date(2024, 3, 1);
        let b = date(2024, 3, 1);
        assert!(takes_left(a.as_ref(), b.as_ref(), true));
        assert!(takes_left(a.as_ref(), b.as_ref(), false));
    }

    #[test]
    fn test_takes_left_follows_direction() {
        let early = date(2024, 1, 1);
        let late = date(2024, 6, 1);
        assert!(takes_left(early.as_ref(), late.as_ref(), true));
        assert!(!takes_left(early.as_ref(), late.as_ref(), false));
    }

    #[test]
    fn test_title_key_is_lowercase() {
        let task = Task::new(1, "MiXeD Case");
        assert_eq!(sort_value(&task, SortKey::Title), Some(SortValue::Text("mixed case".to_string())));
    }

    #[test]
    fn test_missing_title_projects_to_none() {
        let mut task = Task::new(1, "x");
        task.title = None;
        assert_eq!(sort_value(&task, SortKey::Title), None);
    }
}
