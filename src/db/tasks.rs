use super::db::Db;
use crate::libs::error::TaskError;
use crate::libs::messages::Message;
use crate::libs::sort::sort_tasks;
use crate::libs::task::{NewTask, SortKey, Task, TaskFilter, TaskStatus, TaskUpdate};
use crate::msg_debug;
use anyhow::Result;
use chrono::{Local, NaiveDateTime, Timelike};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, status, due_date, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_TASKS: &str = "SELECT id, title, description, status, due_date, created_at FROM tasks";
const WHERE_ID: &str = "WHERE id = ?1";
const WHERE_IDS: &str = "WHERE id IN";
const WHERE_STATUS: &str = "WHERE status = ?1";
const WHERE_MATCHES: &str = "WHERE title LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\'";
const ORDER_BY_ID: &str = "ORDER BY id";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskError| FromSqlError::Other(Box::new(e)))
    }
}

/// Task repository over the `tasks` table.
///
/// Reads come back in storage order; [`Tasks::list`] is the only place that
/// reorders, and it does so in memory after filtering.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Tasks> {
        Ok(Self::from_db(Db::open(path)?))
    }

    pub fn from_db(db: Db) -> Tasks {
        Tasks { conn: db.conn }
    }

    /// Stores a new pending task and returns its id.
    pub fn insert(&mut self, task: &NewTask) -> Result<i64> {
        let title = task.title.trim();
        if title.is_empty() {
            return Err(TaskError::EmptyTitle.into());
        }

        let now = Local::now().naive_local();
        let created_at = now.with_nanosecond(0).unwrap_or(now);

        self.conn.execute(
            INSERT_TASK,
            params![title, task.description, TaskStatus::Pending, task.due_date, created_at],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let task = self
            .conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], row_to_task)
            .optional()?;

        Ok(task)
    }

    /// Tasks matching `filter`, ordered by id.
    pub fn fetch(&self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (sql, params): (String, Vec<Box<dyn ToSql>>) = match filter {
            TaskFilter::All => (format!("{} {}", SELECT_TASKS, ORDER_BY_ID), vec![]),
            TaskFilter::Status(status) => (format!("{} {} {}", SELECT_TASKS, WHERE_STATUS, ORDER_BY_ID), vec![Box::new(status) as Box<dyn ToSql>]),
            TaskFilter::ByIds(ids) => {
                if ids.is_empty() {
                    return Ok(Vec::new());
                }
                let placeholders = vec!["?"; ids.len()].join(", ");
                let params = ids.into_iter().map(|id| Box::new(id) as Box<dyn ToSql>).collect();
                (format!("{} {} ({}) {}", SELECT_TASKS, WHERE_IDS, placeholders, ORDER_BY_ID), params)
            }
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let tasks = stmt
            .query_map(params_from_iter(params.iter()), row_to_task)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Tasks matching `filter`, ordered by `sort_by` in the given direction.
    pub fn list(&self, filter: TaskFilter, sort_by: SortKey, ascending: bool) -> Result<Vec<Task>> {
        let tasks = self.fetch(filter)?;
        msg_debug!(Message::SortingTasks(tasks.len(), sort_by.to_string(), ascending));

        Ok(sort_tasks(&tasks, sort_by, ascending))
    }

    /// Applies the fields set in `update`. Returns `false` when no task has
    /// the given id.
    pub fn update(&mut self, id: i64, update: &TaskUpdate) -> Result<bool> {
        if update.is_empty() {
            return Err(TaskError::NothingToUpdate.into());
        }

        let mut columns: Vec<&str> = Vec::new();
        let mut values: Vec<Box<dyn ToSql>> = Vec::new();

        if let Some(title) = &update.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(TaskError::EmptyTitle.into());
            }
            columns.push("title");
            values.push(Box::new(title.to_string()));
        }
        if let Some(description) = &update.description {
            columns.push("description");
            values.push(Box::new(description.clone()));
        }
        if let Some(status) = update.status {
            columns.push("status");
            values.push(Box::new(status));
        }
        if let Some(due_date) = update.due_date {
            columns.push("due_date");
            values.push(Box::new(due_date));
        }

        let set_clause = columns
            .iter()
            .enumerate()
            .map(|(i, column)| format!("{} = ?{}", column, i + 1))
            .collect::<Vec<_>>()
            .join(", ");
        values.push(Box::new(id));
        let sql = format!("UPDATE tasks SET {} WHERE id = ?{}", set_clause, values.len());

        let changed = self.conn.execute(&sql, params_from_iter(values.iter()))?;

        Ok(changed > 0)
    }

    pub fn complete(&mut self, id: i64) -> Result<bool> {
        self.update(
            id,
            &TaskUpdate {
                status: Some(TaskStatus::Completed),
                ..TaskUpdate::default()
            },
        )
    }

    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let deleted = self.conn.execute(DELETE_TASK, params![id])?;

        Ok(deleted > 0)
    }

    /// Deletes all listed tasks in one transaction. Returns the number of
    /// rows removed; unknown ids are skipped.
    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let mut deleted = 0;
        for id in ids {
            deleted += tx.execute(DELETE_TASK, params![id])?;
        }
        tx.commit()?;

        Ok(deleted)
    }

    /// Tasks whose title or description contains `keyword`, ignoring ASCII
    /// case. `%` and `_` in the keyword match literally.
    pub fn search(&self, keyword: &str) -> Result<Vec<Task>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(TaskError::EmptyKeyword.into());
        }

        let escaped = keyword.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_");
        let pattern = format!("%{}%", escaped);

        let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_MATCHES, ORDER_BY_ID))?;
        let tasks = stmt.query_map(params![pattern], row_to_task)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }
}

fn row_to_task(row: &Row) -> rusqlite::Result<Task> {
    let status: Option<TaskStatus> = row.get(3)?;
    let created_at: Option<NaiveDateTime> = row.get(5)?;

    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: status.unwrap_or_default(),
        due_date: row.get(4)?,
        created_at,
    })
}
