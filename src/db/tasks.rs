use super::db::Db;
use crate::libs::task::{Task, TaskError, TaskFilter};
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;

const INSERT_TASK: &str = "INSERT INTO tasks (name, done) VALUES (?1, ?2)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?2, done = ?3 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, name, done FROM tasks";
const WHERE_DONE: &str = "WHERE done = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    pub fn open(path: &Path) -> Result<Tasks> {
        let db = Db::open(path)?;
        Ok(Tasks { conn: db.conn })
    }

    pub fn open_in_memory() -> Result<Tasks> {
        let db = Db::open_in_memory()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new row and returns the id storage assigned to it. Any id
    /// already on `task` is ignored.
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![task.name, task.done])?;
        let id = self.conn.last_insert_rowid();
        msg_debug!(format!("Inserted task {}", id));

        Ok(id)
    }

    /// Writes name and done for the row with the task's id. Returns the
    /// number of rows changed, 0 if that id no longer exists.
    pub fn update(&mut self, task: &Task) -> Result<usize> {
        let id = task.id.ok_or(TaskError::Unsaved)?;
        let affected = self.conn.execute(UPDATE_TASK, params![id, task.name, task.done])?;
        msg_debug!(format!("Updated task {} ({} row(s))", id, affected));

        Ok(affected)
    }

    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        msg_debug!(format!("Deleted task {} ({} row(s))", id, affected));

        Ok(affected)
    }

    /// Inserts unsaved tasks (writing the new id back) and updates saved ones.
    pub fn save(&mut self, task: &mut Task) -> Result<i64> {
        match task.id {
            Some(id) => {
                self.update(task)?;
                Ok(id)
            }
            None => {
                let id = self.insert(task)?;
                task.id = Some(id);
                Ok(id)
            }
        }
    }

    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let tasks = match filter {
            TaskFilter::All => {
                let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TASKS, ORDER_BY_ID))?;
                let rows = stmt.query_map([], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
            TaskFilter::Pending | TaskFilter::Done => {
                let done = filter == TaskFilter::Done;
                let mut stmt = self.conn.prepare(&format!("{} {} {}", SELECT_TASKS, WHERE_DONE, ORDER_BY_ID))?;
                let rows = stmt.query_map(params![done], Self::map_row)?;
                rows.collect::<Result<Vec<_>, _>>()?
            }
        };

        Ok(tasks)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        self.fetch(TaskFilter::All)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TASKS, WHERE_ID), params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            // The column is nullable; storage does not enforce names
            name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            done: row.get(2)?,
        })
    }
}
