use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn checkbox(done: bool) -> &'static str {
        if done {
            "[x]"
        } else {
            "[ ]"
        }
    }

    /// One line per task, as shown in selection menus.
    pub fn task_line(task: &Task) -> String {
        format!("{} {}", Self::checkbox(task.done), task.name)
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "NAME"]);
        for task in tasks {
            let checkbox = Self::checkbox(task.done);
            table.add_row(row![task.id.unwrap_or(0), checkbox, task.name]);
        }

        table
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tasks_table_rows() {
        let tasks = vec![
            Task { id: Some(1), name: "Buy milk".into(), done: true },
            Task { id: Some(2), name: "Buy eggs".into(), done: false },
        ];
        let table = View::tasks_table(&tasks);

        // header plus one row per task
        assert_eq!(table.len(), 3);
        let rendered = table.to_string();
        assert!(rendered.contains("[x]"));
        assert!(rendered.contains("Buy eggs"));
    }

    #[test]
    fn test_task_line() {
        let task = Task::new("Buy laptop");
        assert_eq!(View::task_line(&task), "[ ] Buy laptop");
    }
}
