//! 内存中的任务列表
//!
//! Tasks live only for the lifetime of the process. Insertion order is both the
//! display order and the order used when deleting by name.

use chrono::NaiveDate;

use super::{Clock, SystemClock, Task};
use crate::error::{Result, TodoError};

/// One row of [`TaskList::show`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry<'a> {
    /// 1-based position in the list
    pub index: usize,
    pub date_created: NaiveDate,
    pub name: &'a str,
}

/// Snapshot of the list in insertion order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Listing<'a> {
    pub entries: Vec<ListingEntry<'a>>,
}

impl Listing<'_> {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// 有序任务集合
#[derive(Debug)]
pub struct TaskList<C: Clock = SystemClock> {
    tasks: Vec<Task>,
    clock: C,
}

impl TaskList<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TaskList<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskList<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            tasks: Vec::new(),
            clock,
        }
    }

    /// Append a task named `name`, dated today.
    ///
    /// The name is not trimmed. Duplicates are allowed.
    pub fn add(&mut self, name: &str) -> Result<&Task> {
        if name.is_empty() {
            tracing::debug!("rejected empty task name");
            return Err(TodoError::EmptyTaskName);
        }

        let task = Task::new(name, self.clock.today());
        tracing::debug!(name, date = %task.date_created(), "task added");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Remove the first task whose name equals `name` exactly.
    ///
    /// At most one task is removed per call.
    pub fn delete(&mut self, name: &str) -> Result<Task> {
        let Some(pos) = self.tasks.iter().position(|t| t.name() == name) else {
            tracing::debug!(name, "no task to delete");
            return Err(TodoError::not_found(name));
        };

        let task = self.tasks.remove(pos);
        tracing::debug!(%task, index = pos + 1, "task deleted");
        Ok(task)
    }

    pub fn show(&self) -> Listing<'_> {
        let entries = self
            .tasks
            .iter()
            .enumerate()
            .map(|(i, task)| ListingEntry {
                index: i + 1,
                date_created: task.date_created(),
                name: task.name(),
            })
            .collect();
        Listing { entries }
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 按 0-based 下标获取任务
    #[allow(dead_code)]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    #[allow(dead_code)]
    pub fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FixedClock;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn list() -> TaskList<FixedClock> {
        TaskList::with_clock(FixedClock(day(1)))
    }

    fn names<C: Clock>(list: &TaskList<C>) -> Vec<&str> {
        list.iter().map(Task::name).collect()
    }

    /// Clock whose date can be moved between calls
    struct StepClock(std::cell::Cell<NaiveDate>);

    impl Clock for StepClock {
        fn today(&self) -> NaiveDate {
            self.0.get()
        }
    }

    #[test]
    fn test_new_list_is_empty() {
        let list = TaskList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.show().is_empty());
    }

    #[test]
    fn test_add_appends_to_end() {
        let mut list = list();
        list.add("first").unwrap();
        let task = list.add("second").unwrap();
        assert_eq!(task.name(), "second");
        assert_eq!(task.date_created(), day(1));

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).map(Task::name), Some("second"));
        assert_eq!(names(&list), vec!["first", "second"]);
    }

    #[test]
    fn test_add_keeps_whitespace() {
        let mut list = list();
        list.add(" padded ").unwrap();
        list.add(" ").unwrap();
        assert_eq!(names(&list), vec![" padded ", " "]);
    }

    #[test]
    fn test_add_empty_is_rejected() {
        let mut list = list();
        list.add("keep").unwrap();

        let err = list.add("").unwrap_err();
        assert!(matches!(err, TodoError::EmptyTaskName));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_add_allows_duplicates_with_own_dates() {
        let clock = StepClock(std::cell::Cell::new(day(1)));
        let mut list = TaskList::with_clock(&clock);

        list.add("Buy milk").unwrap();
        clock.0.set(day(2));
        list.add("Buy milk").unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0).unwrap().date_created(), day(1));
        assert_eq!(list.get(1).unwrap().date_created(), day(2));
    }

    #[test]
    fn test_delete_removes_first_match_only() {
        let clock = StepClock(std::cell::Cell::new(day(1)));
        let mut list = TaskList::with_clock(&clock);
        list.add("a").unwrap();
        list.add("dup").unwrap();
        list.add("b").unwrap();
        clock.0.set(day(9));
        list.add("dup").unwrap();
        list.add("c").unwrap();

        let removed = list.delete("dup").unwrap();
        assert_eq!(removed.date_created(), day(1));
        assert_eq!(names(&list), vec!["a", "b", "dup", "c"]);
        assert_eq!(list.get(2).unwrap().date_created(), day(9));
    }

    #[test]
    fn test_delete_is_exact_match() {
        let mut list = list();
        list.add("Buy milk").unwrap();

        assert!(list.delete("buy milk").is_err());
        assert!(list.delete("Buy milk ").is_err());
        assert!(list.delete("Buy").is_err());
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_delete_missing_reports_not_found() {
        let mut list = list();
        list.add("Buy milk").unwrap();

        let err = list.delete("Buy eggs").unwrap_err();
        assert!(matches!(err, TodoError::TaskNotFound(ref n) if n == "Buy eggs"));
        assert_eq!(names(&list), vec!["Buy milk"]);
    }

    #[test]
    fn test_delete_empty_name_on_empty_list() {
        let mut list = list();
        assert!(matches!(list.delete(""), Err(TodoError::TaskNotFound(_))));
    }

    #[test]
    fn test_show_is_one_based_in_insertion_order() {
        let mut list = list();
        list.add("x").unwrap();
        list.add("y").unwrap();
        list.add("z").unwrap();
        list.delete("x").unwrap();

        let listing = list.show();
        let rows: Vec<(usize, &str)> = listing.entries.iter().map(|e| (e.index, e.name)).collect();
        assert_eq!(rows, vec![(1, "y"), (2, "z")]);
        assert!(listing.entries.iter().all(|e| e.date_created == day(1)));
        // show 不修改列表
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_buy_milk_scenario() {
        let mut list = list();

        list.add("Buy milk").unwrap();
        assert_eq!(names(&list), vec!["Buy milk"]);

        list.add("Buy milk").unwrap();
        assert_eq!(names(&list), vec!["Buy milk", "Buy milk"]);

        list.delete("Buy milk").unwrap();
        assert_eq!(list.len(), 1);

        assert!(list.delete("Buy eggs").is_err());
        assert_eq!(list.len(), 1);

        let listing = list.show();
        assert_eq!(listing.entries.len(), 1);
        assert_eq!(listing.entries[0].index, 1);
        assert_eq!(listing.entries[0].name, "Buy milk");
    }
}
