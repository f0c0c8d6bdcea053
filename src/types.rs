use std::fmt::Display;

/// Identity of an on-screen row. Unlike the text, a handle is never shared
/// by two tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct RowHandle(u64);

impl Display for RowHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Task {
    pub(crate) text: String,
    pub(crate) position: usize,
    pub(crate) handle: RowHandle,
}

/// In-memory, display-ordered list of tasks.
///
/// Appending never persists anything; the caller decides whether a task is
/// new or was just loaded from the store.
#[derive(Debug, Default)]
pub(crate) struct TaskList {
    tasks: Vec<Task>,
    next_handle: u64,
}

impl TaskList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, text: String) -> &Task {
        debug_assert!(!text.trim().is_empty(), "tasks must have text");
        let handle = RowHandle(self.next_handle);
        self.next_handle += 1;
        self.tasks.push(Task {
            text,
            position: self.tasks.len(),
            handle,
        });
        &self.tasks[self.tasks.len() - 1]
    }

    pub(crate) fn remove(&mut self, handle: RowHandle) -> Option<Task> {
        let index = self.tasks.iter().position(|t| t.handle == handle)?;
        let task = self.tasks.remove(index);
        self.reindex();
        Some(task)
    }

    pub(crate) fn reindex(&mut self) {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.position = index;
        }
    }

    pub(crate) fn get(&self, handle: RowHandle) -> Option<&Task> {
        self.tasks.iter().find(|t| t.handle == handle)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter()
    }

    pub(crate) fn len(&self) -> usize {
        self.tasks.len()
    }
}
