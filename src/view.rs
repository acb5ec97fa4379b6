//! View Controller
//!
//! Decides what gets rendered: the visible subset for the current filter,
//! footer numbers, and the show/hide and checkbox states around them. Reads
//! the store's list but never mutates it, and never renders on its own; the
//! components call `render` after each change.

use crate::domain::{DomainResult, Filter, TodoItem};

/// Counts shown in the footer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FooterStats {
    pub active_count: usize,
    pub completed_count: usize,
}

/// Data handed to the footer template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterModel {
    pub active_todo_count: usize,
    pub active_todo_word: String,
    pub completed_todos: usize,
    pub filter: Filter,
}

/// Everything the page needs for one full re-render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderModel {
    pub visible: Vec<TodoItem>,
    pub footer: FooterModel,
    /// List section is shown only when something is visible
    pub show_main: bool,
    pub show_footer: bool,
    /// Toggle-all checkbox state: nothing left active in the whole list
    pub all_completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewController {
    filter: Filter,
}

impl ViewController {
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Does not re-render by itself
    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn render(&self, list: &[TodoItem]) -> RenderModel {
        let visible = compute_visible(list, self.filter);
        let stats = compute_footer_stats(list);
        let has_visible = !visible.is_empty();

        RenderModel {
            footer: FooterModel {
                active_todo_count: stats.active_count,
                active_todo_word: compute_pluralized_label(stats.active_count, "item"),
                completed_todos: stats.completed_count,
                filter: self.filter,
            },
            visible,
            show_main: has_visible,
            show_footer: has_visible,
            all_completed: stats.active_count == 0,
        }
    }
}

/// Todos passing `filter`, in list order
pub fn compute_visible(list: &[TodoItem], filter: Filter) -> Vec<TodoItem> {
    list.iter().filter(|todo| filter.matches(todo)).cloned().collect()
}

pub fn compute_footer_stats(list: &[TodoItem]) -> FooterStats {
    let active_count = list.iter().filter(|todo| !todo.completed).count();
    FooterStats {
        active_count,
        completed_count: list.len() - active_count,
    }
}

/// English-only: appends "s" unless `count == 1`
pub fn compute_pluralized_label(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}

/// What leaving the edit field does to the todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Escape was pressed; keep the old title.
    ///
    /// Wins over an emptied field: Escape never deletes, unlike the jQuery
    /// app, which checked for an empty value first.
    Discard,
    /// Field was emptied; an empty title means delete
    Destroy,
    Rename(String),
}

pub fn resolve_edit(value: &str, aborted: bool) -> EditOutcome {
    if aborted {
        return EditOutcome::Discard;
    }
    match value.trim() {
        "" => EditOutcome::Destroy,
        title => EditOutcome::Rename(title.to_string()),
    }
}

/// Whether the header input is consumed by a create attempt.
///
/// A failed write still appended the todo, so keeping the text would invite
/// a duplicate on the next Enter.
pub fn clears_new_todo<T>(result: &DomainResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => e.list_changed(),
    }
}

/// Title for a new todo from the raw input, `None` when blank
pub fn new_todo_title(raw: &str) -> Option<String> {
    let title = raw.trim();
    (!title.is_empty()).then(|| title.to_string())
}
