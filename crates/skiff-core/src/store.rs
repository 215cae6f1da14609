use chrono::{
  DateTime,
  Utc
};
use tracing::debug;

use crate::task::{
  Task,
  TaskId
};
use crate::view::View;

/// What the single input field is
/// currently for. The edit target
/// only exists while editing.
#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub enum DraftMode {
  Add,
  Edit(TaskId)
}

impl Default for DraftMode {
  fn default() -> Self {
    Self::Add
  }
}

/// Single-writer container for the
/// whole list state: the collection,
/// the input draft, and the draft
/// mode. The view layer owns exactly
/// one of these and applies one
/// transition per user event.
#[derive(
  Debug, Clone, Default, PartialEq,
)]
pub struct TaskStore {
  tasks: Vec<Task>,
  draft: String,
  mode:  DraftMode
}

impl TaskStore {
  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn draft(&self) -> &str {
    &self.draft
  }

  pub fn mode(&self) -> &DraftMode {
    &self.mode
  }

  pub fn is_editing(&self) -> bool {
    matches!(
      self.mode,
      DraftMode::Edit(_)
    )
  }

  /// Replace the collection with the
  /// fetched one. Draft and mode are
  /// left alone.
  #[tracing::instrument(skip(
    self, tasks
  ))]
  pub fn seed(
    &mut self,
    tasks: Vec<Task>
  ) {
    debug!(
      task_count = tasks.len(),
      "seeded task collection"
    );
    self.tasks = tasks;
  }

  pub fn set_draft(
    &mut self,
    text: String
  ) {
    self.draft = text;
  }

  /// The one "accept" entry point:
  /// commits the edit when editing,
  /// otherwise appends a new task.
  /// Whitespace-only drafts are
  /// ignored in both modes.
  #[tracing::instrument(skip(
    self, now
  ))]
  pub fn submit(
    &mut self,
    now: DateTime<Utc>
  ) {
    match self.mode.clone() {
      | DraftMode::Edit(target) => {
        self.commit_edit(&target)
      }
      | DraftMode::Add => {
        self.append(now)
      }
    }
  }

  fn append(
    &mut self,
    now: DateTime<Utc>
  ) {
    if self.draft.trim().is_empty() {
      debug!(
        "ignored whitespace-only \
         submit"
      );
      return;
    }

    let id = self.mint_id(now);
    let title =
      std::mem::take(&mut self.draft);
    debug!(
      id = %id,
      task_count =
        self.tasks.len() + 1,
      "task added"
    );
    self
      .tasks
      .push(Task::new(id, title));
  }

  fn commit_edit(
    &mut self,
    target: &TaskId
  ) {
    if self.draft.trim().is_empty() {
      // An empty commit neither
      // cancels nor commits; the
      // edit stays engaged.
      debug!(
        id = %target,
        "kept edit mode on empty \
         commit"
      );
      return;
    }

    let title =
      std::mem::take(&mut self.draft);
    match self
      .tasks
      .iter_mut()
      .find(|task| &task.id == target)
    {
      | Some(task) => {
        task.title = title;
        debug!(
          id = %target,
          "task retitled"
        );
      }
      | None => {
        debug!(
          id = %target,
          "edit target gone, edit \
           dropped"
        );
      }
    }
    self.mode = DraftMode::Add;
  }

  /// Load an existing task into the
  /// input for retitling. Completed
  /// tasks are not editable.
  #[tracing::instrument(skip(self))]
  pub fn begin_edit(
    &mut self,
    id: &TaskId
  ) {
    let Some(task) = self
      .tasks
      .iter()
      .find(|task| &task.id == id)
    else {
      return;
    };

    if task.done {
      debug!(
        id = %id,
        "completed task is not \
         editable"
      );
      return;
    }

    self.draft = task.title.clone();
    self.mode =
      DraftMode::Edit(id.clone());
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle(
    &mut self,
    id: &TaskId
  ) {
    if let Some(task) = self
      .tasks
      .iter_mut()
      .find(|task| &task.id == id)
    {
      task.done = !task.done;
      debug!(
        id = %id,
        done = task.done,
        "task toggled"
      );
    }
  }

  /// Bulk toggle with one shared
  /// target state: everything done
  /// unless everything already was,
  /// in which case everything open.
  #[tracing::instrument(skip(self))]
  pub fn toggle_all(&mut self) {
    let target = !self
      .tasks
      .iter()
      .all(|task| task.done);
    for task in &mut self.tasks {
      task.done = target;
    }
    debug!(
      target,
      task_count = self.tasks.len(),
      "toggled all tasks"
    );
  }

  #[tracing::instrument(skip(self))]
  pub fn remove(
    &mut self,
    id: &TaskId
  ) {
    self
      .tasks
      .retain(|task| &task.id != id);
    debug!(
      id = %id,
      task_count = self.tasks.len(),
      "task removed"
    );
  }

  #[tracing::instrument(skip(self))]
  pub fn clear_completed(&mut self) {
    self
      .tasks
      .retain(|task| !task.done);
    debug!(
      task_count = self.tasks.len(),
      "cleared completed tasks"
    );
  }

  /// Order-preserving projection for
  /// the routed view.
  pub fn visible(
    &self,
    view: View
  ) -> Vec<Task> {
    self
      .tasks
      .iter()
      .filter(|task| view.admits(task))
      .cloned()
      .collect()
  }

  /// Open-task count over the full
  /// collection, independent of the
  /// active view.
  pub fn remaining(&self) -> usize {
    self
      .tasks
      .iter()
      .filter(|task| !task.done)
      .count()
  }

  pub fn has_completed(&self) -> bool {
    self
      .tasks
      .iter()
      .any(|task| task.done)
  }

  /// Time-based id, bumped by one
  /// millisecond until free so two
  /// submits inside the same instant
  /// still mint distinct ids.
  fn mint_id(
    &self,
    now: DateTime<Utc>
  ) -> TaskId {
    let mut millis =
      now.timestamp_millis();
    loop {
      let id =
        TaskId::from_millis(millis);
      if self
        .tasks
        .iter()
        .all(|task| task.id != id)
      {
        return id;
      }
      millis += 1;
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Utc
  };

  use super::{
    DraftMode,
    TaskStore
  };
  use crate::task::{
    Task,
    TaskId
  };
  use crate::view::View;

  fn now()
  -> chrono::DateTime<chrono::Utc> {
    Utc
      .with_ymd_and_hms(
        2026, 3, 1, 9, 30, 0
      )
      .unwrap()
  }

  fn task(
    id: &str,
    title: &str,
    done: bool
  ) -> Task {
    Task {
      id: TaskId::from(id),
      title: title.to_string(),
      done
    }
  }

  fn seeded(
    tasks: Vec<Task>
  ) -> TaskStore {
    let mut store =
      TaskStore::default();
    store.seed(tasks);
    store
  }

  #[test]
  fn submit_appends_open_task_and_clears_draft()
   {
    let mut store =
      TaskStore::default();
    store.set_draft(
      "Buy milk".to_string()
    );
    store.submit(now());

    assert_eq!(store.tasks().len(), 1);
    assert_eq!(
      store.tasks()[0].title,
      "Buy milk"
    );
    assert!(!store.tasks()[0].done);
    assert_eq!(store.draft(), "");
  }

  #[test]
  fn whitespace_only_submit_is_ignored()
  {
    let mut store =
      TaskStore::default();
    store
      .set_draft("   \t".to_string());
    store.submit(now());

    assert!(store.tasks().is_empty());
  }

  #[test]
  fn same_instant_submits_mint_distinct_ids()
   {
    let mut store =
      TaskStore::default();
    store
      .set_draft("one".to_string());
    store.submit(now());
    store
      .set_draft("two".to_string());
    store.submit(now());

    assert_eq!(store.tasks().len(), 2);
    assert_ne!(
      store.tasks()[0].id,
      store.tasks()[1].id
    );
  }

  #[test]
  fn double_toggle_restores_flag() {
    let mut store = seeded(vec![task(
      "1", "a", false
    )]);
    let id = TaskId::from("1");

    store.toggle(&id);
    assert!(store.tasks()[0].done);
    store.toggle(&id);
    assert!(!store.tasks()[0].done);
  }

  #[test]
  fn toggle_all_uses_one_shared_target()
  {
    let mut store = seeded(vec![
      task("1", "a", true),
      task("2", "b", false),
      task("3", "c", true),
    ]);

    // Mixed start: everything done,
    // not a per-task flip.
    store.toggle_all();
    assert!(
      store
        .tasks()
        .iter()
        .all(|task| task.done)
    );

    store.toggle_all();
    assert!(
      store
        .tasks()
        .iter()
        .all(|task| !task.done)
    );
  }

  #[test]
  fn toggle_all_on_empty_collection_is_noop()
   {
    let mut store =
      TaskStore::default();
    store.toggle_all();
    assert!(store.tasks().is_empty());
  }

  #[test]
  fn clear_completed_removes_exactly_done_subset()
   {
    let mut store = seeded(vec![
      task("1", "a", true),
      task("2", "b", false),
      task("3", "c", true),
      task("4", "d", false),
    ]);

    store.clear_completed();

    let ids: Vec<&str> = store
      .tasks()
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, ["2", "4"]);

    // Nothing done left: a second
    // clear changes nothing.
    store.clear_completed();
    assert_eq!(store.tasks().len(), 2);
  }

  #[test]
  fn visible_is_order_preserving_projection()
   {
    let store = seeded(vec![
      task("1", "a", false),
      task("2", "b", true),
      task("3", "c", false),
    ]);

    let all = store.visible(View::All);
    assert_eq!(
      all,
      store.tasks().to_vec()
    );

    let active =
      store.visible(View::Active);
    assert!(
      active
        .iter()
        .all(|task| !task.done)
    );
    let ids: Vec<&str> = active
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, ["1", "3"]);

    let completed =
      store.visible(View::Completed);
    assert!(
      completed
        .iter()
        .all(|task| task.done)
    );
    assert_eq!(completed.len(), 1);
  }

  #[test]
  fn remaining_counts_full_collection()
  {
    let store = seeded(vec![
      task("1", "a", false),
      task("2", "b", true),
      task("3", "c", false),
    ]);

    // Same count no matter which
    // projection is on screen.
    assert_eq!(store.remaining(), 2);
    assert_eq!(
      store
        .visible(View::Completed)
        .len(),
      1
    );
    assert_eq!(store.remaining(), 2);
  }

  #[test]
  fn buy_milk_scenario() {
    let mut store =
      TaskStore::default();

    store.set_draft(
      "Buy milk".to_string()
    );
    store.submit(now());
    assert_eq!(store.remaining(), 1);
    assert!(!store.has_completed());

    let id =
      store.tasks()[0].id.clone();
    store.toggle(&id);
    assert_eq!(store.remaining(), 0);
    assert!(store.has_completed());

    store.clear_completed();
    assert!(store.tasks().is_empty());
    assert!(!store.has_completed());
  }

  #[test]
  fn completed_task_is_not_editable() {
    let mut store = seeded(vec![task(
      "1", "a", true
    )]);
    store
      .set_draft("typed".to_string());

    store
      .begin_edit(&TaskId::from("1"));

    assert_eq!(
      store.mode(),
      &DraftMode::Add
    );
    assert_eq!(store.draft(), "typed");
  }

  #[test]
  fn begin_edit_populates_draft() {
    let mut store = seeded(vec![task(
      "1", "Feed cat", false
    )]);

    store
      .begin_edit(&TaskId::from("1"));

    assert_eq!(
      store.mode(),
      &DraftMode::Edit(TaskId::from(
        "1"
      ))
    );
    assert_eq!(
      store.draft(),
      "Feed cat"
    );
  }

  #[test]
  fn empty_commit_keeps_edit_mode() {
    let mut store = seeded(vec![task(
      "1", "Feed cat", false
    )]);
    store
      .begin_edit(&TaskId::from("1"));
    store.set_draft("  ".to_string());

    store.submit(now());

    assert!(store.is_editing());
    assert_eq!(store.draft(), "  ");
    assert_eq!(
      store.tasks()[0].title,
      "Feed cat"
    );
  }

  #[test]
  fn commit_replaces_title_only() {
    let mut store = seeded(vec![task(
      "1", "Feed cat", false
    )]);
    store
      .begin_edit(&TaskId::from("1"));
    store.set_draft(
      "Feed the cat".to_string()
    );

    store.submit(now());

    assert_eq!(
      store.tasks()[0].id.as_str(),
      "1"
    );
    assert_eq!(
      store.tasks()[0].title,
      "Feed the cat"
    );
    assert!(!store.tasks()[0].done);
    assert_eq!(
      store.mode(),
      &DraftMode::Add
    );
    assert_eq!(store.draft(), "");
  }

  #[test]
  fn removing_edit_target_leaves_mode_until_commit()
   {
    let mut store = seeded(vec![task(
      "1", "Feed cat", false
    )]);
    let id = TaskId::from("1");
    store.begin_edit(&id);
    store.remove(&id);

    assert!(store.is_editing());
    assert!(store.tasks().is_empty());

    store.set_draft(
      "orphaned".to_string()
    );
    store.submit(now());

    assert!(store.tasks().is_empty());
    assert_eq!(
      store.mode(),
      &DraftMode::Add
    );
    assert_eq!(store.draft(), "");
  }

  #[test]
  fn remove_ignores_done_state() {
    let mut store = seeded(vec![
      task("1", "a", true),
      task("2", "b", false),
    ]);

    store.remove(&TaskId::from("1"));
    store.remove(&TaskId::from("2"));

    assert!(store.tasks().is_empty());
  }
}
