use serde::{
  Deserialize,
  Serialize
};

use crate::task::Task;

/// The three projections of the task
/// collection, one per route.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum View {
  All,
  Active,
  Completed
}

impl Default for View {
  fn default() -> Self {
    Self::All
  }
}

impl View {
  pub fn all() -> [Self; 3] {
    [
      Self::All,
      Self::Active,
      Self::Completed
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::All => "all",
      | Self::Active => "active",
      | Self::Completed => "completed"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::All => "All",
      | Self::Active => "Active",
      | Self::Completed => "Completed"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key {
      | "all" => Some(Self::All),
      | "active" => Some(Self::Active),
      | "completed" => {
        Some(Self::Completed)
      }
      | _ => None
    }
  }

  /// Projection predicate. `All`
  /// admits everything; the other
  /// two split on the done flag.
  pub fn admits(
    self,
    task: &Task
  ) -> bool {
    match self {
      | Self::All => true,
      | Self::Active => !task.done,
      | Self::Completed => task.done
    }
  }
}

#[cfg(test)]
mod tests {
  use super::View;
  use crate::task::{
    Task,
    TaskId
  };

  fn task(
    id: &str,
    done: bool
  ) -> Task {
    Task {
      id: TaskId::from(id),
      title: id.to_string(),
      done
    }
  }

  #[test]
  fn admits_splits_on_done_flag() {
    let open = task("1", false);
    let closed = task("2", true);

    assert!(View::All.admits(&open));
    assert!(View::All.admits(&closed));

    assert!(
      View::Active.admits(&open)
    );
    assert!(
      !View::Active.admits(&closed)
    );

    assert!(
      !View::Completed.admits(&open)
    );
    assert!(
      View::Completed.admits(&closed)
    );
  }

  #[test]
  fn keys_resolve_every_view() {
    for view in View::all() {
      assert_eq!(
        View::from_key(view.as_key()),
        Some(view)
      );
    }
    assert_eq!(
      View::from_key("archived"),
      None
    );
  }
}
