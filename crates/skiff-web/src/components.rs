use skiff_core::task::{
  Task,
  TaskId
};
use skiff_core::view::View;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};
use yew_router::prelude::Link;

use crate::app::Route;

#[derive(Properties, PartialEq)]
pub struct TodoListProps {
  pub tasks:     Vec<Task>,
  pub on_toggle: Callback<TaskId>,
  pub on_edit:   Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TodoList)]
pub fn todo_list(
  props: &TodoListProps
) -> Html {
  html! {
      <div class="list">
          {
              for props.tasks.iter().cloned().map(|task| html! {
                  <TodoRow
                      task={task}
                      on_toggle={props.on_toggle.clone()}
                      on_edit={props.on_edit.clone()}
                      on_remove={props.on_remove.clone()}
                  />
              })
          }
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct TodoRowProps {
  pub task:      Task,
  pub on_toggle: Callback<TaskId>,
  pub on_edit:   Callback<TaskId>,
  pub on_remove: Callback<TaskId>
}

#[function_component(TodoRow)]
pub fn todo_row(
  props: &TodoRowProps
) -> Html {
  let id = props.task.id.clone();

  let on_toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = id.clone();
    Callback::from(move |_| {
      on_toggle.emit(id.clone())
    })
  };

  let on_edit = {
    let on_edit =
      props.on_edit.clone();
    let id = id.clone();
    Callback::from(
      move |_: MouseEvent| {
        on_edit.emit(id.clone())
      }
    )
  };

  let on_remove = {
    let on_remove =
      props.on_remove.clone();
    let id = id.clone();
    Callback::from(
      move |event: MouseEvent| {
        event.stop_propagation();
        on_remove.emit(id.clone())
      }
    )
  };

  let title_class =
    if props.task.done {
      "title done"
    } else {
      "title"
    };

  html! {
      <div class="row" key={props.task.id.as_str().to_string()}>
          <input
              type="checkbox"
              checked={props.task.done}
              onchange={on_toggle}
          />
          <p
              class={title_class}
              title="Double-click to edit"
              ondblclick={on_edit}
          >{ &props.task.title }</p>
          <button class="remove" onclick={on_remove}>{ "✕" }</button>
      </div>
  }
}

#[derive(Properties, PartialEq)]
pub struct FilterNavProps {
  pub active: View
}

#[function_component(FilterNav)]
pub fn filter_nav(
  props: &FilterNavProps
) -> Html {
  let link = |view: View| {
    let selected = (view
      == props.active)
      .then_some("selected");
    html! {
        <Link<Route>
            to={Route::from_view(view)}
            classes={classes!(selected)}
        >
            { view.label() }
        </Link<Route>>
    }
  };

  html! {
      <nav class="filters">
          { for View::all().into_iter().map(link) }
      </nav>
  }
}
