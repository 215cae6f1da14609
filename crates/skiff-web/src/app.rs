use chrono::Utc;
use serde::Deserialize;
use skiff_core::store::TaskStore;
use skiff_core::task::TaskId;
use skiff_core::view::View;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  KeyboardEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_effect_with,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};

use crate::api::fetch_todos;
use crate::components::{
  FilterNav,
  TodoList
};

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

#[derive(Deserialize, Default)]
struct AppConfig {
  #[serde(default)]
  remote: RemoteConfig
}

#[derive(Deserialize)]
struct RemoteConfig {
  #[serde(
    default = "default_todos_url"
  )]
  todos_url: String
}

impl Default for RemoteConfig {
  fn default() -> Self {
    Self {
      todos_url: default_todos_url()
    }
  }
}

fn default_todos_url() -> String {
  "https://my-json-server.typicode.com/EnkiGroup/DesafioReactFrontendJunior2024/todos".to_string()
}

fn load_app_config() -> AppConfig {
  match toml::from_str::<AppConfig>(
    APP_CONFIG_TOML
  ) {
    | Ok(config) => config,
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing app.toml, \
         using defaults"
      );
      AppConfig::default()
    }
  }
}

/// The three client-side paths, each
/// mapping to one projection of the
/// same list view.
#[derive(
  Clone, Copy, PartialEq, Eq, Routable,
)]
pub enum Route {
  #[at("/")]
  All,
  #[at("/active")]
  Active,
  #[at("/completed")]
  Completed
}

impl Route {
  pub fn view(self) -> View {
    match self {
      | Self::All => View::All,
      | Self::Active => View::Active,
      | Self::Completed => {
        View::Completed
      }
    }
  }

  pub fn from_view(
    view: View
  ) -> Self {
    match view {
      | View::All => Self::All,
      | View::Active => Self::Active,
      | View::Completed => {
        Self::Completed
      }
    }
  }
}

fn switch(route: Route) -> Html {
  html! {
    <Todos view={route.view()} />
  }
}

#[function_component(App)]
pub fn app() -> Html {
  html! {
      <BrowserRouter>
          <section class="todoapp">
              <h1>{ "todos" }</h1>
              <Switch<Route> render={switch} />
          </section>
      </BrowserRouter>
  }
}

#[derive(Properties, PartialEq)]
pub struct TodosProps {
  pub view: View
}

#[function_component(Todos)]
pub fn todos(
  props: &TodosProps
) -> Html {
  let store =
    use_state(TaskStore::default);

  {
    let store = store.clone();
    use_effect_with((), move |_| {
      wasm_bindgen_futures::spawn_local(async move {
        let url = load_app_config()
          .remote
          .todos_url;
        match fetch_todos(&url).await {
          | Ok(tasks) => {
            tracing::info!(
              task_count =
                tasks.len(),
              "seeded tasks from \
               remote"
            );
            let mut next =
              (*store).clone();
            next.seed(tasks);
            store.set(next);
          }
          | Err(error) => {
            tracing::error!(
              %error,
              "initial todo fetch \
               failed, starting \
               empty"
            );
          }
        }
      });
      || ()
    });
  }

  let on_input = {
    let store = store.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event
            .target_unchecked_into();
        let mut next =
          (*store).clone();
        next.set_draft(input.value());
        store.set(next);
      }
    )
  };

  let on_keydown = {
    let store = store.clone();
    Callback::from(
      move |event: KeyboardEvent| {
        if event.key() != "Enter" {
          return;
        }
        event.prevent_default();
        let mut next =
          (*store).clone();
        next.submit(Utc::now());
        store.set(next);
      }
    )
  };

  let on_save = {
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next =
          (*store).clone();
        next.submit(Utc::now());
        store.set(next);
      }
    )
  };

  let on_toggle = {
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let mut next =
          (*store).clone();
        next.toggle(&id);
        store.set(next);
      }
    )
  };

  let on_edit = {
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let mut next =
          (*store).clone();
        next.begin_edit(&id);
        store.set(next);
      }
    )
  };

  let on_remove = {
    let store = store.clone();
    Callback::from(
      move |id: TaskId| {
        let mut next =
          (*store).clone();
        next.remove(&id);
        store.set(next);
      }
    )
  };

  let on_toggle_all = {
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next =
          (*store).clone();
        next.toggle_all();
        store.set(next);
      }
    )
  };

  let on_clear = {
    let store = store.clone();
    Callback::from(
      move |_: MouseEvent| {
        let mut next =
          (*store).clone();
        next.clear_completed();
        store.set(next);
      }
    )
  };

  let visible =
    store.visible(props.view);
  let remaining = store.remaining();
  let has_completed =
    store.has_completed();
  let editing = store.is_editing();

  html! {
      <main class="todos">
          <div class="entry">
              <button class="toggle-all" onclick={on_toggle_all}>{ "⌄" }</button>
              <input
                  type="text"
                  value={store.draft().to_string()}
                  placeholder="What needs to be done?"
                  oninput={on_input}
                  onkeydown={on_keydown}
              />
              {
                  if editing {
                      html! { <button class="save" onclick={on_save}>{ "Save" }</button> }
                  } else {
                      html! {}
                  }
              }
          </div>
          {
              if visible.is_empty() {
                  html! {}
              } else {
                  html! {
                      <>
                          <TodoList
                              tasks={visible}
                              on_toggle={on_toggle}
                              on_edit={on_edit}
                              on_remove={on_remove}
                          />
                          <footer class="list-footer">
                              <span class="count">{ format!("{remaining} items left") }</span>
                              <FilterNav active={props.view} />
                              {
                                  if has_completed {
                                      html! {
                                          <button class="clear" onclick={on_clear}>
                                              { "Clear Completed" }
                                          </button>
                                      }
                                  } else {
                                      html! {}
                                  }
                              }
                          </footer>
                      </>
                  }
              }
          }
      </main>
  }
}
