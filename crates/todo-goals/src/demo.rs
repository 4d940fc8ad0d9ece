//! Demo wiring
//!
//! Replays a sequence of actions against the application store, printing the
//! state after every dispatch.

use redux_store::Subscription;
use serde_json::Value;
use std::cell::RefCell;
use std::io::Write;
use std::path::Path;
use std::rc::Rc;

use crate::actions::Action;
use crate::domain_models::{Goal, GoalId, Todo, TodoId};
use crate::error::{Error, Result};
use crate::state::AppState;
use crate::store::AppStore;

/// The built-in walkthrough: three todos, two toggled and one removed, then
/// goals added and removed.
pub fn builtin_actions() -> Vec<Action> {
    vec![
        Action::add_todo(Todo::new(0, "Learn Redux")),
        Action::add_todo(Todo::new(1, "Redux class 2")),
        Action::add_todo(Todo::new(2, "Redux class 3")),
        Action::toggle_todo(TodoId::new(0)),
        Action::toggle_todo(TodoId::new(1)),
        Action::remove_todo(TodoId::new(2)),
        Action::add_goal(Goal::new(0, "Do stuff")),
        Action::add_goal(Goal::new(1, "Learn Redux")),
        Action::remove_goal(GoalId::new(0)),
        Action::add_goal(Goal::new(0, "Lose 10 kg")),
        Action::remove_goal(GoalId::new(0)),
    ]
}

/// Parse a JSON array of action records.
///
/// Records that don't describe a known action are skipped with a warning.
pub fn parse_script(content: &str) -> serde_json::Result<Vec<Action>> {
    let records: Vec<Value> = serde_json::from_str(content)?;
    let mut actions = Vec::with_capacity(records.len());

    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Action>(record) {
            Ok(action) => actions.push(action),
            Err(e) => log::warn!("Skipping action record {}: {}", index, e),
        }
    }

    Ok(actions)
}

/// Read and parse an action script file
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let actions = parse_script(&content).map_err(|source| Error::Script {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Loaded {} actions from {}", actions.len(), path.display());
    Ok(actions)
}

/// Render the state as JSON
pub fn render_state(state: &AppState, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(state)?
    } else {
        serde_json::to_string(state)?
    };
    Ok(json)
}

/// Subscribe a listener writing `The new state is: <json>` to `out` after
/// every dispatch
pub fn subscribe_printer<W>(store: &AppStore, pretty: bool, out: Rc<RefCell<W>>) -> Subscription
where
    W: Write + 'static,
{
    let reader = store.clone();
    store.subscribe(move || {
        let line = match render_state(&reader.get_state(), pretty) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to render state: {}", e);
                return;
            }
        };
        if let Err(e) = writeln!(out.borrow_mut(), "The new state is: {}", line) {
            log::error!("Failed to write state: {}", e);
        }
    })
}

/// Dispatch every action in order.
///
/// Afterwards a change notice listener is subscribed and immediately removed
/// again, so it never fires.
pub fn run(store: &AppStore, actions: Vec<Action>) -> Result<()> {
    for action in actions {
        log::debug!("Dispatching {}", action.kind());
        store.dispatch(action)?;
    }

    let notice = store.subscribe(|| log::info!("The store changed."));
    notice.unsubscribe();

    let state = store.get_state();
    log::info!(
        "Finished with {} todos ({} open) and {} goals",
        state.todos.len(),
        state.open_todos().count(),
        state.goals.len()
    );
    Ok(())
}
