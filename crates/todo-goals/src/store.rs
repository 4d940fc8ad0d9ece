use redux_store::Store;

use crate::actions::Action;
use crate::reducers::app_reducer;
use crate::state::AppState;

/// The application store: [`AppState`] driven by [`Action`]s
pub type AppStore = Store<AppState, Action>;

/// Create a store with an empty todo and goal list, reduced by the root reducer
pub fn create_store() -> AppStore {
    Store::new(app_reducer::reduce)
}
