use thiserror::Error;

/// Errors returned by [`Store::dispatch`](crate::Store::dispatch)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The reducer tried to dispatch into the store it is reducing for
    #[error("reducers may not dispatch actions")]
    DispatchInReducer,
    /// Dispatch from inside [`Store::with_state_ref`](crate::Store::with_state_ref)
    #[error("cannot dispatch while the state is borrowed")]
    DispatchWhileReading,
}
