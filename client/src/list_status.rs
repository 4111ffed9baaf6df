use serde::Serialize;

/// Where the store's user list is in its fetch lifecycle.
#[derive(Clone, Copy, Serialize, Eq, PartialEq, Debug)]
pub enum ListStatus {
    Loading,
    Loaded,
    Failed,
}
