//! Client data layer for the roster API.
//!
//! Provides a typed HTTP client, a tag-invalidated query cache, and the
//! dashboard UI state with partial persistence across sessions.

pub mod api;
pub mod cache;
pub mod error;
pub mod store;
pub mod ui_state;

pub use api::{AuthData, Employee, EmployeeList, EmployeeUpdate, ListParams, NewEmployee, RosterClient};
pub use cache::{Mutation, QueryCache, QueryKey, Tag};
pub use error::{ClientError, ClientResult};
pub use store::RosterStore;
pub use ui_state::{Theme, UiState, ViewMode};
