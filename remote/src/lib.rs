pub mod auth;
pub mod error;
pub mod requests;
pub mod users;

pub use requests::RemoteClient;
pub use users::{NewUser, UserDirectory};
