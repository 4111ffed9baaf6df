pub mod list_status;
pub mod relations;
pub mod user;

pub use list_status::ListStatus;
pub use relations::RelationState;
pub use user::{RelatedUser, RelationList, UserAttributes, UserRecord};
