//! Shared fixtures and the remote double used across the crate's tests.

use client::user::{
    RelatedAttributes, RelatedUser, RelationList, UserAttributes, UserRecord,
};
use remote::{NewUser, UserDirectory, error::RemoteAccessError};

mockall::mock! {
    pub Directory {}

    #[async_trait::async_trait]
    impl UserDirectory for Directory {
        async fn list_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError>;
        async fn list_dropdown_users(&self) -> Result<Vec<UserRecord>, RemoteAccessError>;
        async fn create_user(&self, user: NewUser) -> Result<(), RemoteAccessError>;
        async fn follow_user(
            &self,
            selected_id: u64,
            target_id: u64,
        ) -> Result<(), RemoteAccessError>;
    }
}

pub fn user(id: u64, first_name: &str, last_name: &str, email: &str) -> UserRecord {
    UserRecord {
        id,
        attributes: UserAttributes {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            profile: None,
            following: RelationList::default(),
            followers: RelationList::default(),
        },
    }
}

pub fn related(id: u64, first_name: &str, last_name: &str, email: &str) -> RelatedUser {
    RelatedUser {
        id,
        attributes: RelatedAttributes {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            profile: None,
        },
    }
}

pub fn with_following(mut user: UserRecord, partners: Vec<RelatedUser>) -> UserRecord {
    user.attributes.following.data = partners;
    user
}

pub fn with_followers(mut user: UserRecord, partners: Vec<RelatedUser>) -> UserRecord {
    user.attributes.followers.data = partners;
    user
}
