use crate::user::UserAttributes;

/// Which relation sets a user carries. Exactly one variant applies to any
/// user, so the renderer dispatches on this once instead of re-testing the
/// two booleans in every branch body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationState {
    NoRelations,
    FollowingOnly,
    FollowersOnly,
    Both,
}

impl RelationState {
    /// Classify from the user's own relation fields only.
    pub fn of(attributes: &UserAttributes) -> Self {
        let is_following = !attributes.following.data.is_empty();
        let has_follower = !attributes.followers.data.is_empty();

        match (is_following, has_follower) {
            (true, true) => RelationState::Both,
            (true, false) => RelationState::FollowingOnly,
            (false, true) => RelationState::FollowersOnly,
            (false, false) => RelationState::NoRelations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::{RelatedAttributes, RelatedUser, RelationList};

    fn related(id: u64) -> RelatedUser {
        RelatedUser {
            id,
            attributes: RelatedAttributes {
                first_name: "Some".to_string(),
                last_name: "User".to_string(),
                email: "some@example.com".to_string(),
                profile: None,
            },
        }
    }

    fn attributes(following: Vec<RelatedUser>, followers: Vec<RelatedUser>) -> UserAttributes {
        UserAttributes {
            first_name: "Base".to_string(),
            last_name: "User".to_string(),
            email: "base@example.com".to_string(),
            profile: None,
            following: RelationList { data: following },
            followers: RelationList { data: followers },
        }
    }

    #[test]
    fn classifies_all_four_states() {
        assert_eq!(
            RelationState::of(&attributes(vec![], vec![])),
            RelationState::NoRelations
        );
        assert_eq!(
            RelationState::of(&attributes(vec![related(1)], vec![])),
            RelationState::FollowingOnly
        );
        assert_eq!(
            RelationState::of(&attributes(vec![], vec![related(1)])),
            RelationState::FollowersOnly
        );
        assert_eq!(
            RelationState::of(&attributes(vec![related(1)], vec![related(2)])),
            RelationState::Both
        );
    }

    #[test]
    fn classification_ignores_relation_cardinality() {
        let many = attributes(vec![related(1), related(2), related(3)], vec![]);
        assert_eq!(RelationState::of(&many), RelationState::FollowingOnly);
    }
}
