use email_address::EmailAddress;
use remote::NewUser;
use serde::Deserialize;

pub const MSG_REQUIRED: &str = "Required";
pub const MSG_TOO_SHORT: &str = "Too Short!";
pub const MSG_TOO_LONG: &str = "Too Long!";
pub const MSG_INVALID_EMAIL: &str = "Invalid email";

const NAME_MIN: usize = 2;
const NAME_MAX: usize = 50;

/// Raw account-creation submission, field names as the page posts them.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateAccountErrors {
    pub first_name: Option<&'static str>,
    pub last_name: Option<&'static str>,
    pub email: Option<&'static str>,
}

impl CreateAccountErrors {
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

impl CreateAccountForm {
    /// Schema check; a valid submission yields the request payload, an
    /// invalid one blocks submission entirely.
    pub fn validate(&self) -> Result<NewUser, CreateAccountErrors> {
        let errors = CreateAccountErrors {
            first_name: validate_name(&self.first_name),
            last_name: validate_name(&self.last_name),
            email: validate_email(&self.email),
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewUser {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        })
    }
}

/// Raw follow submission: both selects post record ids as strings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FollowForm {
    #[serde(default)]
    pub selected_user: String,
    #[serde(default)]
    pub following_to: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FollowErrors {
    pub selected_user: Option<&'static str>,
    pub following_to: Option<&'static str>,
}

impl FollowErrors {
    pub fn is_empty(&self) -> bool {
        self.selected_user.is_none() && self.following_to.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FollowRequest {
    pub selected_id: u64,
    pub target_id: u64,
}

impl FollowForm {
    /// Both selectors are required. Nothing stops a user from picking
    /// themselves as both source and target.
    pub fn validate(&self) -> Result<FollowRequest, FollowErrors> {
        match (parse_id(&self.selected_user), parse_id(&self.following_to)) {
            (Ok(selected_id), Ok(target_id)) => Ok(FollowRequest {
                selected_id,
                target_id,
            }),
            (selected, target) => Err(FollowErrors {
                selected_user: selected.err(),
                following_to: target.err(),
            }),
        }
    }
}

fn validate_name(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(MSG_REQUIRED);
    }
    let length = value.chars().count();
    if length < NAME_MIN {
        return Some(MSG_TOO_SHORT);
    }
    if length > NAME_MAX {
        return Some(MSG_TOO_LONG);
    }
    None
}

fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some(MSG_REQUIRED);
    }
    if !EmailAddress::is_valid(value) {
        return Some(MSG_INVALID_EMAIL);
    }
    None
}

fn parse_id(value: &str) -> Result<u64, &'static str> {
    if value.is_empty() {
        return Err(MSG_REQUIRED);
    }
    value.parse::<u64>().map_err(|_| MSG_REQUIRED)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn create_form(first_name: &str, last_name: &str, email: &str) -> CreateAccountForm {
        CreateAccountForm {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
        }
    }

    #[rstest]
    #[case("", Some(MSG_REQUIRED))]
    #[case("A", Some(MSG_TOO_SHORT))]
    #[case("Ab", None)]
    #[case(&"x".repeat(50), None)]
    #[case(&"x".repeat(51), Some(MSG_TOO_LONG))]
    fn name_rules(#[case] value: &str, #[case] expected: Option<&'static str>) {
        let result = create_form(value, "Lovelace", "ada@example.com").validate();
        match expected {
            None => assert!(result.is_ok()),
            Some(message) => {
                let errors = result.expect_err("validation should fail");
                assert_eq!(errors.first_name, Some(message));
            }
        }
    }

    #[rstest]
    #[case("", Some(MSG_REQUIRED))]
    #[case("not-an-email", Some(MSG_INVALID_EMAIL))]
    #[case("ada@example.com", None)]
    fn email_rules(#[case] value: &str, #[case] expected: Option<&'static str>) {
        let result = create_form("Ada", "Lovelace", value).validate();
        match expected {
            None => assert!(result.is_ok()),
            Some(message) => {
                let errors = result.expect_err("validation should fail");
                assert_eq!(errors.email, Some(message));
            }
        }
    }

    #[test]
    fn one_character_first_name_blocks_submission() {
        let result = create_form("A", "Lovelace", "ada@example.com").validate();
        assert!(result.is_err());
    }

    #[test]
    fn valid_submission_yields_the_request_payload() {
        let payload = create_form("Ada", "Lovelace", "ada@example.com")
            .validate()
            .expect("validation should pass");
        assert_eq!(payload.first_name, "Ada");
        assert_eq!(payload.last_name, "Lovelace");
        assert_eq!(payload.email, "ada@example.com");
    }

    #[test]
    fn errors_report_every_invalid_field_at_once() {
        let errors = create_form("", "B", "nope")
            .validate()
            .expect_err("validation should fail");
        assert_eq!(errors.first_name, Some(MSG_REQUIRED));
        assert_eq!(errors.last_name, Some(MSG_TOO_SHORT));
        assert_eq!(errors.email, Some(MSG_INVALID_EMAIL));
    }

    #[rstest]
    #[case("", "2")]
    #[case("1", "")]
    #[case("", "")]
    fn empty_selector_blocks_the_follow_request(#[case] selected: &str, #[case] target: &str) {
        let form = FollowForm {
            selected_user: selected.to_string(),
            following_to: target.to_string(),
        };
        let errors = form.validate().expect_err("validation should fail");
        assert_eq!(errors.selected_user.is_some(), selected.is_empty());
        assert_eq!(errors.following_to.is_some(), target.is_empty());
    }

    #[test]
    fn non_numeric_selector_is_rejected() {
        let form = FollowForm {
            selected_user: "abc".to_string(),
            following_to: "2".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn valid_follow_selection_parses_both_ids() {
        let form = FollowForm {
            selected_user: "1".to_string(),
            following_to: "2".to_string(),
        };
        let request = form.validate().expect("validation should pass");
        assert_eq!(request.selected_id, 1);
        assert_eq!(request.target_id, 2);
    }

    #[test]
    fn self_follow_is_not_prevented() {
        let form = FollowForm {
            selected_user: "1".to_string(),
            following_to: "1".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
