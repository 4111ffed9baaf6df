use client::{
    ListStatus, RelationState,
    user::{RelatedUser, UserRecord},
};

use crate::forms::{CreateAccountErrors, CreateAccountForm, FollowErrors, FollowForm};

pub const TOAST_CREATED: &str = "created";
pub const TOAST_CREATE_FAILED: &str = "create-failed";
pub const TOAST_FOLLOWED: &str = "followed";
pub const TOAST_FOLLOW_FAILED: &str = "follow-failed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient, dismissable feedback banner shown after a mutation settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: &'static str,
}

impl Toast {
    /// Map a redirect code back to the banner the page shows. Unknown
    /// codes render nothing.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            TOAST_CREATED => Some(Self {
                kind: ToastKind::Success,
                message: "User Created Successfully",
            }),
            // Any create error is treated as a duplicate email; the
            // cause is never inspected.
            TOAST_CREATE_FAILED => Some(Self {
                kind: ToastKind::Error,
                message: "Email already exists!",
            }),
            TOAST_FOLLOWED => Some(Self {
                kind: ToastKind::Success,
                message: "User Followed Successfully",
            }),
            TOAST_FOLLOW_FAILED => Some(Self {
                kind: ToastKind::Error,
                message: "Something went wrong!",
            }),
            _ => None,
        }
    }
}

/// One rendered card: display name, email, optional avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonCard {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl PersonCard {
    fn of_user(user: &UserRecord) -> Self {
        Self {
            name: user.attributes.full_name(),
            email: user.attributes.email.clone(),
            avatar_url: user.attributes.profile_url().map(str::to_owned),
        }
    }

    fn of_related(related: &RelatedUser) -> Self {
        Self {
            name: related.attributes.full_name(),
            email: related.attributes.email.clone(),
            avatar_url: related.attributes.profile_url().map(str::to_owned),
        }
    }
}

/// One row of the list: the base user, optionally paired with a single
/// relation partner, plus which relationship icons are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub base: PersonCard,
    pub partner: Option<PersonCard>,
    pub following_icon: bool,
    pub follower_icon: bool,
}

/// The four-way dispatch. Classification happens once per user and each
/// variant has exactly one row builder; only the base user's own relation
/// fields are consulted.
pub fn rows_for_user(user: &UserRecord) -> Vec<UserRow> {
    match RelationState::of(&user.attributes) {
        RelationState::Both => paired_rows(user, &user.attributes.following.data, true, true),
        RelationState::FollowingOnly => {
            paired_rows(user, &user.attributes.following.data, true, false)
        }
        RelationState::FollowersOnly => {
            paired_rows(user, &user.attributes.followers.data, false, true)
        }
        RelationState::NoRelations => vec![UserRow {
            base: PersonCard::of_user(user),
            partner: None,
            following_icon: false,
            follower_icon: false,
        }],
    }
}

fn paired_rows(
    user: &UserRecord,
    partners: &[RelatedUser],
    following_icon: bool,
    follower_icon: bool,
) -> Vec<UserRow> {
    partners
        .iter()
        .map(|partner| UserRow {
            base: PersonCard::of_user(user),
            partner: Some(PersonCard::of_related(partner)),
            following_icon,
            follower_icon,
        })
        .collect()
}

/// Everything the page template needs for one render.
pub struct PageView<'a> {
    pub toast: Option<Toast>,
    pub create_form: &'a CreateAccountForm,
    pub create_errors: &'a CreateAccountErrors,
    pub follow_form: &'a FollowForm,
    pub follow_errors: &'a FollowErrors,
    /// `None` when the dropdown fetch failed; the selects are omitted.
    pub dropdown_users: Option<&'a [UserRecord]>,
    pub status: ListStatus,
    pub users: Option<&'a [UserRecord]>,
}

pub fn render_page(view: &PageView) -> String {
    let mut html = String::new();
    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>flock</title>\n</head>\n<body>\n<main class=\"page\">\n",
    );
    if let Some(toast) = view.toast {
        html.push_str(&render_toast(toast));
    }
    html.push_str(&render_create_form(view.create_form, view.create_errors));
    html.push_str(&render_follow_form(
        view.follow_form,
        view.follow_errors,
        view.dropdown_users,
    ));
    html.push_str(&render_list_section(view.status, view.users));
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn render_toast(toast: Toast) -> String {
    let class = match toast.kind {
        ToastKind::Success => "toast toast-success",
        ToastKind::Error => "toast toast-error",
    };
    format!("<div class=\"{class}\" role=\"status\">{}</div>\n", toast.message)
}

fn render_create_form(form: &CreateAccountForm, errors: &CreateAccountErrors) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"create-account-section\">\n<h4>Create an Account</h4>\n");
    html.push_str("<form method=\"post\" action=\"/accounts\">\n");
    html.push_str(&render_input(
        "firstName",
        "First name",
        &form.first_name,
        errors.first_name,
    ));
    html.push_str(&render_input(
        "lastName",
        "Last name",
        &form.last_name,
        errors.last_name,
    ));
    html.push_str(&render_input("email", "email", &form.email, errors.email));
    html.push_str("<button type=\"submit\">Submit</button>\n</form>\n</section>\n");
    html
}

fn render_input(name: &str, label: &str, value: &str, error: Option<&'static str>) -> String {
    let mut html = format!(
        "<label for=\"{name}\">{label}</label>\n\
         <input type=\"text\" id=\"{name}\" name=\"{name}\" value=\"{}\"{}>\n",
        escape_html(value),
        if error.is_some() {
            " class=\"field-error\""
        } else {
            ""
        }
    );
    if let Some(message) = error {
        html.push_str(&format!("<p class=\"error-message\">{message}</p>\n"));
    }
    html
}

fn render_follow_form(
    form: &FollowForm,
    errors: &FollowErrors,
    dropdown_users: Option<&[UserRecord]>,
) -> String {
    let mut html = String::new();
    html.push_str("<section class=\"follow-now-section\">\n<h4>Follow Now</h4>\n");
    html.push_str("<form method=\"post\" action=\"/follow\">\n");
    html.push_str(&render_select(
        "selectedUser",
        "Select User",
        "Select User",
        &form.selected_user,
        errors.selected_user,
        dropdown_users,
    ));
    html.push_str(&render_select(
        "followingTo",
        "Will Follow",
        "Select user to follow",
        &form.following_to,
        errors.following_to,
        dropdown_users,
    ));
    html.push_str("<button type=\"submit\">Follow</button>\n</form>\n</section>\n");
    html
}

fn render_select(
    name: &str,
    label: &str,
    placeholder: &str,
    selected_value: &str,
    error: Option<&'static str>,
    dropdown_users: Option<&[UserRecord]>,
) -> String {
    let mut html = format!(
        "<h6{}>{label}</h6>\n",
        if error.is_some() {
            " class=\"field-error\""
        } else {
            ""
        }
    );
    // The selects only appear once the dropdown fetch has succeeded.
    let Some(users) = dropdown_users else {
        return html;
    };

    html.push_str(&format!("<select id=\"{name}\" name=\"{name}\">\n"));
    for user in users {
        let value = user.id.to_string();
        html.push_str(&format!(
            "<option value=\"{value}\"{}>{}</option>\n",
            if value == selected_value {
                " selected"
            } else {
                ""
            },
            escape_html(&user.attributes.full_name()),
        ));
    }
    html.push_str(&format!("<option value=\"\">{placeholder}</option>\n</select>\n"));
    html
}

fn render_list_section(status: ListStatus, users: Option<&[UserRecord]>) -> String {
    let mut html = String::new();
    html.push_str(
        "<section class=\"users-and-followers-section\">\n<h4>User and their followers</h4>\n",
    );
    if status == ListStatus::Loading {
        html.push_str("<h1>Fetching data....</h1>\n");
    } else {
        match users {
            Some(users) => {
                for user in users {
                    for row in rows_for_user(user) {
                        html.push_str(&render_row(&row));
                    }
                }
            }
            None => html.push_str("<div class=\"list-error\">Something went wrong...</div>\n"),
        }
    }
    html.push_str("</section>\n");
    html
}

fn render_row(row: &UserRow) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"user-row\">\n");
    html.push_str(&render_card(&row.base));
    if let Some(partner) = &row.partner {
        html.push_str(&format!(
            "<div class=\"follows-item\">\n\
             <span class=\"icon icon-following\"{}></span>\n\
             <span class=\"icon icon-follower\"{}></span>\n\
             </div>\n",
            if row.following_icon { "" } else { " hidden" },
            if row.follower_icon { "" } else { " hidden" },
        ));
        html.push_str(&render_card(partner));
    }
    html.push_str("</div>\n");
    html
}

fn render_card(card: &PersonCard) -> String {
    let avatar = match &card.avatar_url {
        Some(url) => format!("<img class=\"user-profile\" src=\"{}\" alt=\"\">\n", escape_html(url)),
        None => String::from("<div class=\"user-profile\"></div>\n"),
    };
    format!(
        "<div class=\"user-item\">\n{avatar}<h5>{}</h5>\n<h5>{}</h5>\n</div>\n",
        escape_html(&card.name),
        escape_html(&card.email),
    )
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
