use actix_web::{HttpResponse, HttpResponseBuilder, get, http::header, post, web};
use client::ListStatus;
use log::{debug, warn};
use serde::Deserialize;

use crate::{
    AppContext,
    forms::{CreateAccountErrors, CreateAccountForm, FollowErrors, FollowForm},
    store::refresh_users,
    views::{self, PageView, Toast},
};

pub fn configure(config: &mut web::ServiceConfig) {
    config.service(index).service(create_account).service(follow);
}

#[derive(Deserialize, Default)]
pub struct IndexQuery {
    toast: Option<String>,
}

#[get("/")]
pub async fn index(context: web::Data<AppContext>, query: web::Query<IndexQuery>) -> HttpResponse {
    ensure_initial_fetch(&context).await;

    let toast = query.toast.as_deref().and_then(Toast::from_code);
    let body = page_body(
        &context,
        toast,
        &CreateAccountForm::default(),
        &CreateAccountErrors::default(),
        &FollowForm::default(),
        &FollowErrors::default(),
    )
    .await;

    html(HttpResponse::Ok(), body)
}

#[post("/accounts")]
pub async fn create_account(
    context: web::Data<AppContext>,
    form: web::Form<CreateAccountForm>,
) -> HttpResponse {
    let form = form.into_inner();
    let new_user = match form.validate() {
        Ok(new_user) => new_user,
        Err(errors) => {
            debug!("create-account submission blocked by validation");
            let body = page_body(
                &context,
                None,
                &form,
                &errors,
                &FollowForm::default(),
                &FollowErrors::default(),
            )
            .await;
            return html(HttpResponse::UnprocessableEntity(), body);
        }
    };

    let toast = match context.directory.create_user(new_user).await {
        Ok(()) => views::TOAST_CREATED,
        Err(e) => {
            warn!("create user failed: {e}");
            views::TOAST_CREATE_FAILED
        }
    };

    // The list refetch fires once on any settled mutation, success or
    // failure.
    refresh_users(&context).await;

    redirect_with_toast(toast)
}

#[post("/follow")]
pub async fn follow(context: web::Data<AppContext>, form: web::Form<FollowForm>) -> HttpResponse {
    let form = form.into_inner();
    let request = match form.validate() {
        Ok(request) => request,
        Err(errors) => {
            debug!("follow submission blocked by validation");
            let body = page_body(
                &context,
                None,
                &CreateAccountForm::default(),
                &CreateAccountErrors::default(),
                &form,
                &errors,
            )
            .await;
            return html(HttpResponse::UnprocessableEntity(), body);
        }
    };

    let toast = match context
        .directory
        .follow_user(request.selected_id, request.target_id)
        .await
    {
        Ok(()) => views::TOAST_FOLLOWED,
        Err(e) => {
            warn!("follow user failed: {e}");
            views::TOAST_FOLLOW_FAILED
        }
    };

    refresh_users(&context).await;

    redirect_with_toast(toast)
}

/// The first page view triggers the initial list fetch; afterwards the
/// store only changes when a mutation settles.
async fn ensure_initial_fetch(context: &AppContext) {
    let pending = {
        let state = context.state.lock();
        state.status() == ListStatus::Loading && state.users().is_none()
    };
    if pending {
        refresh_users(context).await;
    }
}

async fn page_body(
    context: &AppContext,
    toast: Option<Toast>,
    create_form: &CreateAccountForm,
    create_errors: &CreateAccountErrors,
    follow_form: &FollowForm,
    follow_errors: &FollowErrors,
) -> String {
    let dropdown_users = match context.directory.list_dropdown_users().await {
        Ok(users) => Some(users),
        Err(e) => {
            warn!("failed to fetch dropdown users: {e}");
            None
        }
    };

    let state = context.state.lock();
    views::render_page(&PageView {
        toast,
        create_form,
        create_errors,
        follow_form,
        follow_errors,
        dropdown_users: dropdown_users.as_deref(),
        status: state.status(),
        users: state.users(),
    })
}

fn html(mut builder: HttpResponseBuilder, body: String) -> HttpResponse {
    builder
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn redirect_with_toast(code: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, format!("/?toast={code}")))
        .finish()
}
