use crate::api::account_management::credentials::verify_password;
use crate::api::account_management::models::{Account, AccountLoggedIn, AccountOut};
use crate::api::account_management::sessions::{start_session, AccountSessions};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema;
use diesel::prelude::*;
use rocket::http::CookieJar;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct LoginIn {
    username: String,
    password: String,
}

/// Unknown usernames and wrong passwords produce the same error so the
/// response never reveals whether an account exists.
#[post("/login", data = "<input>")]
pub(crate) async fn login(
    input: Json<LoginIn>,
    sessions: &State<AccountSessions>,
    conn: DbConn,
    cookies: &CookieJar<'_>,
) -> Result<Json<AccountOut>, ApiError> {
    let input = input.into_inner();

    let account = conn
        .run(move |c| {
            use schema::accounts::dsl::*;

            accounts
                .filter(username.eq(&input.username))
                .first::<Account>(c)
                .optional()
                .map_err(|err| ApiError::Internal(format!("Couldn't load account: {}", err)))
                .map(|account| (account, input.password))
        })
        .await?;

    let (account, password) = account;
    let account = account.ok_or(ApiError::InvalidCredentials)?;

    verify_password(&password, &account.password_hash)?;

    start_session(account.id, sessions, cookies)?;

    Ok(Json(AccountOut::from(account)))
}

#[get("/check_login")]
pub(crate) async fn check_login(account: AccountLoggedIn) -> Json<AccountOut> {
    Json(account.0)
}
