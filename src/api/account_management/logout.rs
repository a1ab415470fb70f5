use crate::api::account_management::sessions::{end_session, AccountSessions};
use rocket::http::CookieJar;
use rocket::State;

#[post("/logout")]
pub(crate) async fn logout(sessions: &State<AccountSessions>, cookies: &CookieJar<'_>) -> &'static str {
    end_session(sessions, cookies);

    "Logged out"
}
