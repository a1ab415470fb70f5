use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use crate::api::account_management::models::{Account, AccountLoggedIn, AccountOut};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema;
use crate::settings::Settings;
use diesel::prelude::*;
use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};
use rocket::http::{Cookie, CookieJar, Status};
use rocket::request::{self, FromRequest, Outcome};
use rocket::{Request, State};
use serde::{Deserialize, Serialize};

/// Process-wide map of live session keys to account ids.
pub(crate) struct AccountSessions {
    pub(crate) sessions: Mutex<HashMap<String, i32>>,
}

impl AccountSessions {
    pub(crate) fn new() -> AccountSessions {
        AccountSessions {
            sessions: Mutex::new(HashMap::<String, i32>::new()),
        }
    }
}

/// Payload of the private `session` cookie. The cookie is encrypted by
/// Rocket, so the creation time can be trusted for the age check.
#[derive(Serialize, Deserialize)]
struct SessionCookie {
    session_key: String,
    creation_time: SystemTime,
}

fn generate_session_key() -> String {
    const LEN: usize = 32;

    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(LEN)
        .map(char::from)
        .collect()
}

/// Registers a fresh session for `account_id` and hands the key to the
/// client inside a private cookie.
pub(crate) fn start_session(
    account_id: i32,
    sessions: &AccountSessions,
    cookies: &CookieJar<'_>,
) -> Result<(), ApiError> {
    let session_key = generate_session_key();

    sessions
        .sessions
        .lock()
        .map_err(|_| ApiError::Internal("Couldn't update sessions".to_string()))?
        .insert(session_key.clone(), account_id);

    let cookie = SessionCookie {
        session_key,
        creation_time: SystemTime::now(),
    };

    let cookie_string = serde_json::to_string(&cookie)
        .map_err(|err| ApiError::Internal(format!("Couldn't create session cookie: {}", err)))?;

    cookies.add_private(Cookie::new("session", cookie_string));

    Ok(())
}

/// Drops the caller's session, if any. Always clears the cookie.
pub(crate) fn end_session(sessions: &AccountSessions, cookies: &CookieJar<'_>) {
    if let Some(cookie) = cookies.get_private("session") {
        if let Ok(session) = serde_json::from_str::<SessionCookie>(cookie.value()) {
            if let Ok(mut sessions) = sessions.sessions.lock() {
                sessions.remove(&session.session_key);
            }
        }
    }

    cookies.remove_private("session");
}

fn unauthorized<T>() -> request::Outcome<T, ApiError> {
    Outcome::Error((Status::Unauthorized, ApiError::NotAuthenticated))
}

fn unavailable<T>(what: &str) -> request::Outcome<T, ApiError> {
    Outcome::Error((
        Status::InternalServerError,
        ApiError::Internal(format!("Couldn't get {}", what)),
    ))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AccountLoggedIn {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(session_cookie) = req.cookies().get_private("session") else {
            return unauthorized();
        };

        let Ok(session) = serde_json::from_str::<SessionCookie>(session_cookie.value()) else {
            return unauthorized();
        };

        let Ok(session_age) = session.creation_time.elapsed() else {
            return unauthorized();
        };

        let settings = match req.guard::<&State<Settings>>().await {
            Outcome::Success(settings) => settings,
            _ => return unavailable("settings"),
        };

        let sessions = match req.guard::<&State<AccountSessions>>().await {
            Outcome::Success(sessions) => sessions,
            _ => return unavailable("session store"),
        };

        if session_age > Duration::from_secs(settings.session_max_age_secs) {
            // Expired keys never see a logout, so evict them as they turn up.
            if let Ok(mut sessions) = sessions.sessions.lock() {
                sessions.remove(&session.session_key);
            }

            return unauthorized();
        }

        let account_id = {
            let Ok(sessions) = sessions.sessions.lock() else {
                return unavailable("session store");
            };

            match sessions.get(&session.session_key) {
                Some(account_id) => *account_id,
                None => return unauthorized(),
            }
        };

        let conn = match req.guard::<DbConn>().await {
            Outcome::Success(conn) => conn,
            _ => return unavailable("database connection"),
        };

        let account = conn
            .run(move |c| {
                use schema::accounts::dsl::*;

                accounts
                    .filter(id.eq(account_id))
                    .first::<Account>(c)
                    .optional()
            })
            .await;

        match account {
            Ok(Some(account)) => Outcome::Success(AccountLoggedIn(AccountOut::from(account))),
            Ok(None) => unauthorized(),
            Err(_) => unavailable("account"),
        }
    }
}
