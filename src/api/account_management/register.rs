use crate::api::account_management::credentials::hash_password;
use crate::api::account_management::models::{Account, AccountOut, NewAccount};
use crate::api::account_management::sessions::{start_session, AccountSessions};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use rocket::http::CookieJar;
use rocket::serde::json::Json;
use rocket::State;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct RegisterIn {
    username: String,
    full_name: String,
    email: String,
    password: String,
}

fn valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

fn require(value: &str, field: &str) -> Result<String, ApiError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ApiError::Validation(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

#[post("/register", data = "<input>")]
pub(crate) async fn register(
    input: Json<RegisterIn>,
    sessions: &State<AccountSessions>,
    conn: DbConn,
    cookies: &CookieJar<'_>,
) -> Result<Json<AccountOut>, ApiError> {
    let input = input.into_inner();

    if input.password.is_empty() {
        return Err(ApiError::Validation(
            "password must not be empty".to_string(),
        ));
    }

    let new_account = NewAccount {
        username: require(&input.username, "username")?,
        full_name: require(&input.full_name, "full name")?,
        email: require(&input.email, "email")?,
        password_hash: hash_password(&input.password)?,
    };

    if !valid_email(&new_account.email) {
        return Err(ApiError::Validation(
            "email address is not valid".to_string(),
        ));
    }

    let account = conn
        .run(move |c| {
            use schema::accounts::dsl::*;

            let clash = accounts
                .filter(username.eq(&new_account.username))
                .or_filter(email.eq(&new_account.email))
                .first::<Account>(c)
                .optional()
                .map_err(|err| ApiError::Internal(format!("Couldn't check identity: {}", err)))?;

            if clash.is_some() {
                return Err(ApiError::DuplicateIdentity);
            }

            diesel::insert_into(accounts)
                .values(&new_account)
                .get_result::<Account>(c)
                .map_err(|err| match err {
                    // Backstop for a race between the check and the insert.
                    diesel::result::Error::DatabaseError(
                        DatabaseErrorKind::UniqueViolation,
                        _,
                    ) => ApiError::DuplicateIdentity,
                    err => ApiError::Internal(format!("Couldn't create account: {}", err)),
                })
        })
        .await?;

    start_session(account.id, sessions, cookies)?;

    log::info!("registered account '{}'", account.username);

    Ok(Json(AccountOut::from(account)))
}

#[cfg(test)]
mod tests {
    use super::valid_email;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(valid_email("alice@x.com"));
        assert!(valid_email("bob.smith@mail.example.org"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!valid_email("alice"));
        assert!(!valid_email("@x.com"));
        assert!(!valid_email("alice@"));
        assert!(!valid_email("alice@nodot"));
        assert!(!valid_email("alice@.com"));
        assert!(!valid_email("alice@x."));
    }
}
