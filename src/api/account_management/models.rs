use crate::schema::accounts;
use diesel::prelude::*;
use serde::Serialize;
use std::fmt::Debug;

#[derive(Queryable, Debug)]
pub struct Account {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Insertable)]
#[diesel(table_name = accounts)]
pub struct NewAccount {
    pub username: String,
    pub full_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Public view of an account. The password hash never leaves the server.
#[derive(Serialize, Debug, Clone)]
pub struct AccountOut {
    pub id: i32,
    pub username: String,
    pub full_name: String,
    pub email: String,
}

impl From<Account> for AccountOut {
    fn from(account: Account) -> AccountOut {
        AccountOut {
            id: account.id,
            username: account.username,
            full_name: account.full_name,
            email: account.email,
        }
    }
}

/// Request guard proving the caller holds a live session.
pub(crate) struct AccountLoggedIn(pub AccountOut);
