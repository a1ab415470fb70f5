pub(crate) mod credentials;
pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod models;
pub(crate) mod register;
pub(crate) mod sessions;
