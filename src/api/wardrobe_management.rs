pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod list;
pub(crate) mod models;
pub(crate) mod suggest;
