pub(crate) mod account_management;
pub(crate) mod wardrobe_management;
