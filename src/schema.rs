diesel::table! {
    accounts (id) {
        id -> Integer,
        username -> Text,
        full_name -> Text,
        email -> Text,
        password_hash -> Text,
    }
}

diesel::table! {
    items (id) {
        id -> Integer,
        account_id -> Integer,
        name -> Text,
        category -> Text,
        color -> Text,
        season -> Text,
        notes -> Text,
    }
}

diesel::joinable!(items -> accounts (account_id));

diesel::allow_tables_to_appear_in_same_query!(accounts, items);
