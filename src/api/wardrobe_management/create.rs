use crate::api::account_management::models::AccountLoggedIn;
use crate::api::wardrobe_management::models::{Category, Item, ItemOut, Season};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema::items;
use diesel::prelude::*;
use rocket::serde::json::Json;
use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewItemIn {
    name: String,
    category: String,
    color: String,
    season: String,
    #[serde(default)]
    notes: String,
}

#[derive(Insertable)]
#[diesel(table_name = items)]
struct NewItem {
    account_id: i32,
    name: String,
    category: String,
    color: String,
    season: String,
    notes: String,
}

#[post("/create_item", data = "<input>")]
pub(crate) async fn create_item(
    input: Json<NewItemIn>,
    account: AccountLoggedIn,
    conn: DbConn,
) -> Result<Json<ItemOut>, ApiError> {
    let input = input.into_inner();

    let name = input.name.trim().to_string();
    if !(2..=100).contains(&name.chars().count()) {
        return Err(ApiError::Validation(
            "item name must be between 2 and 100 characters".to_string(),
        ));
    }

    let category = input.category.parse::<Category>()?;
    let season = input.season.parse::<Season>()?;

    let new_item = NewItem {
        account_id: account.0.id,
        name,
        category: category.as_str().to_string(),
        color: input.color.trim().to_lowercase(),
        season: season.as_str().to_string(),
        notes: input.notes.trim().to_string(),
    };

    let item = conn
        .run(move |c| {
            diesel::insert_into(items::table)
                .values(&new_item)
                .get_result::<Item>(c)
                .map_err(|err| ApiError::Internal(format!("Couldn't store item: {}", err)))
        })
        .await?;

    Ok(Json(ItemOut::try_from(item)?))
}
