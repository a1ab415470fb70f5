use crate::api::account_management::models::AccountLoggedIn;
use crate::api::wardrobe_management::models::{Category, Item, ItemOut, Season};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema;
use diesel::prelude::*;
use rocket::serde::json::Json;

/// Lists the caller's wardrobe in insertion order, optionally narrowed by
/// category, color, and season. For each parameter, `all`, an empty value,
/// or no parameter at all means no restriction. Category and season must
/// be enum values; color is matched as lowercased free text, the spelling
/// items are stored with.
#[get("/items?<category>&<color>&<season>")]
pub(crate) async fn get_items(
    category: Option<String>,
    color: Option<String>,
    season: Option<String>,
    account: AccountLoggedIn,
    conn: DbConn,
) -> Result<Json<Vec<ItemOut>>, ApiError> {
    let wanted_category = Category::parse_filter(category.as_deref())?;
    let wanted_season = Season::parse_filter(season.as_deref())?;
    let wanted_color = color
        .as_deref()
        .map(str::trim)
        .filter(|color| !color.is_empty() && !color.eq_ignore_ascii_case("all"))
        .map(str::to_lowercase);
    let owner = account.0.id;

    let rows = conn
        .run(move |c| {
            use schema::items::dsl::*;

            let mut query = items
                .filter(account_id.eq(owner))
                .order(id.asc())
                .into_boxed();

            if let Some(wanted) = wanted_category {
                query = query.filter(category.eq(wanted.as_str()));
            }

            if let Some(wanted) = wanted_color {
                query = query.filter(color.eq(wanted));
            }

            if let Some(wanted) = wanted_season {
                query = query.filter(season.eq(wanted.as_str()));
            }

            query
                .load::<Item>(c)
                .map_err(|err| ApiError::Internal(format!("Couldn't load items: {}", err)))
        })
        .await?;

    let out = rows
        .into_iter()
        .map(ItemOut::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(out))
}
