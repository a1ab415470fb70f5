use crate::api::account_management::models::AccountLoggedIn;
use crate::api::wardrobe_management::models::{Item, ItemOut};
use crate::db::DbConn;
use crate::error::ApiError;
use crate::outfit::{self, OutfitRng};
use crate::schema;
use crate::settings::Settings;
use diesel::prelude::*;
use rocket::serde::json::Json;
use rocket::State;

#[get("/suggest_outfit")]
pub(crate) async fn suggest_outfit(
    account: AccountLoggedIn,
    conn: DbConn,
    settings: &State<Settings>,
    rng: &State<OutfitRng>,
) -> Result<Json<Vec<ItemOut>>, ApiError> {
    let owner = account.0.id;

    let wardrobe = conn
        .run(move |c| {
            use schema::items::dsl::*;

            items
                .filter(account_id.eq(owner))
                .order(id.asc())
                .load::<Item>(c)
                .map_err(|err| ApiError::Internal(format!("Couldn't load items: {}", err)))
        })
        .await?;

    let picked: Vec<Item> = {
        let mut rng = rng
            .0
            .lock()
            .map_err(|_| ApiError::Internal("Couldn't get random source".to_string()))?;

        outfit::suggest(
            &wardrobe,
            settings.outfit_min_items,
            settings.outfit_max_items,
            &mut *rng,
        )?
        .into_iter()
        .cloned()
        .collect()
    };

    let out = picked
        .into_iter()
        .map(ItemOut::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(out))
}
