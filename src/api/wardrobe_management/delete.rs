use crate::api::account_management::models::AccountLoggedIn;
use crate::db::DbConn;
use crate::error::ApiError;
use crate::schema;
use diesel::prelude::*;

/// Removes one of the caller's items. A missing item and another
/// account's item are indistinguishable in the response.
#[delete("/item/<iid>")]
pub(crate) async fn delete_item(
    account: AccountLoggedIn,
    iid: i32,
    conn: DbConn,
) -> Result<(), ApiError> {
    let owner = account.0.id;

    let deleted = conn
        .run(move |c| {
            use schema::items::dsl::*;

            diesel::delete(items.filter(id.eq(iid).and(account_id.eq(owner))))
                .execute(c)
                .map_err(|err| ApiError::Internal(format!("Couldn't delete item: {}", err)))
        })
        .await?;

    if deleted == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(())
}
