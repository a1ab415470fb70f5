mod api;
mod cors;
mod db;
mod error;
mod outfit;
mod schema;
mod settings;


#[macro_use]
extern crate rocket;

use std::sync::Mutex;

use api::account_management::sessions::AccountSessions;
use cors::CORS;
use db::{run_db_migrations, DbConn};
use outfit::OutfitRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rocket::fairing::AdHoc;
use rocket::figment::Figment;
use rocket::{Build, Rocket};
use settings::Settings;

#[get("/")]
fn index() -> &'static str {
    "DigiRobe API"
}

fn build_rocket(figment: Figment, rng: StdRng, settings: Settings) -> Rocket<Build> {
    rocket::custom(figment)
        .attach(CORS)
        .attach(DbConn::fairing())
        .attach(AdHoc::on_ignite("Database migrations", run_db_migrations))
        .manage(AccountSessions::new())
        .manage(settings)
        .manage(OutfitRng(Mutex::new(rng)))
        .mount("/", routes![index])
        .mount(
            "/api/v1/",
            routes![
                index,
                crate::api::account_management::register::register,
                crate::api::account_management::login::login,
                crate::api::account_management::login::check_login,
                crate::api::account_management::logout::logout,
                crate::api::wardrobe_management::create::create_item,
                crate::api::wardrobe_management::list::get_items,
                crate::api::wardrobe_management::delete::delete_item,
                crate::api::wardrobe_management::suggest::suggest_outfit,
            ],
        )
        .register(
            "/",
            catchers![
                error::unauthorized,
                error::not_found,
                error::unprocessable,
                error::fallback,
            ],
        )
}

#[launch]
fn rocket() -> _ {
    dotenv::dotenv().ok();

    build_rocket(
        rocket::Config::figment(),
        StdRng::from_entropy(),
        Settings::new(),
    )
}
