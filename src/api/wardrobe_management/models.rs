use crate::error::ApiError;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::str::FromStr;

/// The fixed classification of every wardrobe item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Tops,
    Bottoms,
    Dresses,
    Shoes,
    Accessories,
}

impl Category {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Dresses => "dresses",
            Category::Shoes => "shoes",
            Category::Accessories => "accessories",
        }
    }

    /// Interprets the `category` query parameter of a listing request.
    /// Absent, empty, or "all" means no filter.
    pub(crate) fn parse_filter(raw: Option<&str>) -> Result<Option<Category>, ApiError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }
}

impl FromStr for Category {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Category, ApiError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tops" => Ok(Category::Tops),
            "bottoms" => Ok(Category::Bottoms),
            "dresses" => Ok(Category::Dresses),
            "shoes" => Ok(Category::Shoes),
            "accessories" => Ok(Category::Accessories),
            other => Err(ApiError::Validation(format!(
                "'{}' is not a clothing category",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
    All,
}

impl Season {
    /// Interprets the `season` query parameter of a listing request.
    /// Absent, empty, or "all" means no filter, so items tagged with the
    /// `all` season can only match through the no-filter path.
    pub(crate) fn parse_filter(raw: Option<&str>) -> Result<Option<Season>, ApiError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) if raw.eq_ignore_ascii_case("all") => Ok(None),
            Some(raw) => raw.parse().map(Some),
        }
    }

    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::All => "all",
        }
    }
}

impl FromStr for Season {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Season, ApiError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" => Ok(Season::Fall),
            "winter" => Ok(Season::Winter),
            "all" => Ok(Season::All),
            other => Err(ApiError::Validation(format!("'{}' is not a season", other))),
        }
    }
}

#[derive(Queryable, Debug, Clone)]
pub struct Item {
    pub id: i32,
    pub account_id: i32,
    pub name: String,
    pub category: String,
    pub color: String,
    pub season: String,
    pub notes: String,
}

#[derive(Serialize, Debug)]
pub struct ItemOut {
    pub id: i32,
    pub account_id: i32,
    pub name: String,
    pub category: Category,
    pub color: String,
    pub season: Season,
    pub notes: String,
}

impl TryFrom<Item> for ItemOut {
    type Error = ApiError;

    // Inserts only ever store enum spellings, so a parse failure here
    // means the row was written by something else entirely.
    fn try_from(item: Item) -> Result<ItemOut, ApiError> {
        let category = item
            .category
            .parse::<Category>()
            .map_err(|_| ApiError::Internal(format!("Stored item {} has a bad category", item.id)))?;
        let season = item
            .season
            .parse::<Season>()
            .map_err(|_| ApiError::Internal(format!("Stored item {} has a bad season", item.id)))?;

        Ok(ItemOut {
            id: item.id,
            account_id: item.account_id,
            name: item.name,
            category,
            color: item.color,
            season,
            notes: item.notes,
        })
    }
}
