//! [`Json`] file [`Catalog`] implementation.

use std::{fs, path::PathBuf, str::FromStr as _};

use common::operations::{By, Select};
use serde::Deserialize;
use tracerr::Traced;
use tracing as log;

use crate::domain::{
    promotion::{
        self, Category, Color, Description, Discount, DiscountKind,
        ExpirationDateTime, Palette, Title,
    },
    Promotion,
};

use super::{Catalog, Error};

/// [`Catalog`] reading [`Promotion`]s from a JSON file.
///
/// The file is re-read on every selection, so the [`Promotion`]s may be
/// edited without restarting. Records failing validation are skipped.
#[derive(Clone, Debug)]
pub struct Json {
    /// Path to the JSON file.
    path: PathBuf,
}

impl Json {
    /// Creates a new [`Json`] [`Catalog`] reading the file at the provided
    /// `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parses [`Promotion`]s out of the provided JSON `bytes`, skipping
    /// invalid ones.
    ///
    /// # Errors
    ///
    /// If the `bytes` are not a JSON array of promotion objects.
    pub fn parse(bytes: &[u8]) -> Result<Vec<Promotion>, serde_json::Error> {
        let records = serde_json::from_slice::<Vec<Record>>(bytes)?;
        Ok(records
            .into_iter()
            .filter_map(|r| {
                let id = r.id;
                Promotion::try_from(r)
                    .map_err(|e| log::warn!("skipping promotion `{id}`: {e}"))
                    .ok()
            })
            .collect())
    }
}

impl Catalog<Select<By<Vec<Promotion>, Category>>> for Json {
    type Ok = Vec<Promotion>;
    type Err = Traced<Error>;

    fn execute(
        &self,
        Select(by): Select<By<Vec<Promotion>, Category>>,
    ) -> Result<Self::Ok, Self::Err> {
        let requested = by.into_inner();

        let bytes = fs::read(&self.path)
            .map_err(Error::Io)
            .map_err(tracerr::wrap!())?;
        let mut promotions = Self::parse(&bytes)
            .map_err(Error::Json)
            .map_err(tracerr::wrap!())?;
        let total = promotions.len();
        promotions.retain(|p| p.category.matches(&requested));

        log::debug!(
            "loaded {} of {total} promotions for `{requested}` category from \
             `{}`",
            promotions.len(),
            self.path.display(),
        );
        Ok(promotions)
    }
}

/// Raw [`Promotion`] record of a JSON file.
///
/// Only the record shape is checked while deserializing, so a single invalid
/// value skips its record rather than failing the whole file.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Record {
    /// ID of the [`Promotion`].
    id: u32,

    /// Title of the [`Promotion`].
    title: String,

    /// Description of the [`Promotion`].
    description: String,

    /// Category tag of the [`Promotion`].
    category: String,

    /// Indicator whether the [`Promotion`] is running.
    is_active: bool,

    /// Priority of the [`Promotion`], zero if omitted.
    #[serde(default)]
    priority: Option<serde_json::Value>,

    /// [`DiscountKind`] of the [`Promotion`].
    discount_type: String,

    /// Value of the [`Promotion`] discount.
    discount_value: Value,

    /// Expiration of the [`Promotion`] as an RFC 3339 string, if any.
    #[serde(default)]
    valid_until: Option<String>,

    /// Background color of the [`Promotion`].
    background_color: Option<String>,

    /// Text color of the [`Promotion`].
    text_color: Option<String>,

    /// Call-to-action button text of the [`Promotion`].
    button_text: String,
}

/// Discount value, either a JSON number or a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Value {
    /// JSON number.
    Number(serde_json::Number),

    /// JSON string.
    Text(String),
}

impl TryFrom<Record> for Promotion {
    type Error = &'static str;

    fn try_from(r: Record) -> Result<Self, Self::Error> {
        let priority = match r.priority {
            None | Some(serde_json::Value::Null) => 0,
            Some(v) => v
                .as_i64()
                .and_then(|p| i32::try_from(p).ok())
                .ok_or("invalid priority")?,
        };
        let kind = DiscountKind::from_str(&r.discount_type)
            .map_err(|_| "invalid discount type")?;
        let value = match r.discount_value {
            Value::Number(n) => n.to_string(),
            Value::Text(s) => s,
        };
        let valid_until = r
            .valid_until
            .as_deref()
            .map(ExpirationDateTime::from_rfc3339)
            .transpose()
            .map_err(|_| "invalid expiration date and time")?;
        let default = Palette::default();

        Ok(Self {
            id: r.id.into(),
            title: Title::from_str(&r.title)?,
            description: Description::from_str(&r.description)?,
            category: Category::from_str(&r.category)?,
            is_active: r.is_active,
            priority: priority.into(),
            discount: Discount::parse(kind, &value)?,
            valid_until,
            palette: Palette {
                background: r
                    .background_color
                    .as_deref()
                    .map(Color::from_str)
                    .transpose()?
                    .unwrap_or(default.background),
                text: r
                    .text_color
                    .as_deref()
                    .map(Color::from_str)
                    .transpose()?
                    .unwrap_or(default.text),
            },
            button_text: promotion::ButtonText::from_str(&r.button_text)?,
        })
    }
}
