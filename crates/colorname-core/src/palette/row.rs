//! Raw palette rows as handed over by a loader
//!
//! A loader sources rows from whatever tabular format it reads and hands
//! them over as `PaletteRow`s. Fields are optional so that a schema
//! mismatch (a column the source never had) can be reported as such,
//! rather than being confused with a bad value.

use super::ReferenceColor;
use crate::error::{Error, Result};
use crate::rgb::Rgb;

/// A single cell value: either already numeric or still text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Integer(i64),
    Text(String),
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        FieldValue::Integer(i64::from(v))
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

/// One row of the source table: `name, red, green, blue`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaletteRow {
    pub name: Option<String>,
    pub red: Option<FieldValue>,
    pub green: Option<FieldValue>,
    pub blue: Option<FieldValue>,
}

impl PaletteRow {
    /// A complete row with numeric components.
    pub fn new(name: impl Into<String>, red: i64, green: i64, blue: i64) -> Self {
        Self {
            name: Some(name.into()),
            red: Some(FieldValue::Integer(red)),
            green: Some(FieldValue::Integer(green)),
            blue: Some(FieldValue::Integer(blue)),
        }
    }

    /// A complete row with components still in text form.
    pub fn from_text(name: &str, red: &str, green: &str, blue: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            red: Some(red.into()),
            green: Some(green.into()),
            blue: Some(blue.into()),
        }
    }

    /// A row with no fields set.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_red(mut self, v: impl Into<FieldValue>) -> Self {
        self.red = Some(v.into());
        self
    }

    pub fn with_green(mut self, v: impl Into<FieldValue>) -> Self {
        self.green = Some(v.into());
        self
    }

    pub fn with_blue(mut self, v: impl Into<FieldValue>) -> Self {
        self.blue = Some(v.into());
        self
    }

    /// Validate the row and convert it into a reference color.
    ///
    /// Missing fields are reported before bad values, so a row lacking a
    /// column is always a `MissingColumn` regardless of its other cells.
    pub(crate) fn validate(self, row: usize) -> Result<ReferenceColor> {
        let name = self.name.ok_or(Error::MissingColumn { row, field: "name" })?;
        let red = self.red.ok_or(Error::MissingColumn { row, field: "red" })?;
        let green = self.green.ok_or(Error::MissingColumn { row, field: "green" })?;
        let blue = self.blue.ok_or(Error::MissingColumn { row, field: "blue" })?;

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(Error::MalformedRow {
                row,
                field: "name",
                value: name,
            });
        }

        let rgb = Rgb::new(
            component(row, "red", red)?,
            component(row, "green", green)?,
            component(row, "blue", blue)?,
        );
        Ok(ReferenceColor::new(name, rgb))
    }
}

/// Interpret one color component.
fn component(row: usize, field: &'static str, value: FieldValue) -> Result<u8> {
    let v = match value {
        FieldValue::Integer(v) => v,
        FieldValue::Text(text) => {
            let trimmed = text.trim();
            trimmed.parse::<i64>().map_err(|_| Error::MalformedRow {
                row,
                field,
                value: text.clone(),
            })?
        }
    };
    u8::try_from(v).map_err(|_| Error::OutOfRangeValue { row, field, value: v })
}
