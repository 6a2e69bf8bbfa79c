//! Host-facing adapters: lookups take a list of terms plus named options and
//! return one JSON value per result, filters transform a single string.

mod error;
pub mod filters;
pub mod stat;
pub mod users;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub use error::LookupError;
pub use filters::{apply_filter, filter_names, surround};
pub use stat::StatLookup;
pub use users::UsersLookup;

/// Named options passed alongside the terms.
pub type Options = Map<String, Value>;

pub trait Lookup {
    fn name(&self) -> &'static str;

    /// One result per produced value. The outer error covers failures that
    /// stop the whole call, such as invalid options.
    fn run_each(
        &self,
        terms: &[String],
        options: &Options,
    ) -> Result<Vec<Result<Value, LookupError>>, LookupError>;

    /// Every term is processed even when an earlier one fails; the first
    /// failure is then returned in place of the values.
    fn run(&self, terms: &[String], options: &Options) -> Result<Vec<Value>, LookupError> {
        self.run_each(terms, options)?.into_iter().collect()
    }
}

/// Lookup registered under `name`, with default diagnostics.
pub fn lookup(name: &str) -> Result<Box<dyn Lookup>, LookupError> {
    match name {
        "stat" => Ok(Box::new(StatLookup::logging())),
        "users" => Ok(Box::new(UsersLookup)),
        other => Err(LookupError::UnknownLookup(other.to_owned())),
    }
}

/// Decode `options` into a typed set; unknown keys are ignored.
pub(crate) fn parse_options<T: DeserializeOwned>(
    lookup: &'static str,
    options: &Options,
) -> Result<T, LookupError> {
    serde_json::from_value(Value::Object(options.clone()))
        .map_err(|source| LookupError::InvalidOptions { lookup, source })
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
