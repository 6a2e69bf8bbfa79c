use statprobe_runtime::DEFAULT_SURROUND;

use crate::LookupError;

/// A filter receives the piped value and its positional arguments.
pub type FilterFn = fn(&str, &[&str]) -> String;

const FILTERS: &[(&str, FilterFn)] = &[
    ("mycustomfilter", surround_filter),
    ("surround", surround_filter),
];

/// `surround("hi", "**")` is `"** hi **"`.
pub fn surround(text: &str, surround: &str) -> String {
    format!("{surround} {text} {surround}")
}

fn surround_filter(text: &str, args: &[&str]) -> String {
    surround(text, args.first().copied().unwrap_or(DEFAULT_SURROUND))
}

pub fn filter_names() -> impl Iterator<Item = &'static str> {
    FILTERS.iter().map(|(name, _)| *name)
}

pub fn apply_filter(name: &str, text: &str, args: &[&str]) -> Result<String, LookupError> {
    FILTERS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, filter)| filter(text, args))
        .ok_or_else(|| LookupError::UnknownFilter(name.to_owned()))
}

#[cfg(test)]
#[path = "filters_tests.rs"]
mod tests;
