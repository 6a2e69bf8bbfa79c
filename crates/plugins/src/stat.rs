use serde_json::Value;
use statprobe_fs::{FileStatusProbe, ProbeOptions};
use statprobe_runtime::{Diagnostics, LogDiagnostics};

use crate::{Lookup, LookupError, Options, parse_options};

/// Status records for a list of paths.
///
/// Options: `follow` (bool), `get_checksum` (bool), `checksum_algorithm`
/// (`md5`, `sha1` or `sha256`).
pub struct StatLookup<D = LogDiagnostics> {
    probe: FileStatusProbe<D>,
}

impl StatLookup<LogDiagnostics> {
    pub fn logging() -> Self {
        Self::new(FileStatusProbe::logging())
    }
}

impl<D: Diagnostics> StatLookup<D> {
    pub fn new(probe: FileStatusProbe<D>) -> Self {
        Self { probe }
    }
}

impl<D: Diagnostics> Lookup for StatLookup<D> {
    fn name(&self) -> &'static str {
        "stat"
    }

    fn run_each(
        &self,
        terms: &[String],
        options: &Options,
    ) -> Result<Vec<Result<Value, LookupError>>, LookupError> {
        let options: ProbeOptions = parse_options(self.name(), options)?;

        let results = self
            .probe
            .probe_all(terms, &options)
            .into_iter()
            .zip(terms)
            .map(|(result, term)| match result {
                Ok(record) => Ok(serde_json::to_value(&record)?),
                Err(source) => Err(LookupError::Probe {
                    path: term.clone(),
                    source,
                }),
            })
            .collect();

        Ok(results)
    }
}

#[cfg(test)]
#[path = "stat_tests.rs"]
mod tests;
