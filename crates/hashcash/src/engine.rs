//! The stamp engine: generation and verification roles.
//!
//! A [`StampEngine`] holds configuration and a digest provider. It hands out
//! a [`StampGenerator`] for minting new stamps and a [`ParsedStamp`] for
//! checking received ones. The two never share state.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDateTime, Utc};
use hashcash_core::{
    checked_digest, leading_zero_bits, render, validate_bits, validate_date_pattern,
    validate_field_string, validate_suffix_length, validate_version, DigestAlgorithm,
    DigestProvider, Field, Stamp, StampDate, Version,
};
use hashcash_digest::SoftwareDigest;
use hashcash_search::{SearchControl, SearchError, SearchOutcome, Searcher};
use rand::RngCore;
use tracing::{debug, trace};

use crate::config::{EngineConfig, ValidatedConfig};
use crate::error::Result;
use crate::salt::random_salt;
use crate::verify::ParsedStamp;

/// Factory for generators and parsed stamps sharing one configuration and
/// digest provider.
#[derive(Clone)]
pub struct StampEngine {
    config: EngineConfig,
    defaults: ValidatedConfig,
    provider: Arc<dyn DigestProvider>,
}

impl StampEngine {
    /// Create an engine, validating the configured defaults.
    pub fn new(config: EngineConfig, provider: Arc<dyn DigestProvider>) -> Result<Self> {
        let defaults = config.validated()?;
        Ok(Self {
            config,
            defaults,
            provider,
        })
    }

    /// An engine backed by the in-process [`SoftwareDigest`].
    pub fn with_software_digest(config: EngineConfig) -> Result<Self> {
        Self::new(config, Arc::new(SoftwareDigest::new()))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a new stamp dated now, with a salt from the thread RNG.
    ///
    /// Fails only if the clock reads outside 1970 to 2069.
    pub fn new_for_generation(&self) -> Result<StampGenerator> {
        self.new_for_generation_at(Utc::now().naive_utc(), &mut rand::thread_rng())
    }

    /// Start a new stamp with an explicit date and randomness source.
    pub fn new_for_generation_at<R: RngCore + ?Sized>(
        &self,
        now: NaiveDateTime,
        rng: &mut R,
    ) -> Result<StampGenerator> {
        let defaults = self.defaults;
        let date = StampDate::new(now, defaults.date_pattern)?;
        let mut stamp = Stamp::new(defaults.version, defaults.bits, date);
        stamp.salt = random_salt(rng, self.config.seed_length);
        Ok(StampGenerator::from_parts(
            stamp,
            self.settings(),
            Arc::clone(&self.provider),
        ))
    }

    /// Parse a received stamp for verification.
    ///
    /// Succeeds for any structurally valid stamp; whether its proof-of-work
    /// holds is a separate question answered by [`ParsedStamp::is_valid`].
    pub fn parse_for_verification(&self, stamp: &str) -> Result<ParsedStamp> {
        let fields = hashcash_core::parse(stamp)?;
        Ok(ParsedStamp::from_parts(
            fields,
            self.settings(),
            Arc::clone(&self.provider),
        ))
    }

    fn settings(&self) -> SearchSettings {
        SearchSettings {
            suffix_limit: self.config.suffix_limit,
            algorithm: self.config.algorithm,
            check_interval: self.config.check_interval,
        }
    }
}

impl std::fmt::Debug for StampEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StampEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Where a generator is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Fields may be changed; the suffix, if any, is not known to be valid.
    Configuring,
    /// A search is running.
    Searching,
    /// The suffix meets the current target; [`StampGenerator::stamp`] yields a
    /// valid stamp.
    Complete,
}

/// The generation role: configure fields, search, render.
pub struct StampGenerator {
    stamp: Stamp,
    state: GeneratorState,
    settings: SearchSettings,
    provider: Arc<dyn DigestProvider>,
    last_outcome: Option<SearchOutcome>,
}

impl StampGenerator {
    pub(crate) fn from_parts(
        stamp: Stamp,
        settings: SearchSettings,
        provider: Arc<dyn DigestProvider>,
    ) -> Self {
        Self {
            stamp,
            state: GeneratorState::Configuring,
            settings,
            provider,
            last_outcome: None,
        }
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// The current field set.
    pub fn fields(&self) -> &Stamp {
        &self.stamp
    }

    pub fn into_fields(self) -> Stamp {
        self.stamp
    }

    pub fn version(&self) -> Version {
        self.stamp.version
    }

    pub fn bits(&self) -> u32 {
        self.stamp.bits
    }

    pub fn date(&self) -> StampDate {
        self.stamp.date
    }

    pub fn resource(&self) -> Option<&str> {
        self.stamp.resource()
    }

    pub fn extensions(&self) -> &str {
        &self.stamp.extensions
    }

    pub fn salt(&self) -> &str {
        &self.stamp.salt
    }

    pub fn suffix(&self) -> Option<&str> {
        self.stamp.suffix()
    }

    pub fn suffix_limit(&self) -> usize {
        self.settings.suffix_limit
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.settings.algorithm
    }

    /// Statistics from the most recent `find_suffix` call that succeeded.
    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Setters
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_version(&mut self, version: u32) -> Result<()> {
        self.stamp.version = validate_version(version)?;
        self.touch();
        Ok(())
    }

    pub fn set_bits(&mut self, bits: u32) -> Result<()> {
        self.stamp.bits = validate_bits(bits)?;
        self.touch();
        Ok(())
    }

    /// Set the date, rendered with the canonical `%y%m%d%H%M%S` pattern.
    ///
    /// The year must lie between 1970 and 2069, the span a two-digit year
    /// names.
    pub fn set_date(&mut self, when: NaiveDateTime) -> Result<()> {
        self.set_date_with_format(when, None, true)
    }

    /// Set the date with its own pattern.
    ///
    /// Unless `use_default_format` is set, `format` must be a prefix of the
    /// canonical pattern, e.g. `"%y%m%d"`.
    pub fn set_date_with_format(
        &mut self,
        when: NaiveDateTime,
        format: Option<&str>,
        use_default_format: bool,
    ) -> Result<()> {
        let pattern = validate_date_pattern(format, use_default_format)?;
        self.stamp.date = StampDate::new(when, pattern)?;
        self.touch();
        Ok(())
    }

    pub fn set_resource(&mut self, resource: &str) -> Result<()> {
        validate_field_string(Field::Resource, Some(resource))?;
        self.stamp.resource = Some(resource.to_string());
        self.touch();
        Ok(())
    }

    /// Set the extensions field. `None` is equivalent to empty.
    pub fn set_extensions(&mut self, extensions: Option<&str>) -> Result<()> {
        validate_field_string(Field::Extensions, extensions)?;
        self.stamp.extensions = extensions.unwrap_or_default().to_string();
        self.touch();
        Ok(())
    }

    /// Set the salt. `None` is equivalent to empty.
    pub fn set_salt(&mut self, salt: Option<&str>) -> Result<()> {
        validate_field_string(Field::Salt, salt)?;
        self.stamp.salt = salt.unwrap_or_default().to_string();
        self.touch();
        Ok(())
    }

    /// Set the suffix directly. Normally left to [`find_suffix`](Self::find_suffix).
    pub fn set_suffix(&mut self, suffix: Option<&str>) -> Result<()> {
        validate_field_string(Field::Suffix, suffix)?;
        if let Some(s) = suffix {
            validate_suffix_length(s, self.settings.suffix_limit)?;
        }
        self.stamp.suffix = suffix.map(str::to_string);
        self.touch();
        Ok(())
    }

    /// Change the longest suffix the search may try, e.g. to retry after
    /// [`SearchExhausted`](crate::ErrorKind::SearchExhausted).
    pub fn set_suffix_limit(&mut self, limit: usize) {
        self.settings.suffix_limit = limit;
    }

    fn touch(&mut self) {
        self.state = GeneratorState::Configuring;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Search
    // ─────────────────────────────────────────────────────────────────────────

    /// Find a suffix meeting `bits`, running to completion or exhaustion.
    pub fn find_suffix(&mut self) -> Result<&str> {
        let control = self.control();
        self.find_suffix_with(&control)
    }

    /// Like [`find_suffix`](Self::find_suffix), giving up after `timeout`.
    pub fn find_suffix_with_timeout(&mut self, timeout: Duration) -> Result<&str> {
        let control = self.control().with_timeout(timeout);
        self.find_suffix_with(&control)
    }

    /// Find a suffix under caller-supplied stop conditions.
    ///
    /// A no-op when the generator is already complete. On failure the
    /// previous suffix is left in place and the generator stays configurable.
    pub fn find_suffix_with(&mut self, control: &SearchControl) -> Result<&str> {
        if self.state == GeneratorState::Complete && self.stamp.suffix.is_some() {
            return Ok(self.complete_suffix());
        }

        self.state = GeneratorState::Searching;
        let searcher = Searcher::new(
            self.provider.as_ref(),
            self.settings.algorithm,
            self.settings.suffix_limit,
        );
        let result = searcher.find_suffix(&self.stamp, self.stamp.bits, control);
        self.apply(result)
    }

    /// Run the search on a blocking worker thread of the tokio runtime.
    ///
    /// Dropping the returned future does not stop the worker; pass a
    /// [`CancellationToken`](hashcash_search::CancellationToken) in `control`
    /// for that. A dropped future leaves the generator configurable.
    pub async fn find_suffix_async(&mut self, control: SearchControl) -> Result<&str> {
        if self.state == GeneratorState::Complete && self.stamp.suffix.is_some() {
            return Ok(self.complete_suffix());
        }

        // The state only moves once the worker reports back; the caller's
        // borrow hides it in the meantime.
        let stamp = self.stamp.clone();
        let provider = Arc::clone(&self.provider);
        let algorithm = self.settings.algorithm;
        let limit = self.settings.suffix_limit;

        let joined = tokio::task::spawn_blocking(move || {
            Searcher::new(provider.as_ref(), algorithm, limit).find_suffix(
                &stamp,
                stamp.bits,
                &control,
            )
        })
        .await;

        let result = match joined {
            Ok(result) => result,
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            Err(_) => Err(SearchError::Cancelled { probes: 0 }),
        };
        self.apply(result)
    }

    fn control(&self) -> SearchControl {
        SearchControl::unbounded().with_check_interval(self.settings.check_interval)
    }

    fn complete_suffix(&mut self) -> &str {
        if let Some(outcome) = self.last_outcome.as_mut() {
            outcome.probes = 0;
            outcome.retained = true;
        }
        trace!("stamp already complete, keeping suffix");
        self.stamp.suffix.as_deref().unwrap_or_default()
    }

    fn apply(&mut self, result: hashcash_search::Result<SearchOutcome>) -> Result<&str> {
        match result {
            Ok(outcome) => {
                debug!(
                    suffix = %outcome.suffix,
                    value = outcome.value,
                    probes = outcome.probes,
                    retained = outcome.retained,
                    "stamp complete"
                );
                self.state = GeneratorState::Complete;
                let suffix = self.stamp.suffix.insert(outcome.suffix.clone());
                self.last_outcome = Some(outcome);
                Ok(suffix.as_str())
            }
            Err(e) => {
                self.state = GeneratorState::Configuring;
                Err(e.into())
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Output
    // ─────────────────────────────────────────────────────────────────────────

    /// Render the stamp. Does not imply validity; call
    /// [`find_suffix`](Self::find_suffix) first.
    pub fn stamp(&self) -> Result<String> {
        Ok(render(&self.stamp)?)
    }

    /// Actual value of the stamp as currently rendered.
    pub fn value(&self) -> Result<u32> {
        stamp_value(self.provider.as_ref(), self.settings.algorithm, &self.stamp)
    }

    /// Whether the actual value reaches `bits`.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.value()? >= self.stamp.bits)
    }

    /// Hand the fields over for verification without re-parsing.
    pub fn into_parsed(self) -> ParsedStamp {
        ParsedStamp::from_parts(self.stamp, self.settings, self.provider)
    }
}

impl std::fmt::Debug for StampGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StampGenerator")
            .field("stamp", &self.stamp)
            .field("state", &self.state)
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

/// Search and digest settings carried from the engine into each role.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchSettings {
    pub suffix_limit: usize,
    pub algorithm: DigestAlgorithm,
    pub check_interval: u64,
}

/// Digest the rendered stamp and count its leading zero bits.
pub(crate) fn stamp_value(
    provider: &dyn DigestProvider,
    algorithm: DigestAlgorithm,
    stamp: &Stamp,
) -> Result<u32> {
    let text = render(stamp)?;
    let digest = checked_digest(provider, algorithm, text.as_bytes())?;
    Ok(leading_zero_bits(&digest))
}
