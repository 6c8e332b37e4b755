//! Person record providers.
//!
//! A provider hands out one raw [`PersonRecord`] per call. The directory treats
//! it as an unreliable, unauthenticated source: every call may fail on its own
//! and nothing here retries.

mod random_user;
mod record;

use std::future::Future;

use thiserror::Error;

pub use random_user::{DEFAULT_ENDPOINT, DEFAULT_NATIONALITIES, RandomUserProvider};
pub use record::{DateOfBirth, Location, Login, PersonName, PersonRecord, Picture, Postcode, Street};

pub type ProviderResult<T> = Result<T, ProviderError>;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("person request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("provider returned no person records")]
    EmptyResults,
    #[error("invalid provider endpoint '{0}'")]
    InvalidEndpoint(String),
}

/// Source of raw person records.
pub trait PersonProvider {
    /// Fetch a single record. Calls are independent of one another.
    fn fetch_person(&self) -> impl Future<Output = ProviderResult<PersonRecord>>;
}
