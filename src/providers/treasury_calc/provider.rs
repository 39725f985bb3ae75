use std::num::NonZeroU32;

use async_trait::async_trait;
use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use nonzero_ext::nonzero;
use reqwest::Client;
use tracing::debug;

use crate::{
    models::{query::RedemptionQuery, record::RedemptionRecord},
    providers::{
        BondCalculator, ProviderError, ProviderInitError,
        treasury_calc::{extract::extract_record, params::construct_form},
    },
};

/// TreasuryDirect's savings bond calculator endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://www.treasurydirect.gov/BC/SBCPrice";

/// [`BondCalculator`] backed by the TreasuryDirect web calculator.
///
/// Requests are strictly sequential and paced by a local rate limiter
/// (default 2 requests/second); the calculator's own rate-limiting behavior
/// is undocumented.
pub struct TreasuryCalculator {
    client: Client,
    endpoint: String,
    limiter: DefaultDirectRateLimiter,
}

impl TreasuryCalculator {
    pub fn new() -> Result<Self, ProviderInitError> {
        Self::with_options(DEFAULT_ENDPOINT, nonzero!(2u32))
    }

    /// Creates a provider pointed at a non-default endpoint, e.g. a local
    /// test server.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, ProviderInitError> {
        Self::with_options(endpoint, nonzero!(2u32))
    }

    /// Full control over the endpoint and the outbound request pacing.
    pub fn with_options(
        endpoint: &str,
        pace_per_sec: NonZeroU32,
    ) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            limiter: RateLimiter::direct(Quota::per_second(pace_per_sec)),
        })
    }
}

#[async_trait]
impl BondCalculator for TreasuryCalculator {
    async fn redemption_value(
        &self,
        query: &RedemptionQuery,
    ) -> Result<RedemptionRecord, ProviderError> {
        self.limiter.until_ready().await;

        debug!(
            serial = %query.serial_number,
            redemption = %query.redemption_date,
            "querying calculator"
        );

        let form = construct_form(query);
        let response = self.client.post(&self.endpoint).form(&form).send().await?;

        if !response.status().is_success() {
            return Err(ProviderError::Api(format!(
                "calculator returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(extract_record(&body)?)
    }
}
