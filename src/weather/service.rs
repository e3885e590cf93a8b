//! Weather Fetch Dispatch
//!
//! Fetches are fire-and-forget relative to the frame loop: `request`
//! spawns the lookup and returns immediately, and the frame-loop side
//! polls for completed outcomes between ticks. Every request carries a
//! monotonic generation; responses from any generation but the newest
//! are discarded, so a slow fetch can never clobber the state of a
//! session started after it.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::weather::observation::WeatherObservation;
use crate::weather::provider::{
    Geocoder, WeatherError, WeatherProvider, WeatherQuery, GENERIC_LOCATION_LABEL,
};

/// Buffered outcomes between the fetch tasks and the frame loop.
const OUTCOME_CHANNEL_CAPACITY: usize = 16;

/// A completed weather setup, ready to configure a session.
#[derive(Clone, Debug)]
pub struct WeatherUpdate {
    /// Generation of the request that produced this update.
    pub generation: u64,
    /// Human-readable location label (leaderboard key).
    pub label: String,
    /// The validated observation.
    pub observation: WeatherObservation,
}

/// Terminal result of one dispatched fetch.
#[derive(Clone, Debug)]
pub enum FetchOutcome {
    /// Lookup succeeded.
    Ready(WeatherUpdate),
    /// Lookup failed; prior game state is left untouched and the error
    /// text invites a retry.
    Failed {
        /// Generation of the failed request.
        generation: u64,
        /// What went wrong.
        error: WeatherError,
    },
}

impl FetchOutcome {
    /// Generation of the request that produced this outcome.
    pub fn generation(&self) -> u64 {
        match self {
            FetchOutcome::Ready(update) => update.generation,
            FetchOutcome::Failed { generation, .. } => *generation,
        }
    }
}

/// Dispatches provider fetches and hands completed outcomes back to
/// the single frame-processing thread.
pub struct WeatherService<P, G> {
    provider: Arc<P>,
    geocoder: Arc<G>,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
    latest_generation: u64,
}

impl<P, G> WeatherService<P, G>
where
    P: WeatherProvider + 'static,
    G: Geocoder + 'static,
{
    /// Create a service over a provider and a geocoder.
    pub fn new(provider: P, geocoder: G) -> Self {
        let (tx, rx) = mpsc::channel(OUTCOME_CHANNEL_CAPACITY);
        Self {
            provider: Arc::new(provider),
            geocoder: Arc::new(geocoder),
            tx,
            rx,
            latest_generation: 0,
        }
    }

    /// Dispatch a lookup. Returns the generation issued to it.
    ///
    /// Input validation happens here, before anything is spawned: an
    /// empty city query is rejected without touching the provider.
    pub fn request(&mut self, query: WeatherQuery) -> Result<u64, WeatherError> {
        query.validate()?;

        self.latest_generation += 1;
        let generation = self.latest_generation;

        let provider = Arc::clone(&self.provider);
        let geocoder = Arc::clone(&self.geocoder);
        let tx = self.tx.clone();

        tokio::spawn(async move {
            let outcome = resolve(provider, geocoder, query, generation).await;
            // Receiver gone means the host shut down; nothing to do.
            let _ = tx.send(outcome).await;
        });

        debug!(generation, "weather fetch dispatched");
        Ok(generation)
    }

    /// Non-blocking poll, called between frames.
    ///
    /// Drains everything queued and returns the outcome of the newest
    /// generation, if it has arrived. Stale outcomes are dropped.
    pub fn poll(&mut self) -> Option<FetchOutcome> {
        let mut latest = None;
        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.generation() == self.latest_generation {
                latest = Some(outcome);
            } else {
                debug!(
                    generation = outcome.generation(),
                    latest = self.latest_generation,
                    "discarding stale weather outcome"
                );
            }
        }
        latest
    }

    /// Await the outcome of the newest generation, skipping stale ones.
    ///
    /// Returns `None` only if the service is torn down mid-wait.
    pub async fn next(&mut self) -> Option<FetchOutcome> {
        while let Some(outcome) = self.rx.recv().await {
            if outcome.generation() == self.latest_generation {
                return Some(outcome);
            }
            debug!(
                generation = outcome.generation(),
                latest = self.latest_generation,
                "discarding stale weather outcome"
            );
        }
        None
    }
}

/// Run one lookup to completion: fetch, validate, resolve the label.
async fn resolve<P, G>(
    provider: Arc<P>,
    geocoder: Arc<G>,
    query: WeatherQuery,
    generation: u64,
) -> FetchOutcome
where
    P: WeatherProvider,
    G: Geocoder,
{
    let response = match provider.fetch(query.clone()).await {
        Ok(response) => response,
        Err(error) => return FetchOutcome::Failed { generation, error },
    };

    let observation = match WeatherObservation::from_response(&response) {
        Ok(observation) => observation,
        Err(error) => return FetchOutcome::Failed { generation, error },
    };

    let label = match &query {
        WeatherQuery::City(name) => name.trim().to_string(),
        WeatherQuery::Coords { lat, lon } => match geocoder.reverse(*lat, *lon).await {
            Ok(label) => label,
            Err(error) => {
                // Cosmetic degradation only; the session proceeds
                warn!(%error, "reverse geocode degraded to generic label");
                GENERIC_LOCATION_LABEL.to_string()
            }
        },
    };

    FetchOutcome::Ready(WeatherUpdate {
        generation,
        label,
        observation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::observation::ProviderResponse;
    use crate::weather::provider::{FixtureGeocoder, FixtureProvider};
    use std::time::Duration;

    /// Provider that delays city lookups matching a marker name, so
    /// tests can force out-of-order completion.
    struct SlowCityProvider {
        inner: FixtureProvider,
        slow_city: String,
        delay: Duration,
    }

    impl WeatherProvider for SlowCityProvider {
        async fn fetch(&self, query: WeatherQuery) -> Result<ProviderResponse, WeatherError> {
            if let WeatherQuery::City(name) = &query {
                if name.eq_ignore_ascii_case(&self.slow_city) {
                    tokio::time::sleep(self.delay).await;
                }
            }
            self.inner.fetch(query).await
        }
    }

    fn fixture() -> FixtureProvider {
        FixtureProvider::new()
            .with_city("London", FixtureProvider::response("Rain", 11.0, 80.0, 14))
            .with_city("Oslo", FixtureProvider::response("Snow", -4.0, 85.0, 15))
            .with_coords(FixtureProvider::response("Clear", 24.0, 40.0, 12))
    }

    #[tokio::test]
    async fn test_city_fetch_ready() {
        let mut service = WeatherService::new(fixture(), FixtureGeocoder::failing());
        service
            .request(WeatherQuery::City("London".to_string()))
            .unwrap();

        match service.next().await.unwrap() {
            FetchOutcome::Ready(update) => {
                assert_eq!(update.label, "London");
                assert_eq!(update.observation.condition, "Rain");
            }
            other => panic!("expected ready outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_city_blocked_before_dispatch() {
        let mut service = WeatherService::new(fixture(), FixtureGeocoder::failing());
        assert_eq!(
            service.request(WeatherQuery::City("  ".to_string())),
            Err(WeatherError::EmptyCity)
        );
        assert!(service.poll().is_none());
    }

    #[tokio::test]
    async fn test_unknown_city_fails_with_not_found() {
        let mut service = WeatherService::new(fixture(), FixtureGeocoder::failing());
        service
            .request(WeatherQuery::City("Atlantis".to_string()))
            .unwrap();

        match service.next().await.unwrap() {
            FetchOutcome::Failed { error, .. } => assert_eq!(error, WeatherError::NotFound),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_coords_use_geocoded_label() {
        let mut service = WeatherService::new(fixture(), FixtureGeocoder::resolving("Lisbon"));
        service
            .request(WeatherQuery::Coords { lat: 38.7, lon: -9.1 })
            .unwrap();

        match service.next().await.unwrap() {
            FetchOutcome::Ready(update) => assert_eq!(update.label, "Lisbon"),
            other => panic!("expected ready outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_geocode_failure_degrades_label() {
        let mut service = WeatherService::new(fixture(), FixtureGeocoder::failing());
        service
            .request(WeatherQuery::Coords { lat: 38.7, lon: -9.1 })
            .unwrap();

        match service.next().await.unwrap() {
            FetchOutcome::Ready(update) => {
                assert_eq!(update.label, GENERIC_LOCATION_LABEL);
                assert_eq!(update.observation.condition, "Clear");
            }
            other => panic!("expected ready outcome, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_stale_generation_discarded() {
        let provider = SlowCityProvider {
            inner: fixture(),
            slow_city: "London".to_string(),
            delay: Duration::from_millis(50),
        };
        let mut service = WeatherService::new(provider, FixtureGeocoder::failing());

        // First request is slow, second supersedes it immediately
        service
            .request(WeatherQuery::City("London".to_string()))
            .unwrap();
        let latest = service
            .request(WeatherQuery::City("Oslo".to_string()))
            .unwrap();

        let outcome = service.next().await.unwrap();
        assert_eq!(outcome.generation(), latest);
        match outcome {
            FetchOutcome::Ready(update) => assert_eq!(update.label, "Oslo"),
            other => panic!("expected ready outcome, got {other:?}"),
        }

        // Let the slow fetch land, then confirm it is dropped as stale
        tokio::time::sleep(Duration::from_millis(80)).await;
        assert!(service.poll().is_none());
    }
}
