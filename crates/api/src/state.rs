//! Per-screen collection state: loading / data / error.

use secrecy::SecretString;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::Resource;

/// Three-way fetch state for one screen's collection.
///
/// Stale-but-available: a failed refresh records the error but keeps the
/// data from the last successful fetch.
#[derive(Debug, Clone)]
pub struct CollectionState<T> {
    data: Option<Vec<T>>,
    loading: bool,
    error: Option<String>,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

impl<T> CollectionState<T> {
    pub fn data(&self) -> Option<&[T]> {
        self.data.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Handle for one in-flight load. Settling with a superseded ticket is a
/// no-op, so a slow early response can never clobber a later one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    seq: u64,
}

/// Owns a [`CollectionState`] and drives it through load/refresh cycles.
///
/// One loader per screen; dropped when the screen unmounts.
pub struct CollectionLoader<R> {
    api: ApiClient,
    state: CollectionState<R>,
    seq: u64,
}

impl<R: Resource> CollectionLoader<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: CollectionState::default(),
            seq: 0,
        }
    }

    pub fn state(&self) -> &CollectionState<R> {
        &self.state
    }

    /// Mark a load as started and hand out its ticket. Any ticket issued
    /// earlier becomes stale immediately.
    pub fn begin(&mut self) -> LoadTicket {
        self.seq += 1;
        self.state.loading = true;
        LoadTicket { seq: self.seq }
    }

    /// Apply a fetch outcome. Returns false (and changes nothing) when the
    /// ticket has been superseded by a newer `begin`.
    pub fn settle(&mut self, ticket: LoadTicket, result: Result<Vec<R>, ApiError>) -> bool {
        if ticket.seq != self.seq {
            debug!(
                stale = ticket.seq,
                current = self.seq,
                "discarding superseded response"
            );
            return false;
        }
        self.state.loading = false;
        match result {
            Ok(items) => {
                self.state.data = Some(items);
                self.state.error = None;
            }
            Err(e) => {
                // Keep the last good data; only the error changes.
                self.state.error = Some(e.message());
            }
        }
        true
    }

    /// Fetch the collection and settle the state.
    pub async fn load(&mut self, token: &SecretString) -> bool {
        let ticket = self.begin();
        let result = self.api.list::<R>(token).await;
        self.settle(ticket, result)
    }

    /// Re-run the fetch; pull-to-refresh and on-focus events land here.
    pub async fn refresh(&mut self, token: &SecretString) -> bool {
        self.load(token).await
    }
}

#[cfg(test)]
mod tests {
    use models::Client;

    use super::*;
    use crate::config::ApiConfig;

    fn loader() -> CollectionLoader<Client> {
        let config = ApiConfig::new(url::Url::parse("http://localhost:1").unwrap());
        CollectionLoader::new(ApiClient::new(&config).unwrap())
    }

    fn client(id: i64, name: &str) -> Client {
        Client {
            id,
            name: name.to_string(),
            email: None,
            phone: None,
            address: None,
            postal_code: None,
            city: None,
            notes: None,
        }
    }

    #[test]
    fn initial_state_is_unsettled() {
        let loader = loader();
        assert!(loader.state().data().is_none());
        assert!(!loader.state().loading());
        assert!(loader.state().error().is_none());
    }

    #[test]
    fn successful_settle_stores_data_and_clears_error() {
        let mut loader = loader();
        let t = loader.begin();
        assert!(loader.state().loading());

        assert!(loader.settle(t, Ok(vec![client(1, "Dupont SARL")])));
        assert!(!loader.state().loading());
        assert_eq!(loader.state().data().unwrap().len(), 1);
        assert!(loader.state().error().is_none());
    }

    #[test]
    fn failed_refresh_keeps_stale_data() {
        let mut loader = loader();
        let t = loader.begin();
        loader.settle(t, Ok(vec![client(1, "Dupont SARL")]));

        let t = loader.begin();
        let err = ApiError::Http {
            status: 401,
            message: "HTTP 401".to_string(),
        };
        assert!(loader.settle(t, Err(err)));
        assert!(!loader.state().loading());
        assert_eq!(loader.state().error(), Some("HTTP 401"));
        // The previous data survives the failure.
        assert_eq!(loader.state().data().unwrap()[0].name, "Dupont SARL");
    }

    #[test]
    fn superseded_ticket_is_discarded() {
        let mut loader = loader();
        let slow = loader.begin();
        let fast = loader.begin();

        assert!(loader.settle(fast, Ok(vec![client(2, "Martin")])));
        // The slow first response arrives late and must not clobber.
        assert!(!loader.settle(slow, Ok(vec![client(1, "Dupont SARL")])));
        assert_eq!(loader.state().data().unwrap()[0].name, "Martin");
    }

    #[test]
    fn stale_settle_does_not_clear_loading_flag() {
        let mut loader = loader();
        let slow = loader.begin();
        let _fast = loader.begin();

        loader.settle(slow, Ok(vec![]));
        // The newer request is still in flight.
        assert!(loader.state().loading());
    }
}
