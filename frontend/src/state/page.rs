use crate::api::ApiError;
use leptos::*;
use std::future::Future;

/// Identifies one issued fetch. Only the latest token may write results.
pub type RequestToken = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageState<T> {
    load: LoadState<T>,
    latest: RequestToken,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self {
            load: LoadState::Idle,
            latest: 0,
        }
    }
}

impl<T> PageState<T> {
    /// State of a freshly mounted page, before its first fetch resolves.
    pub fn loading() -> Self {
        Self {
            load: LoadState::Loading,
            latest: 0,
        }
    }

    /// Enters `Loading` and issues a new token; any earlier in-flight
    /// request is superseded.
    pub fn begin_load(&mut self) -> RequestToken {
        self.latest = self.latest.wrapping_add(1);
        self.load = LoadState::Loading;
        self.latest
    }

    /// Applies a fetch result. Returns `false` (and changes nothing) when
    /// `token` is stale.
    pub fn resolve(
        &mut self,
        token: RequestToken,
        result: Result<T, ApiError>,
        fallback: &str,
    ) -> bool {
        if token != self.latest {
            return false;
        }
        self.load = match result {
            Ok(data) => LoadState::Ready(data),
            Err(err) => LoadState::Failed(err.user_message(fallback)),
        };
        true
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.load
    }

    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    pub fn data(&self) -> Option<&T> {
        match &self.load {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.load {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load, LoadState::Loading)
    }
}

/// Runs one load cycle for a page: issue a token, await `fetch`, and apply
/// the result only if no newer load was issued meanwhile.
pub async fn run_load<T, Fut>(page: RwSignal<PageState<T>>, fallback: &str, fetch: Fut) -> bool
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>>,
{
    let Some(token) = page.try_update(|state| state.begin_load()) else {
        return false;
    };
    let result = fetch.await;
    match &result {
        Err(err) if err.is_no_response() => log::warn!("load #{} got no response: {}", token, err),
        Err(err) => log::error!("load #{} failed: {}", token, err),
        Ok(_) => {}
    }
    let applied = page
        .try_update(|state| state.resolve(token, result, fallback))
        .unwrap_or(false);
    if !applied {
        match page.try_with_untracked(PageState::latest_token) {
            Some(latest) => log::debug!("discarded load #{}, superseded by #{}", token, latest),
            None => log::debug!("page disposed before load #{} resolved", token),
        }
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: &str = "Failed to load employees";

    #[test]
    fn mounted_page_starts_loading() {
        let page = PageState::<Vec<u8>>::loading();
        assert!(page.is_loading());
        assert_eq!(PageState::<Vec<u8>>::default().state(), &LoadState::Idle);
    }

    #[test]
    fn ready_replaces_previous_data() {
        let mut page = PageState::default();
        let first = page.begin_load();
        assert!(page.resolve(first, Ok(vec![1, 2]), FALLBACK));
        let second = page.begin_load();
        assert!(page.data().is_none(), "loading hides prior data");
        assert!(page.resolve(second, Ok(vec![3]), FALLBACK));
        assert_eq!(page.data(), Some(&vec![3]));
    }

    #[test]
    fn failure_discards_data_and_keeps_detail() {
        let mut page = PageState::default();
        let token = page.begin_load();
        page.resolve(token, Ok(vec![1]), FALLBACK);
        let token = page.begin_load();
        page.resolve(token, Err(ApiError::server(500, "DB down")), FALLBACK);
        assert_eq!(page.error(), Some("DB down"));
        assert!(page.data().is_none());
    }

    #[test]
    fn failure_without_response_uses_fallback() {
        let mut page: PageState<Vec<u8>> = PageState::default();
        let token = page.begin_load();
        page.resolve(token, Err(ApiError::Network("offline".into())), FALLBACK);
        assert_eq!(page.error(), Some(FALLBACK));
    }

    #[test]
    fn stale_token_is_ignored() {
        let mut page = PageState::default();
        let older = page.begin_load();
        let newer = page.begin_load();
        assert!(page.resolve(newer, Ok(vec![2]), FALLBACK));
        assert!(!page.resolve(older, Ok(vec![1]), FALLBACK));
        assert_eq!(page.data(), Some(&vec![2]));

        let older_error = page.begin_load() - 1;
        assert!(!page.resolve(older_error, Err(ApiError::Timeout), FALLBACK));
        assert!(page.is_loading());
    }

    #[test]
    fn tokens_increase_monotonically() {
        let mut page: PageState<()> = PageState::default();
        let a = page.begin_load();
        let b = page.begin_load();
        assert!(b > a);
        assert_eq!(page.latest_token(), b);
    }
}
