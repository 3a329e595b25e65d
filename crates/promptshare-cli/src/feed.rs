//! Feed Controller
//!
//! Fetches the whole prompt collection once and filters it locally.
//! Keystrokes are debounced; tag clicks and the URL `tag` parameter
//! filter immediately.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

use promptshare::{filter_prompts, visible_prompts, Prompt};

use crate::api::PromptApi;
use crate::debounce::{Debouncer, SEARCH_DEBOUNCE};

/// State written by filter executions, including debounced ones
#[derive(Debug, Default)]
struct FilteredView {
    posts: Vec<Prompt>,
    runs: usize,
    /// Bumped for every filter request and every reset; only the
    /// latest request may write its result
    generation: u64,
}

pub struct FeedController<A: PromptApi + ?Sized> {
    api: Arc<A>,
    /// Snapshot the debounced filter is bound to
    all_posts: Arc<Vec<Prompt>>,
    filtered: Arc<Mutex<FilteredView>>,
    search_text: String,
    tag_param: Option<String>,
    debouncer: Debouncer,
    /// Search text of the most recently scheduled debounced filter
    scheduled_search: Option<String>,
}

impl<A: PromptApi + ?Sized> FeedController<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self::with_debounce(api, SEARCH_DEBOUNCE)
    }

    pub fn with_debounce(api: Arc<A>, window: Duration) -> Self {
        Self {
            api,
            all_posts: Arc::new(Vec::new()),
            filtered: Arc::new(Mutex::new(FilteredView::default())),
            search_text: String::new(),
            tag_param: None,
            debouncer: Debouncer::new(window),
            scheduled_search: None,
        }
    }

    /// Fetch the collection once and apply the URL tag, if any.
    /// Fetch failures are logged and leave the feed empty.
    pub async fn mount(&mut self, tag_param: Option<String>) {
        self.set_tag_param(tag_param);

        match self.api.list_prompts().await {
            Ok(posts) => {
                tracing::debug!("Fetched {} prompts for the feed", posts.len());
                self.set_posts(posts);
            }
            Err(e) => tracing::warn!("Failed to fetch prompts: {}", e),
        }
    }

    /// Replace the collection. Both the full and the filtered view start
    /// out as the new collection.
    pub fn set_posts(&mut self, posts: Vec<Prompt>) {
        self.all_posts = Arc::new(posts);
        {
            let mut view = self.filtered.lock();
            view.posts = self.all_posts.as_ref().clone();
            view.generation += 1;
        }
        self.rebind_search();
        self.sync_tag_param();
    }

    /// The URL's `tag` parameter changed
    pub fn set_tag_param(&mut self, tag_param: Option<String>) {
        self.tag_param = tag_param;
        self.sync_tag_param();
    }

    /// Search input changed; filtering waits for the debounce window
    pub fn on_search_change(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.search_text = value.clone();
        self.schedule_filter(value);
    }

    /// A tag on a card was clicked; filter right away
    pub fn on_tag_click(&mut self, tag: &str) {
        self.search_text = tag.to_string();
        self.filter_now(tag);
    }

    /// Wait for a pending debounced filter to run
    pub async fn settle(&mut self) {
        self.debouncer.settle().await;
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn all_posts(&self) -> &[Prompt] {
        &self.all_posts
    }

    pub fn filtered_posts(&self) -> Vec<Prompt> {
        self.filtered.lock().posts.clone()
    }

    /// What the feed shows: the filtered view, or everything when the
    /// filter matched nothing
    pub fn rendered(&self) -> Vec<Prompt> {
        let filtered = self.filtered.lock();
        visible_prompts(&self.all_posts, &filtered.posts).to_vec()
    }

    /// Number of filter results applied so far
    #[cfg(test)]
    fn filter_runs(&self) -> usize {
        self.filtered.lock().runs
    }

    #[cfg(test)]
    fn is_search_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    fn sync_tag_param(&mut self) {
        if self.all_posts.is_empty() {
            return;
        }
        if let Some(tag) = self.tag_param.clone().filter(|t| !t.is_empty()) {
            self.search_text = tag.clone();
            self.filter_now(&tag);
        }
    }

    /// Immediate filters supersede any keystroke still waiting
    fn filter_now(&mut self, search: &str) {
        if self.debouncer.cancel() {
            tracing::debug!("Dropped pending search in favour of '{}'", search);
        }
        let generation = next_generation(&self.filtered);
        run_filter(&self.filtered, &self.all_posts, search, generation);
    }

    fn schedule_filter(&mut self, search: String) {
        let posts = Arc::clone(&self.all_posts);
        let filtered = Arc::clone(&self.filtered);
        let generation = next_generation(&self.filtered);
        self.scheduled_search = Some(search.clone());
        self.debouncer
            .schedule(move || run_filter(&filtered, &posts, &search, generation));
    }

    /// Re-derive the debounced filter over the current snapshot so a
    /// pending search never runs against stale data
    fn rebind_search(&mut self) {
        if !self.debouncer.is_pending() {
            return;
        }
        if let Some(search) = self.scheduled_search.clone() {
            self.schedule_filter(search);
        }
    }
}

fn next_generation(filtered: &Mutex<FilteredView>) -> u64 {
    let mut view = filtered.lock();
    view.generation += 1;
    view.generation
}

/// Apply a filter result unless a newer request has superseded it. A
/// debounced job that already started cannot be aborted, so it may
/// finish after an immediate filter.
fn run_filter(filtered: &Mutex<FilteredView>, posts: &[Prompt], search: &str, generation: u64) {
    let result = filter_prompts(posts, search);

    let mut view = filtered.lock();
    if view.generation != generation {
        tracing::debug!("Discarded superseded search '{}'", search);
        return;
    }
    tracing::debug!("Search '{}' matched {} prompts", search, result.len());
    view.posts = result;
    view.runs += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{post, FakeApi};

    fn dataset() -> Vec<Prompt> {
        vec![
            post("alice", "hello world", "greeting"),
            post("bob", "goodbye", "farewell"),
        ]
    }

    async fn mounted(tag: Option<&str>) -> (Arc<FakeApi>, FeedController<FakeApi>) {
        let api = Arc::new(FakeApi::with_prompts(dataset()));
        let mut feed = FeedController::new(api.clone());
        feed.mount(tag.map(str::to_string)).await;
        (api, feed)
    }

    #[tokio::test(start_paused = true)]
    async fn test_mount_fetches_once_and_shows_everything() {
        let (api, feed) = mounted(None).await;

        assert_eq!(api.calls(), vec!["list_prompts".to_string()]);
        let usernames: Vec<&str> = feed
            .all_posts()
            .iter()
            .map(|p| p.creator.username.as_str())
            .collect();
        assert_eq!(usernames, vec!["alice", "bob"]);
        assert_eq!(feed.filtered_posts(), feed.all_posts());
        assert_eq!(feed.rendered().len(), 2);
        assert_eq!(feed.search_text(), "");
        assert_eq!(feed.filter_runs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_filters_after_quiet_window() {
        let (api, mut feed) = mounted(None).await;

        feed.on_search_change("alice");
        assert_eq!(feed.search_text(), "alice");
        assert_eq!(feed.rendered().len(), 2);

        feed.settle().await;
        let rendered = feed.rendered();
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].creator.username, "alice");
        // Filtering never goes back to the network
        assert_eq!(api.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_keystroke_burst_filters_once_with_last_value() {
        let (_api, mut feed) = mounted(None).await;

        for partial in ["f", "fa", "far", "fare"] {
            feed.on_search_change(partial);
            tokio::time::sleep(Duration::from_millis(120)).await;
        }
        assert_eq!(feed.filter_runs(), 0);

        tokio::time::sleep(Duration::from_millis(379)).await;
        assert_eq!(feed.filter_runs(), 0);

        feed.settle().await;
        assert_eq!(feed.filter_runs(), 1);
        assert_eq!(feed.filtered_posts()[0].tag, "farewell");
        assert_eq!(feed.filtered_posts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_match_renders_everything() {
        let (_api, mut feed) = mounted(None).await;

        feed.on_search_change("zzz");
        feed.settle().await;

        assert!(feed.filtered_posts().is_empty());
        assert_eq!(feed.rendered().len(), 2);
        assert_eq!(feed.search_text(), "zzz");
    }

    #[tokio::test(start_paused = true)]
    async fn test_url_tag_filters_immediately_on_load() {
        let (_api, feed) = mounted(Some("greeting")).await;

        assert_eq!(feed.search_text(), "greeting");
        assert_eq!(feed.filter_runs(), 1);
        assert!(!feed.is_search_pending());
        let filtered = feed.filtered_posts();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].tag, "greeting");
    }

    #[tokio::test(start_paused = true)]
    async fn test_url_tag_waits_for_posts() {
        let api = Arc::new(FakeApi::with_prompts(Vec::new()));
        let mut feed = FeedController::new(api);
        feed.mount(Some("greeting".to_string())).await;

        assert_eq!(feed.search_text(), "");
        assert_eq!(feed.filter_runs(), 0);

        feed.set_posts(dataset());
        assert_eq!(feed.search_text(), "greeting");
        assert_eq!(feed.filtered_posts().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_url_tag_change_refilters() {
        let (_api, mut feed) = mounted(None).await;

        feed.set_tag_param(Some("farewell".to_string()));
        assert_eq!(feed.search_text(), "farewell");
        assert_eq!(feed.filtered_posts()[0].creator.username, "bob");

        feed.set_tag_param(None);
        assert_eq!(feed.search_text(), "farewell");
    }

    #[tokio::test(start_paused = true)]
    async fn test_tag_click_bypasses_and_cancels_debounce() {
        let (_api, mut feed) = mounted(None).await;

        feed.on_search_change("bob");
        feed.on_tag_click("greeting");

        assert_eq!(feed.search_text(), "greeting");
        assert_eq!(feed.filter_runs(), 1);
        assert!(!feed.is_search_pending());

        tokio::time::sleep(SEARCH_DEBOUNCE * 2).await;
        assert_eq!(feed.filter_runs(), 1);
        assert_eq!(feed.filtered_posts()[0].tag, "greeting");
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_search_result_is_discarded() {
        let (_api, mut feed) = mounted(None).await;

        // A debounced run that started before the tag click finishes after it
        let started = next_generation(&feed.filtered);
        feed.on_tag_click("greeting");
        run_filter(&feed.filtered, &dataset(), "bob", started);

        assert_eq!(feed.filter_runs(), 1);
        let filtered = feed.filtered_posts();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].tag, "greeting");
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_started_before_reload_cannot_clobber_it() {
        let (_api, mut feed) = mounted(None).await;

        let started = next_generation(&feed.filtered);
        feed.set_posts(dataset());
        run_filter(&feed.filtered, &dataset(), "zzz", started);

        assert_eq!(feed.filtered_posts().len(), 2);
        assert_eq!(feed.filter_runs(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pending_search_rebinds_to_new_posts() {
        let api = Arc::new(FakeApi::with_prompts(Vec::new()));
        let mut feed = FeedController::new(api);
        feed.mount(None).await;

        feed.on_search_change("alice");
        feed.set_posts(dataset());
        feed.settle().await;

        assert_eq!(feed.filter_runs(), 1);
        let filtered = feed.filtered_posts();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].creator.username, "alice");
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_failure_leaves_feed_empty() {
        let api = Arc::new(FakeApi::with_prompts(dataset()));
        api.fail_requests(true);
        let mut feed = FeedController::new(api);
        feed.mount(Some("greeting".to_string())).await;

        assert!(feed.all_posts().is_empty());
        assert!(feed.rendered().is_empty());
        assert_eq!(feed.search_text(), "");
    }
}
