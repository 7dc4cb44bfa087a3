//! Storefront State Management
//!
//! This module manages the application state: the immutable catalog, the
//! per-visitor sessions and the widget asset files. Both the REST and the MCP
//! handlers go through the operations defined here.

use super::models::{SessionView, StorefrontSession, Tab};
use crate::{
    cart::{
        ledger::{self, format_item_summary},
        models::{Cart, CartView},
    },
    catalog::{
        models::{CategoryFilter, ProductId},
        Catalog,
    },
    config::ServerConfig,
    error::{Result, StorefrontError},
};
use dashmap::DashMap;
use std::{
    io,
    path::{Path, PathBuf},
    sync::Arc,
};
use tracing::{debug, info};
use uuid::Uuid;

/// File name of the widget bundle
pub const WIDGET_HTML_FILE: &str = "storefront.html";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state containing the catalog, sessions and asset information
pub struct AppState {
    pub catalog: Catalog,

    /// In-memory storage for sessions, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub sessions: DashMap<String, StorefrontSession>,

    /// Path to the directory containing HTML assets.
    pub assets_dir: PathBuf,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the provided `session_id` or creates a new UUID string when `None`.
pub fn get_or_create_session_id(session_id: Option<String>) -> String {
    session_id
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

impl AppState {
    /// Creates a new AppState with the built-in catalog and locates the assets directory
    pub fn new() -> Self {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::with_assets_dir(Self::locate_assets_directory(&current_dir))
    }

    pub fn with_assets_dir(assets_dir: PathBuf) -> Self {
        info!(assets_dir = %assets_dir.display(), "using assets directory");
        Self {
            catalog: Catalog::builtin(),
            sessions: DashMap::new(),
            assets_dir,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        match &config.assets_dir {
            Some(dir) => Self::with_assets_dir(dir.clone()),
            None => Self::new(),
        }
    }

    /// Looks in `./assets`, then `../assets`, then falls back to the relative path
    fn locate_assets_directory(current_dir: &Path) -> PathBuf {
        if current_dir.join("assets").exists() {
            return current_dir.join("assets");
        }

        if let Some(parent) = current_dir.parent() {
            if parent.join("assets").exists() {
                return parent.join("assets");
            }
        }

        PathBuf::from("assets")
    }

    // =========================================================================
    // Cart operations
    // =========================================================================

    pub fn add_to_cart(&self, session_id: Option<String>, product_id: ProductId) -> Result<CartView> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(StorefrontError::UnknownProduct(product_id))?;
        let session_id = get_or_create_session_id(session_id);
        let view = self.update_cart(session_id, |cart| ledger::add_to_cart(cart, product));
        info!(session_id = %view.session_id, product_id, count = view.count, "added to cart");
        Ok(view)
    }

    pub fn remove_from_cart(&self, session_id: Option<String>, product_id: ProductId) -> CartView {
        let session_id = get_or_create_session_id(session_id);
        let view = self.update_existing_cart(session_id, |cart| {
            ledger::remove_from_cart(cart, product_id)
        });
        info!(session_id = %view.session_id, product_id, count = view.count, "removed from cart");
        view
    }

    pub fn update_quantity(
        &self,
        session_id: Option<String>,
        product_id: ProductId,
        delta: i64,
    ) -> CartView {
        let session_id = get_or_create_session_id(session_id);
        let view = self.update_existing_cart(session_id, |cart| {
            ledger::update_quantity(cart, product_id, delta)
        });
        debug!(session_id = %view.session_id, product_id, delta, "quantity updated");
        view
    }

    /// Reads a cart without creating a session for unknown ids.
    pub fn cart_view(&self, session_id: &str) -> CartView {
        let cart = self
            .sessions
            .get(session_id)
            .map(|session| session.cart.clone())
            .unwrap_or_default();
        CartView::new(session_id.to_string(), cart)
    }

    fn update_cart(&self, session_id: String, transition: impl FnOnce(Cart) -> Cart) -> CartView {
        let mut session = self.sessions.entry(session_id.clone()).or_default();
        session.apply_cart(transition);
        debug!(session_id = %session_id, items = %format_item_summary(&session.cart), "cart changed");
        CartView::new(session_id, session.cart.clone())
    }

    /// Like `update_cart`, but an unknown session is left absent and reads as empty.
    fn update_existing_cart(
        &self,
        session_id: String,
        transition: impl FnOnce(Cart) -> Cart,
    ) -> CartView {
        match self.sessions.get_mut(&session_id) {
            Some(mut session) => {
                session.apply_cart(transition);
                CartView::new(session_id, session.cart.clone())
            }
            None => CartView::new(session_id, Cart::new()),
        }
    }

    // =========================================================================
    // Navigation and filter operations
    // =========================================================================

    /// Updates the search text and/or the category; `None` keeps the current value.
    pub fn set_filter(
        &self,
        session_id: Option<String>,
        query: Option<String>,
        category: Option<CategoryFilter>,
    ) -> SessionView {
        let session_id = get_or_create_session_id(session_id);
        let mut session = self.sessions.entry(session_id.clone()).or_default();
        if let Some(query) = query {
            session.filter.query = query;
        }
        if let Some(category) = category {
            session.filter.category = category;
        }
        self.render(session_id, &session)
    }

    pub fn set_tab(&self, session_id: Option<String>, tab: Tab) -> SessionView {
        let session_id = get_or_create_session_id(session_id);
        let mut session = self.sessions.entry(session_id.clone()).or_default();
        session.active_tab = tab;
        self.render(session_id, &session)
    }

    /// Current page state; unknown ids read as a fresh session.
    pub fn session_view(&self, session_id: &str) -> SessionView {
        match self.sessions.get(session_id) {
            Some(session) => self.render(session_id.to_string(), &session),
            None => self.render(session_id.to_string(), &StorefrontSession::default()),
        }
    }

    fn render(&self, session_id: String, session: &StorefrontSession) -> SessionView {
        SessionView {
            active_tab: session.active_tab,
            filter: session.filter.clone(),
            products: session
                .filter
                .apply(self.catalog.products())
                .into_iter()
                .cloned()
                .collect(),
            cart: CartView::new(session_id.clone(), session.cart.clone()),
            session_id,
        }
    }

    // =========================================================================
    // Widget assets
    // =========================================================================

    /// Reads the storefront.html file or a fallback version
    pub async fn load_widget_html(&self) -> Result<String> {
        let primary_html_path = self.assets_dir.join(WIDGET_HTML_FILE);
        if primary_html_path.exists() {
            return Ok(tokio::fs::read_to_string(primary_html_path).await?);
        }

        // Search for fallbacks (e.g., storefront-123.html)
        let fallback_path = self.find_fallback_html_file().await?;
        Ok(tokio::fs::read_to_string(fallback_path).await?)
    }

    async fn find_fallback_html_file(&self) -> Result<PathBuf> {
        let mut entries = tokio::fs::read_dir(&self.assets_dir).await?;

        let mut fallbacks = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if name.starts_with("storefront-") && name.ends_with(".html") {
                    fallbacks.push(path);
                }
            }
        }

        // Lexicographically last is the newest build
        fallbacks.sort();
        fallbacks.pop().ok_or_else(|| {
            StorefrontError::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("no widget html in {}", self.assets_dir.display()),
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::Category;

    fn state() -> AppState {
        AppState::with_assets_dir(PathBuf::from("does-not-exist"))
    }

    #[test]
    fn missing_session_ids_are_generated() {
        let generated = get_or_create_session_id(None);
        assert_eq!(generated.len(), 32);
        assert_ne!(generated, get_or_create_session_id(Some(String::new())));
        assert_eq!(get_or_create_session_id(Some("abc".into())), "abc");
    }

    #[test]
    fn cart_operations_share_one_session() {
        let state = state();
        let first = state.add_to_cart(None, 1).unwrap();
        let sid = Some(first.session_id.clone());

        let view = state.add_to_cart(sid.clone(), 1).unwrap();
        assert_eq!((view.total, view.count), (259980, 2));

        let view = state.update_quantity(sid.clone(), 1, -5);
        assert_eq!((view.total, view.count), (129990, 1));

        let view = state.remove_from_cart(sid, 1);
        assert!(view.items.is_empty());
        assert_eq!((view.total, view.count), (0, 0));
    }

    #[test]
    fn unknown_product_is_rejected_before_touching_the_session() {
        let state = state();
        let err = state.add_to_cart(Some("s1".into()), 404).unwrap_err();
        assert!(matches!(err, StorefrontError::UnknownProduct(404)));
        assert!(state.sessions.get("s1").is_none());
    }

    #[test]
    fn sessions_are_isolated() {
        let state = state();
        state.add_to_cart(Some("a".into()), 2).unwrap();
        state.add_to_cart(Some("b".into()), 5).unwrap();
        assert_eq!(state.cart_view("a").total, 119990);
        assert_eq!(state.cart_view("b").total, 24990);
    }

    #[test]
    fn reading_an_unknown_cart_does_not_create_a_session() {
        let state = state();
        let view = state.cart_view("ghost");
        assert!(view.items.is_empty());
        assert!(state.sessions.is_empty());
    }

    #[test]
    fn filter_and_tab_are_remembered() {
        let state = state();
        let view = state.set_filter(
            Some("s".into()),
            Some("pro".into()),
            Some(CategoryFilter::Only(Category::Phones)),
        );
        let ids: Vec<_> = view.products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 6]);

        let view = state.set_tab(Some("s".into()), Tab::Catalog);
        assert_eq!(view.active_tab, Tab::Catalog);
        assert_eq!(view.filter.query, "pro");

        let view = state.session_view("s");
        assert_eq!(view.products.len(), 2);
        assert_eq!(view.active_tab, Tab::Catalog);
    }

    #[test]
    fn filter_fields_change_independently() {
        let state = state();
        state.set_filter(Some("s".into()), Some("pro".into()), None);

        let view = state.set_filter(
            Some("s".into()),
            None,
            Some(CategoryFilter::Only(Category::Phones)),
        );
        assert_eq!(view.filter.query, "pro");
        assert_eq!(view.products.len(), 2);

        let view = state.set_filter(Some("s".into()), Some(String::new()), None);
        assert_eq!(view.filter.category, CategoryFilter::Only(Category::Phones));
        assert_eq!(view.products.len(), 3);
    }

    #[test]
    fn cart_changes_on_unknown_sessions_store_nothing() {
        let state = state();
        let view = state.remove_from_cart(Some("ghost".into()), 1);
        assert!(view.items.is_empty());
        let view = state.update_quantity(None, 1, 3);
        assert_eq!(view.count, 0);
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn missing_widget_html_is_an_io_error() {
        let err = state().load_widget_html().await.unwrap_err();
        assert!(matches!(err, StorefrontError::Io(_)));
    }
}
