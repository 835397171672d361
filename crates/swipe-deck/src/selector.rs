//! Category selection feeding the swipe session.

use swipe_commerce::catalog::{CatalogProvider, Category};
use swipe_commerce::CategoryId;
use tracing::info;

use crate::session::SwipeSession;
use crate::transition::TransitionConfig;

/// Owns the active category and the session built for it.
///
/// Switching category discards the old session; position never carries over.
#[derive(Debug)]
pub struct CategorySelector<P> {
    provider: P,
    config: TransitionConfig,
    active: CategoryId,
    session: SwipeSession,
}

impl<P: CatalogProvider> CategorySelector<P> {
    /// Start on the provider's default category.
    pub fn new(provider: P, config: TransitionConfig) -> Self {
        let active = provider
            .default_category()
            .cloned()
            .unwrap_or_else(|| CategoryId::new(""));
        Self::starting_at(provider, active, config)
    }

    /// Start on a specific category.
    pub fn starting_at(provider: P, category_id: CategoryId, config: TransitionConfig) -> Self {
        let session = SwipeSession::with_config(provider.items_for(&category_id), config);
        Self {
            provider,
            config,
            active: category_id,
            session,
        }
    }

    /// Switch category. Returns false when it was already active, in which
    /// case the current session is kept.
    pub fn select(&mut self, category_id: CategoryId) -> bool {
        if category_id == self.active {
            return false;
        }
        info!(from = %self.active, to = %category_id, "category changed");
        self.active = category_id;
        self.rebuild();
        true
    }

    /// Start the active category over from its first item.
    pub fn restart(&mut self) {
        info!(category = %self.active, "category restarted");
        self.rebuild();
    }

    pub fn active_category_id(&self) -> &CategoryId {
        &self.active
    }

    /// The active category, if the provider knows it.
    pub fn active_category(&self) -> Option<&Category> {
        self.provider.category(&self.active)
    }

    pub fn categories(&self) -> &[Category] {
        self.provider.categories()
    }

    pub fn session(&self) -> &SwipeSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SwipeSession {
        &mut self.session
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    fn rebuild(&mut self) {
        self.session = SwipeSession::with_config(self.provider.items_for(&self.active), self.config);
    }
}
