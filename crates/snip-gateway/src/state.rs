use std::sync::Arc;

use snip_redirector::Resolver;
use snip_shortener::Allocator;

#[derive(Clone)]
pub struct AppState {
    allocator: Arc<dyn Allocator>,
    resolver: Arc<dyn Resolver>,
    base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        allocator: Arc<dyn Allocator>,
        resolver: Arc<dyn Resolver>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let base_url: String = public_base_url.into();
        Self {
            allocator,
            resolver,
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    pub fn allocator(&self) -> &dyn Allocator {
        self.allocator.as_ref()
    }

    pub fn resolver(&self) -> &dyn Resolver {
        self.resolver.as_ref()
    }

    /// Public origin redirects are served from, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
