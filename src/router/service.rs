use crate::navigation::{ClickDisposition, ClickEvent, ClickSource, GoTarget, NavigationSource};
use crate::path::{DEFAULT_BASE_URL, parse_base_url, resolve_path};
use crate::pattern::{RoutePattern, compile};
use crate::router::{
    DuplicateParamPolicy, Registration, RouteTable, RouterError, RouterOptions,
    RouterOptionsError, RouterResult, Routes,
};
use crate::types::BoxedHandler;
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};
use url::Url;

pub struct Router {
    table: RwLock<RouteTable>,
    options: RouterOptions,
    base: Url,
    navigation: OnceLock<Arc<dyn NavigationSource>>,
}

impl Router {
    pub fn new() -> Self {
        let base = Url::parse(DEFAULT_BASE_URL).expect("default base url should parse");
        Self::from_parts(RouterOptions::default(), base)
    }

    pub fn with_options(options: RouterOptions) -> RouterResult<Self> {
        let base = parse_base_url(&options.base_url).map_err(RouterOptionsError::from)?;
        Ok(Self::from_parts(options, base))
    }

    fn from_parts(options: RouterOptions, base: Url) -> Self {
        Self {
            table: RwLock::new(RouteTable::new()),
            options,
            base,
            navigation: OnceLock::new(),
        }
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn register(&self, routes: Routes) -> RouterResult<()> {
        let compiled = self.compile_batch(routes)?;
        self.insert_batch(compiled);
        Ok(())
    }

    fn compile_batch(&self, routes: Routes) -> RouterResult<Vec<(RoutePattern, BoxedHandler)>> {
        let compiled: Vec<(RoutePattern, BoxedHandler)> = routes
            .into_iter()
            .map(|(template, handler)| (compile(&template), handler))
            .collect();

        if self.options.duplicate_params == DuplicateParamPolicy::Reject {
            for (pattern, _) in &compiled {
                pattern.validate()?;
            }
        }

        Ok(compiled)
    }

    fn insert_batch(&self, compiled: Vec<(RoutePattern, BoxedHandler)>) {
        let mut guard = self.table.write();
        for (pattern, handler) in compiled {
            let template = pattern.template().to_string();
            let outcome = guard.insert(pattern, handler);
            tracing::event!(
                tracing::Level::TRACE,
                operation = "register",
                template = %template,
                replaced = (outcome == Registration::Replaced)
            );
        }
    }

    pub fn add<S, F>(&self, template: S, handler: F) -> RouterResult<()>
    where
        S: Into<String>,
        F: Fn(&[&str]) + Send + Sync + 'static,
    {
        self.register(Routes::new().route(template, handler))
    }

    pub fn len(&self) -> usize {
        self.table.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.read().is_empty()
    }

    pub fn contains(&self, template: &str) -> bool {
        self.table.read().get(template).is_some()
    }

    pub fn templates(&self) -> Vec<String> {
        self.table.read().templates().map(str::to_string).collect()
    }

    pub fn clear(&self) {
        self.table.write().clear();
    }

    pub fn resolve_path(&self, raw_url: &str) -> String {
        resolve_path(raw_url, &self.base)
    }

    /// The table is read-locked only while searching. The handler runs after
    /// the lock is released, so it may register routes or navigate.
    #[tracing::instrument(level = "trace", skip(self, path), fields(path=%path))]
    pub fn dispatch(&self, path: &str) -> bool {
        let matched = {
            let guard = self.table.read();
            guard.find(path).map(|(entry, captures)| {
                tracing::event!(
                    tracing::Level::TRACE,
                    operation = "dispatch",
                    template = %entry.template(),
                    params = captures.len() as u64
                );
                (entry.handler().clone(), captures)
            })
        };

        match matched {
            Some((handler, captures)) => {
                handler.call(&captures);
                true
            }
            None => {
                tracing::event!(tracing::Level::DEBUG, path = %path, "no route matched");
                false
            }
        }
    }

    pub fn navigate(&self, raw_url: &str) -> bool {
        let path = self.resolve_path(raw_url);
        self.dispatch(&path)
    }

    /// Collaborators hold only a weak reference back to the router; their
    /// listeners detach once the router is dropped.
    pub fn init<N, C>(
        self: &Arc<Self>,
        routes: Routes,
        navigation: Arc<N>,
        clicks: &C,
    ) -> RouterResult<()>
    where
        N: NavigationSource + 'static,
        C: ClickSource + ?Sized,
    {
        if self.navigation.get().is_some() {
            return Err(RouterError::AlreadyInitialized);
        }
        if !navigation.is_enabled() {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "init",
                "navigation source disabled"
            );
            return Err(RouterError::NavigationUnavailable);
        }

        let compiled = self.compile_batch(routes)?;

        // a rejected init must not touch the table
        let navigation: Arc<dyn NavigationSource> = navigation;
        if self.navigation.set(navigation.clone()).is_err() {
            return Err(RouterError::AlreadyInitialized);
        }
        self.insert_batch(compiled);

        let weak = Arc::downgrade(self);
        navigation.subscribe(Arc::new(move |url: &str| match weak.upgrade() {
            Some(router) => {
                router.navigate(url);
                true
            }
            None => {
                tracing::event!(
                    tracing::Level::DEBUG,
                    url = %url,
                    "router dropped; navigation listener detached"
                );
                false
            }
        }));

        let weak = Arc::downgrade(self);
        clicks.subscribe_clicks(Arc::new(move |event: &ClickEvent| {
            weak.upgrade().map(|router| router.handle_click(event))
        }));

        let current = navigation.current_url();
        tracing::event!(tracing::Level::TRACE, operation = "init", url = %current);
        self.navigate(&current);

        Ok(())
    }

    pub fn go(&self, target: impl Into<GoTarget>) -> RouterResult<()> {
        let navigation = self.navigation.get().ok_or(RouterError::NotInitialized)?;
        match target.into() {
            GoTarget::Offset(delta) => navigation.go(delta),
            GoTarget::Url(url) => navigation.push_state(None, &url),
        }
        Ok(())
    }

    pub fn handle_click(&self, event: &ClickEvent) -> ClickDisposition {
        if !event.is_plain_internal() {
            return ClickDisposition::PassThrough;
        }
        let (Some(navigation), Some(href)) = (self.navigation.get(), event.href.as_deref()) else {
            tracing::event!(
                tracing::Level::DEBUG,
                operation = "click",
                "router not initialized; click passed through"
            );
            return ClickDisposition::PassThrough;
        };

        let title = event
            .title
            .as_deref()
            .map(|title| format!("{}{title}", self.options.title_prefix));
        navigation.push_state(title.as_deref(), href);
        ClickDisposition::PreventDefault
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Router {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Router")
            .field("table", &*self.table.read())
            .field("options", &self.options)
            .field("initialized", &self.navigation.get().is_some())
            .finish()
    }
}
