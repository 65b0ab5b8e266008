use bunner_nav_router::{
    ClickDisposition, ClickEvent, ClickSource, MemoryHistory, Modifiers, MouseButton,
    NavigationSource, Router, RouterError, RouterOptions, Routes,
};
use parking_lot::Mutex;
use std::sync::Arc;

type Seen = Arc<Mutex<Vec<String>>>;

fn sample_routes(seen: &Seen) -> Routes {
    let one = seen.clone();
    let hello = seen.clone();
    Routes::new()
        .route("/one", move |_: &[&str]| one.lock().push("one".to_string()))
        .route("/hello/:name", move |args: &[&str]| {
            hello.lock().push(format!("hello {}", args[0]))
        })
}

#[test]
fn router_when_initialized_then_current_url_is_dispatched() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("https://example.com/hello/boot"));
    let router = Arc::new(Router::new());

    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");

    assert_eq!(*seen.lock(), vec!["hello boot"]);
    assert_eq!(history.listener_count(), 1);
}

#[test]
fn router_when_navigation_source_disabled_then_init_fails_without_side_effects() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::disabled("/one"));
    let router = Arc::new(Router::new());

    let err = router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect_err("disabled history should abort init");

    assert_eq!(err, RouterError::NavigationUnavailable);
    assert!(router.is_empty());
    assert_eq!(history.listener_count(), 0);
    assert!(seen.lock().is_empty());
    assert_eq!(router.go("/one"), Err(RouterError::NotInitialized));
}

#[test]
fn router_when_initialized_twice_then_second_init_is_rejected() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("first init should succeed");

    let err = router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect_err("second init should fail");
    assert_eq!(err, RouterError::AlreadyInitialized);
    assert_eq!(history.listener_count(), 1);
}

#[test]
fn router_when_go_with_url_then_push_triggers_dispatch() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");

    router.go("/one").expect("go should succeed");
    router.go("/hello/world").expect("go should succeed");

    assert_eq!(*seen.lock(), vec!["one", "hello world"]);
    assert_eq!(history.urls(), vec!["/", "/one", "/hello/world"]);
}

#[test]
fn router_when_go_with_offset_then_history_moves_instead_of_pushing() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");
    router.go("/one").expect("push");
    router.go("/hello/there").expect("push");

    router.go(-1).expect("go back");

    assert_eq!(history.entry_count(), 3);
    assert_eq!(history.cursor(), 1);
    assert_eq!(history.current_url(), "/one");
    assert_eq!(*seen.lock(), vec!["one", "hello there", "one"]);
}

#[test]
fn router_when_go_called_before_init_then_returns_error() {
    let router = Router::new();
    assert_eq!(router.go(-1), Err(RouterError::NotInitialized));
}

#[test]
fn router_when_plain_internal_link_clicked_then_push_state_with_prefixed_title() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let options = RouterOptions::builder()
        .title_prefix("Site - ")
        .build()
        .expect("options should build");
    let router = Arc::new(Router::with_options(options).expect("router should build"));
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");

    let disposition = history.click(&ClickEvent::link("/hello/link").title("Greeting"));

    assert_eq!(disposition, ClickDisposition::PreventDefault);
    assert_eq!(history.current_url(), "/hello/link");
    assert_eq!(history.current_title().as_deref(), Some("Site - Greeting"));
    assert_eq!(*seen.lock(), vec!["hello link"]);
}

#[test]
fn router_when_link_has_no_title_then_pushed_title_is_empty() {
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(Routes::new(), history.clone(), &*history)
        .expect("init should succeed");

    history.click(&ClickEvent::link("/untitled"));

    assert_eq!(history.current_title(), None);
}

#[test]
fn router_when_modified_or_external_click_then_default_is_kept() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");

    let clicks = [
        ClickEvent::link("/one").modifiers(Modifiers::CTRL),
        ClickEvent::link("/one").modifiers(Modifiers::SHIFT | Modifiers::ALT),
        ClickEvent::link("/one").modifiers(Modifiers::META),
        ClickEvent::link("/one").button(MouseButton::Middle),
        ClickEvent::link("https://elsewhere.example/one"),
        ClickEvent::default(),
    ];
    for click in &clicks {
        assert_eq!(history.click(click), ClickDisposition::PassThrough);
    }

    assert_eq!(history.entry_count(), 1);
    assert!(seen.lock().is_empty());
}

#[test]
fn router_when_not_initialized_then_click_passes_through() {
    let router = Router::new();
    assert_eq!(
        router.handle_click(&ClickEvent::link("/one")),
        ClickDisposition::PassThrough
    );
}

#[test]
fn router_when_dropped_then_history_events_are_ignored() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    router
        .init(sample_routes(&seen), history.clone(), &*history)
        .expect("init should succeed");
    drop(router);

    history.push_state(None, "/one");

    assert!(seen.lock().is_empty());
    assert_eq!(
        history.click(&ClickEvent::link("/one")),
        ClickDisposition::PassThrough
    );
    assert_eq!(history.listener_count(), 0);
    assert_eq!(history.click_listener_count(), 0);
}

#[test]
fn router_when_replaced_on_same_history_then_listeners_do_not_accumulate() {
    let history = Arc::new(MemoryHistory::new("/"));
    for _ in 0..3 {
        let router = Arc::new(Router::new());
        router
            .init(Routes::new(), history.clone(), &*history)
            .expect("init should succeed");
        drop(router);
        history.push_state(None, "/next");
        history.click(&ClickEvent::link("/next"));
    }

    assert_eq!(history.listener_count(), 0);
    assert_eq!(history.click_listener_count(), 0);
}

#[test]
fn router_when_handler_navigates_then_nested_dispatch_runs() {
    let seen = Seen::default();
    let history = Arc::new(MemoryHistory::new("/"));
    let router = Arc::new(Router::new());
    let weak = Arc::downgrade(&router);
    let sink = seen.clone();
    let routes = Routes::new()
        .route("/old", move |_: &[&str]| {
            if let Some(router) = weak.upgrade() {
                router.go("/new").expect("redirect should push");
            }
        })
        .route("/new", move |_: &[&str]| sink.lock().push("new".to_string()));
    router
        .init(routes, history.clone(), &*history)
        .expect("init should succeed");

    router.go("/old").expect("go should succeed");

    assert_eq!(*seen.lock(), vec!["new"]);
    assert_eq!(history.current_url(), "/new");
}

struct GatedHistory {
    inner: MemoryHistory,
    gate: Arc<std::sync::Barrier>,
}

impl NavigationSource for GatedHistory {
    fn is_enabled(&self) -> bool {
        self.gate.wait();
        self.inner.is_enabled()
    }

    fn current_url(&self) -> String {
        self.inner.current_url()
    }

    fn subscribe(&self, listener: bunner_nav_router::types::NavigationListener) {
        self.inner.subscribe(listener);
    }

    fn push_state(&self, title: Option<&str>, url: &str) {
        self.inner.push_state(title, url);
    }

    fn go(&self, delta: i32) {
        self.inner.go(delta);
    }
}

impl ClickSource for GatedHistory {
    fn subscribe_clicks(&self, listener: bunner_nav_router::types::ClickListener) {
        self.inner.subscribe_clicks(listener);
    }
}

#[test]
fn router_when_init_races_then_loser_leaves_no_routes_behind() {
    let router = Arc::new(Router::new());
    let gate = Arc::new(std::sync::Barrier::new(2));

    let workers: Vec<_> = ["/first", "/second"]
        .into_iter()
        .map(|template| {
            let router = router.clone();
            let history = Arc::new(GatedHistory {
                inner: MemoryHistory::new("/"),
                gate: gate.clone(),
            });
            std::thread::spawn(move || {
                let outcome = router.init(
                    Routes::new().route(template, |_: &[&str]| {}),
                    history.clone(),
                    &*history,
                );
                (template, outcome, history.inner.listener_count())
            })
        })
        .collect();

    let outcomes: Vec<_> = workers
        .into_iter()
        .map(|worker| worker.join().expect("worker should not panic"))
        .collect();

    let winners: Vec<_> = outcomes.iter().filter(|(_, outcome, _)| outcome.is_ok()).collect();
    let losers: Vec<_> = outcomes.iter().filter(|(_, outcome, _)| outcome.is_err()).collect();
    assert_eq!(winners.len(), 1);
    assert_eq!(losers.len(), 1);

    let (winner, _, winner_listeners) = winners[0];
    let (loser, loser_outcome, loser_listeners) = losers[0];
    assert_eq!(*loser_outcome, Err(RouterError::AlreadyInitialized));
    assert_eq!(router.templates(), vec![*winner]);
    assert!(!router.contains(loser));
    assert_eq!(*winner_listeners, 1);
    assert_eq!(*loser_listeners, 0);
}
