use trail_router::{DispatchError, Output, Params, Router, RouterConfig};

use std::sync::{Arc, Mutex};

fn name(tag: &'static str) -> impl Fn(&Params<'_>) -> Output<String> + Send + Sync + 'static {
    move |p: &Params<'_>| {
        if p.is_empty() {
            Output::Emit(tag.to_owned())
        } else {
            Output::Emit(format!("{}:{}", tag, p.join(",")))
        }
    }
}

fn first(router: &Router<String>, method: &str, path: &str) -> Option<String> {
    router.dispatch(method, path).ok()?.into_first()
}

#[test]
fn router_common() {
    let mut router: Router<String> = Router::new();
    router.get("/", name("root"));
    router.get("/foo/{test}", name("foo"));
    router.get("/test", name("form"));
    router.post("/test", name("submit"));
    router.scope("/user/{user_id}", |user| {
        user.get("/post/{post_id}", name("post"));
        user.get("/profile", name("profile"));
    });

    let cases: &[(&str, &str, &str)] = &[
        ("GET", "/", "root"),
        ("GET", "", "root"),
        ("GET", "/foo/bar", "foo:bar"),
        ("GET", "/foo/bar/", "foo:bar"),
        ("GET", "/test", "form"),
        ("POST", "/test", "submit"),
        ("GET", "/user/asd/post/123", "post:asd,123"),
        ("GET", "/user/asd/profile", "profile:asd"),
    ];

    for &(method, path, expected) in cases {
        assert_eq!(first(&router, method, path).as_deref(), Some(expected), "{} {}", method, path);
    }
}

#[test]
fn slash_variants_are_equivalent() {
    for pattern in &["/foo/", "foo/", "foo", "/foo"] {
        let mut router: Router<String> = Router::new();
        router.get(pattern, name("foo"));
        for path in &["/foo/", "foo/", "foo", "/foo"] {
            assert_eq!(first(&router, "GET", path).as_deref(), Some("foo"));
        }
    }
}

#[test]
fn default_constraint_bounds() {
    let mut router: Router<String> = Router::new();
    router.get("/users/{id}", name("user"));

    assert_eq!(first(&router, "GET", "/users/42").as_deref(), Some("user:42"));
    assert_eq!(first(&router, "GET", "/users/a-b_c").as_deref(), Some("user:a-b_c"));
    assert!(router.resolve("GET", "/users/").is_err());
    assert!(router.resolve("GET", "/users/42/extra").is_err());
    assert!(router.resolve("GET", "/users/a.b").is_err());
}

#[test]
fn constrained_parameter() {
    let mut router: Router<String> = Router::new();
    router.get("/items/{id}", name("item")).with("id", r"\d+");

    assert_eq!(first(&router, "GET", "/items/7").as_deref(), Some("item:7"));
    assert_eq!(
        router.resolve("GET", "/items/abc").unwrap_err(),
        DispatchError::NotFound {
            path: "/items/abc".to_owned()
        }
    );
}

#[test]
fn not_found_and_not_allowed() {
    let mut router: Router<String> = Router::new();
    router.get("/a", name("a"));

    let err = router.dispatch("POST", "/a").unwrap_err();
    assert_eq!(err.status(), 405);
    match err {
        DispatchError::MethodNotAllowed { path, method, .. } => {
            assert_eq!(path, "/a");
            assert_eq!(method, "POST");
        }
        other => panic!("unexpected: {:?}", other),
    }

    let err = router.dispatch("GET", "/b").unwrap_err();
    assert_eq!(err.status(), 404);
    assert_eq!(err.path(), "/b");
}

#[test]
fn hooks_recover_misses() {
    let mut router: Router<String> = Router::new();
    router.get("/a", name("a"));
    router
        .on_not_found(|path| Output::Emit(format!("missing {}", path)))
        .on_method_not_allowed(|path, method| Output::Emit(format!("no {} on {}", method, path)));

    let out = router.dispatch("GET", "/b/").unwrap();
    assert_eq!(out.recovered_from().map(DispatchError::status), Some(404));
    assert_eq!(out.into_first().unwrap(), "missing /b");

    let out = router.dispatch("delete", "/a").unwrap();
    assert_eq!(out.recovered_from().map(DispatchError::status), Some(405));
    assert_eq!(out.into_first().unwrap(), "no delete on /a");

    // resolve never runs hooks
    assert!(router.resolve("GET", "/b").is_err());

    let out = router.dispatch("GET", "/a").unwrap();
    assert!(out.recovered_from().is_none());
}

#[test]
fn only_not_found_hook_set() {
    let mut router: Router<String> = Router::new();
    router.get("/a", name("a"));
    router.on_not_found(|path| Output::Emit(format!("missing {}", path)));

    let err = router.dispatch("POST", "/a").unwrap_err();
    match &err {
        DispatchError::MethodNotAllowed { path, method, allowed } => {
            assert_eq!(path, "/a");
            assert_eq!(method, "POST");
            assert_eq!(allowed.len(), 1);
            assert_eq!(&*allowed[0], "GET");
        }
        other => panic!("unexpected: {:?}", other),
    }

    let out = router.dispatch("GET", "/b").unwrap();
    assert_eq!(out.recovered_from().map(DispatchError::status), Some(404));
    assert_eq!(out.into_first().unwrap(), "missing /b");
}

#[test]
fn only_not_allowed_hook_set() {
    let mut router: Router<String> = Router::new();
    router.get("/a", name("a"));
    router.on_method_not_allowed(|path, method| Output::Emit(format!("no {} on {}", method, path)));

    let err = router.dispatch("GET", "/b").unwrap_err();
    assert_eq!(err, DispatchError::NotFound { path: "/b".to_owned() });

    let out = router.dispatch("PUT", "/a").unwrap();
    assert_eq!(out.recovered_from().map(DispatchError::status), Some(405));
    assert_eq!(out.into_first().unwrap(), "no PUT on /a");
}

#[test]
fn nested_class_constraint_is_one_parameter() {
    let mut router: Router<String> = Router::new();
    router
        .get("/g/{c}", |p: &Params<'_>| Output::Emit(p.to_vec().join("|")))
        .with("c", "([a[b](])");

    assert_eq!(router.routes()[0].matcher(), "^/g/([a[b](])$");
    assert_eq!(first(&router, "GET", "/g/("), Some("(".to_owned()));
    assert_eq!(first(&router, "GET", "/g/b"), Some("b".to_owned()));
}

#[test]
fn hook_with_empty_output() {
    let mut router: Router<String> = Router::new();
    router.on_not_found(|_| Output::Empty);
    let out = router.dispatch("GET", "/nothing").unwrap();
    assert!(out.is_empty());
    assert_eq!(out.recovered_from().map(DispatchError::status), Some(404));
}

#[test]
fn first_registered_wins() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut router: Router<String> = Router::new();
    for tag in &["first", "second"] {
        let calls = calls.clone();
        router.get("/x", move |_: &Params<'_>| {
            calls.lock().unwrap().push(*tag);
            Output::Emit((*tag).to_owned())
        });
    }

    let out = router.dispatch("GET", "/x").unwrap();
    assert_eq!(out.into_vec(), ["first"]);
    assert_eq!(*calls.lock().unwrap(), ["first"]);
}

#[test]
fn multimatch_runs_every_route() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let mut router: Router<String> = Router::with_config(RouterConfig::new().multimatch(true));
    for tag in &["first", "second", "third"] {
        let calls = calls.clone();
        router.get("/{any}", move |_: &Params<'_>| {
            calls.lock().unwrap().push(*tag);
            if *tag == "second" {
                Output::Empty
            } else {
                Output::Emit((*tag).to_owned())
            }
        });
    }
    router.post("/x", name("post"));

    let out = router.dispatch("GET", "/x").unwrap();
    assert_eq!(out.into_vec(), ["first", "third"]);
    assert_eq!(*calls.lock().unwrap(), ["first", "second", "third"]);
}

#[test]
fn falsy_looking_output_is_output() {
    let mut router: Router<String> = Router::new();
    router.get("/zero", |_: &Params<'_>| Output::Emit("0".to_owned()));
    router.get("/zero", name("never"));

    let out = router.dispatch("GET", "/zero").unwrap();
    assert_eq!(out.into_vec(), ["0"]);
}

#[test]
fn scope_then_plain() {
    let mut router: Router<String> = Router::new();
    router.scope("/api", |api| {
        api.get("/users", name("api-users"));
    });
    router.get("/users", name("users"));

    assert_eq!(first(&router, "GET", "/api/users").as_deref(), Some("api-users"));
    assert_eq!(first(&router, "GET", "/users").as_deref(), Some("users"));
    assert_eq!(router.routes()[0].pattern(), "/api/users");
    assert_eq!(router.routes()[1].pattern(), "/users");
}

#[test]
fn multiple_methods_per_route() {
    let mut router: Router<String> = Router::new();
    router.any(&["GET", "head"], "/page", name("page"));

    assert_eq!(first(&router, "get", "/page").as_deref(), Some("page"));
    assert_eq!(first(&router, "HEAD", "/page").as_deref(), Some("page"));
    let err = router.dispatch("POST", "/page").unwrap_err();
    let allowed: Vec<&str> = err.allowed().iter().map(|m| &**m).collect();
    assert_eq!(allowed, ["GET", "HEAD"]);
}

#[test]
fn base_path() {
    let mut router: Router<String> = Router::with_config(RouterConfig::new().base_path("/app"));
    router.get("/", name("home"));
    router.get("/users/{id}", name("user"));

    assert_eq!(first(&router, "GET", "/app").as_deref(), Some("home"));
    assert_eq!(first(&router, "GET", "/app/").as_deref(), Some("home"));
    assert_eq!(first(&router, "GET", "/app/users/9").as_deref(), Some("user:9"));
    assert!(router.resolve("GET", "/users/9").is_err());
}

#[test]
fn multi_constraint_map() {
    let mut router: Router<String> = Router::new();
    router
        .get("/d/{year}/{slug}", name("post"))
        .with_all(vec![("year", r"\d{4}"), ("slug", "([a-z-]+)")]);

    assert_eq!(first(&router, "GET", "/d/2024/hello-world").as_deref(), Some("post:2024,hello-world"));
    assert!(router.resolve("GET", "/d/24/hello").is_err());
    assert!(router.resolve("GET", "/d/2024/Hello").is_err());
}

#[test]
fn named_lookup() {
    let mut router: Router<String> = Router::new();
    router.get("/u/{uid}/p/{pid}", |p: &Params<'_>| {
        let pid: u32 = match p.parse("pid") {
            Some(Ok(pid)) => pid,
            _ => return Output::Empty,
        };
        Output::Emit(format!("{}#{}", p.get("uid").unwrap_or_default(), pid + 1))
    });

    assert_eq!(first(&router, "GET", "/u/asd/p/41").as_deref(), Some("asd#42"));
    let out = router.dispatch("GET", "/u/asd/p/x").unwrap();
    assert!(out.is_empty());
}

#[test]
fn decoded_before_matching() {
    let mut router: Router<String> = Router::new();
    router.get("/search/{q}", name("q")).with("q", ".+");

    assert_eq!(first(&router, "GET", "/search/a%20b").as_deref(), Some("q:a b"));
    assert_eq!(first(&router, "GET", "/search/a+b?page=2").as_deref(), Some("q:a b"));
}

#[test]
fn dispatch_is_idempotent() {
    let mut router: Router<String> = Router::new();
    router.get("/u/{id}", name("u"));

    let a = router.dispatch("GET", "/u/1").unwrap().into_vec();
    let b = router.dispatch("GET", "/u/1").unwrap().into_vec();
    assert_eq!(a, b);
    assert_eq!(router.resolve("GET", "/v").unwrap_err(), router.resolve("GET", "/v").unwrap_err());
}

#[test]
fn shared_across_threads() {
    let mut router: Router<String> = Router::new();
    router.get("/n/{n}", name("n"));
    let router = Arc::new(router);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let router = Arc::clone(&router);
            std::thread::spawn(move || {
                let path = format!("/n/{}", i);
                router.dispatch("GET", &path).unwrap().into_first().unwrap()
            })
        })
        .collect();

    for (i, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), format!("n:{}", i));
    }
}
