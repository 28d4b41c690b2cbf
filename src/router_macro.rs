/// Builds a [`Router`](crate::Router) from `METHOD "pattern" => action` entries.
///
/// `@ "prefix" => { ... }` registers the inner entries inside a scope.
///
/// ```
/// use trail_router::{router, Output, Params, Router};
///
/// fn hello(p: &Params<'_>) -> Output<String> {
///     Output::Emit(format!("hello, {}!", p[0]))
/// }
///
/// fn info(_: &Params<'_>) -> Output<String> {
///     Output::Emit("info".to_owned())
/// }
///
/// let router: Router<String> = router! {
///     GET "/hello/{name}" => hello,
///     @ "/v1" => {
///         GET "/info" => info,
///         POST "/info" => info,
///     },
/// };
/// assert_eq!(router.routes().len(), 3);
/// ```
#[macro_export]
macro_rules! router {
    (@entries $router:ident;) => {};

    (@entries $router:ident; @ $prefix:literal => { $($inner:tt)* } $(, $($rest:tt)*)?) => {
        $router.scope($prefix, |__scoped| {
            $crate::router!(@entries __scoped; $($inner)*);
        });
        $crate::router!(@entries $router; $($($rest)*)?);
    };

    (@entries $router:ident; $method:ident $pattern:literal => $action:expr $(, $($rest:tt)*)?) => {
        $router.add(stringify!($method), $pattern, $action);
        $crate::router!(@entries $router; $($($rest)*)?);
    };

    ($($body:tt)*) => {{
        let mut __router = $crate::Router::new();
        $crate::router!(@entries __router; $($body)*);
        __router
    }};
}
