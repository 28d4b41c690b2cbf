use trail_router::{router, Output, Params, Router};

use std::convert::Infallible as Never;

use hyper::service::make_service_fn;
use hyper::Server;

fn hello(p: &Params<'_>) -> Output<String> {
    let name = p.get("name").unwrap_or("stranger");
    Output::Emit(format!("hello, {}!", name))
}

fn file(p: &Params<'_>) -> Output<String> {
    Output::Emit(format!("access file: {}", p[0]))
}

fn item(p: &Params<'_>) -> Output<String> {
    Output::Emit(format!("item #{}", p[0]))
}

#[tokio::main]
async fn main() {
    let mut router: Router<String> = router! {
        GET "/hello/{name}" => hello,
        @ "/api/v1" => {
            GET "/file/{path}" => file,
        },
    };
    router.get("/items/{id}", item).with("id", r"\d+");
    router.get("/file/{path}", file).with("path", ".+");
    router.on_not_found(|path| Output::Emit(format!("404 Not Found: {}", path)));

    let service = router.into_service();
    let make = make_service_fn(move |_| {
        let service = service.clone();
        async move { Ok::<_, Never>(service) }
    });

    let addr = ([127, 0, 0, 1], 3000).into();
    let server = Server::bind(&addr).serve(make);

    println!("Server is listening on: http://{}", addr);
    println!("hello: http://{}/hello/world", addr);
    println!("api: http://{}/api/v1/file/readme", addr);
    println!("items: http://{}/items/42", addr);
    println!("404: http://{}/other/path", addr);
    println!();

    if let Err(e) = server.await {
        eprintln!("server error: {}", e);
    }
}
