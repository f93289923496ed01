//! Common test utilities shared across integration tests

use async_trait::async_trait;
use marquee::{
    App, Application, BoxedRoute, Document, Element, History, Location, Node, Params, Route,
    Router, Selector,
};

pub struct ListRoute;

#[async_trait]
impl Route for ListRoute {
    fn path(&self) -> &'static str {
        "/"
    }

    fn name(&self) -> Option<&'static str> {
        Some("home")
    }

    async fn render(&self, _params: &Params, _location: &Location) -> Node {
        Element::new("section")
            .with_class("movie-list")
            .with_child(Node::text("list"))
            .into()
    }
}

pub struct DetailRoute;

#[async_trait]
impl Route for DetailRoute {
    fn path(&self) -> &'static str {
        "/:id"
    }

    fn name(&self) -> Option<&'static str> {
        Some("movie")
    }

    async fn render(&self, params: &Params, _location: &Location) -> Node {
        let id = params.get("id").map(|s| s.as_str()).unwrap_or("");
        Element::new("section")
            .with_class("movie-view")
            .with_attribute("data-movie-id", id)
            .with_child(Node::text(format!("detail {}", id)))
            .into()
    }
}

pub struct TestApp;

impl Application for TestApp {
    fn routes(&self) -> Vec<BoxedRoute> {
        vec![Box::new(ListRoute), Box::new(DetailRoute)]
    }
}

pub fn movie_router() -> Router {
    Router::new(TestApp.routes(), History::web("/")).expect("Failed to build router")
}

/// An app mounted into a fresh document with `<div id="app">`
#[allow(dead_code)]
pub async fn mounted_app() -> App<TestApp> {
    let mut app = App::new(TestApp).use_router(movie_router());
    app.mount(Document::with_mount_point("app"), "#app")
        .await
        .expect("Failed to mount");
    app
}

/// The children currently rendered into `#app`
#[allow(dead_code)]
pub fn mounted_children(app: &App<TestApp>) -> Vec<Node> {
    let document = app.document().expect("App is not mounted");
    let target = document
        .query_selector(&Selector::parse("#app").unwrap())
        .expect("Mount target missing");
    target.children.clone()
}

/// Text rendered into `#app`
#[allow(dead_code)]
pub fn mounted_text(app: &App<TestApp>) -> String {
    mounted_children(app).iter().map(Node::text_content).collect()
}
