use kv_log_macro as log;
use marquee::{Element, Location, Node, Params, Route};

pub struct MovieListRoute;

#[async_trait::async_trait]
impl Route for MovieListRoute {
    fn path(&self) -> &'static str {
        "/"
    }

    fn name(&self) -> Option<&'static str> {
        Some("home")
    }

    async fn render(&self, _params: &Params, location: &Location) -> Node {
        let mut section = Element::new("section").with_class("movie-list").with_child(
            Element::new("h1")
                .with_class("title")
                .with_child(Node::text("Movies")),
        );

        // Paging and search are the list view's business; pass them through untouched.
        for (key, value) in &location.query {
            if !section.set_attribute(format!("data-query-{}", key), value) {
                log::warn!("Dropping query parameter", { key: key.as_str() });
            }
        }

        section.into()
    }
}
