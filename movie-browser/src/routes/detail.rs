use marquee::{Element, Location, Node, Params, Route};

pub struct MovieRoute;

#[async_trait::async_trait]
impl Route for MovieRoute {
    fn path(&self) -> &'static str {
        "/:id"
    }

    fn name(&self) -> Option<&'static str> {
        Some("movie")
    }

    async fn render(&self, params: &Params, _location: &Location) -> Node {
        let movie_id = params.get("id").map(|s| s.as_str()).unwrap_or("");

        Element::new("section")
            .with_class("movie-view")
            .with_attribute("data-movie-id", movie_id)
            .with_child(
                Element::new("a")
                    .with_class("back")
                    .with_attribute("href", "/")
                    .with_child(Node::text("← All movies")),
            )
            .with_child(
                Element::new("h1")
                    .with_class("title")
                    .with_child(Node::text(format!("Movie {}", movie_id))),
            )
            .into()
    }
}
