use std::collections::HashMap;

use async_trait::async_trait;
use marquee_dom::Node;

use crate::history::Location;

pub type Params = HashMap<String, String>;

pub type BoxedRoute = Box<dyn Route>;

/// One entry of the route table: a path pattern, an optional name and the
/// view rendered when the pattern matches.
#[async_trait]
pub trait Route: Send + Sync {
    fn path(&self) -> &'static str;

    /// Optional metadata used to build links; has no effect on matching.
    fn name(&self) -> Option<&'static str> {
        None
    }

    async fn render(&self, params: &Params, location: &Location) -> Node;
}
