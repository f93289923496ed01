use kv_log_macro as log;
use marquee_dom::{Document, Node, Selector};
use tokio::sync::broadcast;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::{
    error::{MountError, NavigationError},
    history::{History, Location, NavigationEvent},
    navigation::{NavigationCommand, NavigationReceiver},
    route::BoxedRoute,
    router::{RouteMatch, Router},
};

/// The root component of an application.
pub trait Application: Send + Sync {
    fn routes(&self) -> Vec<BoxedRoute>;

    /// Wraps the view of the matched route. `outlet` is empty when nothing matched.
    fn layout(&self, outlet: Node) -> Node {
        outlet
    }
}

struct Mounted {
    document: Document,
    selector: Selector,
    current: Option<RouteMatch>,
}

/// An application root composed with a router, mounted at most once.
pub struct App<A: Application> {
    root: A,
    router: Option<Router>,
    mounted: Option<Mounted>,
}

impl<A: Application> App<A> {
    pub fn new(root: A) -> Self {
        App {
            root,
            router: None,
            mounted: None,
        }
    }

    pub fn use_router(mut self, router: Router) -> Self {
        self.router = Some(router);
        self
    }

    pub fn root(&self) -> &A {
        &self.root
    }

    pub fn router(&self) -> Option<&Router> {
        self.router.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn document(&self) -> Option<&Document> {
        self.mounted.as_ref().map(|m| &m.document)
    }

    /// The route rendered into the mount target, if the current location matched one.
    pub fn current_route(&self) -> Option<&RouteMatch> {
        self.mounted.as_ref().and_then(|m| m.current.as_ref())
    }

    /// Attaches the application to the element `selector` names and renders
    /// the current location into it. A second call is rejected and leaves the
    /// existing mount untouched.
    pub async fn mount(&mut self, document: Document, selector: &str) -> Result<(), MountError> {
        if self.mounted.is_some() {
            log::warn!("Application already mounted", { selector: selector });
            return Err(MountError::AlreadyMounted);
        }
        if self.router.is_none() {
            return Err(MountError::RouterMissing);
        }

        let selector = Selector::parse(selector)?;
        if document.query_selector(&selector).is_none() {
            return Err(MountError::TargetNotFound(selector.to_string()));
        }

        log::info!("Mounting application", { selector: selector.to_string() });
        self.mounted = Some(Mounted {
            document,
            selector,
            current: None,
        });
        self.render().await;

        Ok(())
    }

    pub fn subscribe(&self) -> Option<broadcast::Receiver<NavigationEvent>> {
        self.router.as_ref().map(|r| r.history().subscribe())
    }

    /// Navigation events as a stream. Events dropped because the subscriber
    /// lagged are skipped.
    pub fn events(&self) -> Option<impl Stream<Item = NavigationEvent> + 'static> {
        self.subscribe()
            .map(|receiver| BroadcastStream::new(receiver).filter_map(|event| event.ok()))
    }

    /// Returns `false` when the navigation changed nothing, i.e. the target
    /// is already the current location.
    pub async fn push(&mut self, to: &str) -> Result<bool, NavigationError> {
        let history = self.mounted_history()?;
        let event = history.push(parse_target(to)?);
        Ok(self.after_navigation(event).await)
    }

    pub async fn replace(&mut self, to: &str) -> Result<bool, NavigationError> {
        let history = self.mounted_history()?;
        let event = history.replace(parse_target(to)?);
        Ok(self.after_navigation(event).await)
    }

    /// Moves through history. Returns `false` when `delta` leaves the history.
    pub async fn go(&mut self, delta: isize) -> Result<bool, NavigationError> {
        let event = self.mounted_history()?.go(delta);
        Ok(self.after_navigation(event).await)
    }

    pub async fn back(&mut self) -> Result<bool, NavigationError> {
        self.go(-1).await
    }

    pub async fn forward(&mut self) -> Result<bool, NavigationError> {
        self.go(1).await
    }

    pub async fn handle(&mut self, command: NavigationCommand) -> Result<bool, NavigationError> {
        match command {
            NavigationCommand::Push(to) => self.push(&to).await,
            NavigationCommand::Replace(to) => self.replace(&to).await,
            NavigationCommand::Go(delta) => self.go(delta).await,
        }
    }

    /// Applies navigation commands in arrival order until every
    /// [`Navigator`](crate::Navigator) has been dropped. A command that fails
    /// is logged and skipped.
    pub async fn run(&mut self, mut commands: NavigationReceiver) -> Result<(), NavigationError> {
        if self.mounted.is_none() {
            return Err(NavigationError::NotMounted);
        }

        while let Some(command) = commands.recv().await {
            if let Err(e) = self.handle(command).await {
                log::error!("Navigation failed: {}", e);
            }
        }

        log::debug!("Navigation loop finished");
        Ok(())
    }

    fn mounted_history(&mut self) -> Result<&mut History, NavigationError> {
        match (&mut self.router, &self.mounted) {
            (Some(router), Some(_)) => Ok(router.history_mut()),
            _ => Err(NavigationError::NotMounted),
        }
    }

    async fn after_navigation(&mut self, event: Option<NavigationEvent>) -> bool {
        match event {
            Some(event) => {
                log::info!("Navigated", {
                    from: event.from,
                    to: event.to,
                    kind: format!("{:?}", event.kind)
                });
                self.render().await;
                true
            }
            None => false,
        }
    }

    async fn render(&mut self) {
        let (Some(router), Some(mounted)) = (&self.router, &mut self.mounted) else {
            return;
        };

        let matched = router.current();
        let outlet = match &matched {
            Some(matched) => router.render(matched).await,
            None => {
                log::warn!("No match found for location", {
                    location: router.history().location()
                });
                Node::Empty
            }
        };
        let tree = self.root.layout(outlet);

        match mounted.document.query_selector_mut(&mounted.selector) {
            Some(target) => target.replace_children(tree),
            None => {
                log::error!("Mount target disappeared", {
                    selector: mounted.selector.to_string()
                });
            }
        }
        mounted.current = matched;
    }
}

fn parse_target(to: &str) -> Result<Location, NavigationError> {
    if !to.starts_with('/') {
        return Err(NavigationError::InvalidPath(to.to_string()));
    }
    Ok(Location::parse(to))
}
