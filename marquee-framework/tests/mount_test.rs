//! Mount Tests
//!
//! These tests verify the one-time mount of an application:
//! - Initial render of the current location into the target
//! - Missing or malformed mount targets
//! - Mounting twice
//! - Mounting without a router

#[cfg(test)]
mod common;

use common::{mounted_app, mounted_children, mounted_text, movie_router, TestApp};
use marquee::{App, Application, Document, Element, History, MountError, Node, Router};

#[tokio::test]
async fn test_mount_renders_list_view_at_root() {
    let app = mounted_app().await;

    assert!(app.is_mounted());
    assert_eq!(mounted_text(&app), "list");

    let current = app.current_route().expect("Root should match");
    assert_eq!(current.name, Some("home"));
    assert!(current.params.is_empty());
}

#[tokio::test]
async fn test_mount_renders_detail_view_for_initial_url() {
    let history = History::web("/").with_initial_url("/17");
    let router = Router::new(TestApp.routes(), history).unwrap();
    let mut app = App::new(TestApp).use_router(router);

    app.mount(Document::with_mount_point("app"), "#app")
        .await
        .expect("Mount should succeed");

    assert_eq!(mounted_text(&app), "detail 17");
    let current = app.current_route().unwrap();
    assert_eq!(current.params.get("id"), Some(&"17".to_string()));

    let children = mounted_children(&app);
    let section = children[0].as_element().unwrap();
    assert_eq!(section.attribute("data-movie-id"), Some("17"));
}

#[tokio::test]
async fn test_mount_with_unmatched_location_renders_nothing() {
    let history = History::web("/").with_initial_url("/abc/def");
    let router = Router::new(TestApp.routes(), history).unwrap();
    let mut app = App::new(TestApp).use_router(router);

    app.mount(Document::with_mount_point("app"), "#app")
        .await
        .expect("Unmatched locations are not a mount error");

    assert!(mounted_children(&app).is_empty());
    assert!(app.current_route().is_none());
}

#[tokio::test]
async fn test_mount_target_missing() {
    let mut app = App::new(TestApp).use_router(movie_router());

    let result = app.mount(Document::new(), "#app").await;
    assert_eq!(result, Err(MountError::TargetNotFound("#app".to_string())));
    assert!(!app.is_mounted());
    assert!(app.document().is_none());
}

#[tokio::test]
async fn test_mount_invalid_selector() {
    let mut app = App::new(TestApp).use_router(movie_router());

    let result = app.mount(Document::with_mount_point("app"), "body > #app").await;
    assert!(matches!(result, Err(MountError::InvalidSelector(_))));
    assert!(!app.is_mounted());
}

#[tokio::test]
async fn test_mount_without_router() {
    let mut app = App::new(TestApp);

    let result = app.mount(Document::with_mount_point("app"), "#app").await;
    assert_eq!(result, Err(MountError::RouterMissing));
}

#[tokio::test]
async fn test_mount_twice_is_rejected() {
    let mut app = mounted_app().await;

    let mut other = Document::with_mount_point("other");
    other.title = "Other".to_string();
    let result = app.mount(other, "#other").await;

    assert_eq!(result, Err(MountError::AlreadyMounted));

    // The first mount is untouched
    let document = app.document().unwrap();
    assert_eq!(document.title, "");
    assert_eq!(mounted_text(&app), "list");
}

#[tokio::test]
async fn test_mount_by_class_and_tag() {
    let mut document = Document::new();
    document
        .body
        .children
        .push(Element::new("main").with_class("shell").into());

    let mut app = App::new(TestApp).use_router(movie_router());
    app.mount(document, ".shell").await.unwrap();

    let main = app.document().unwrap().body.children[0]
        .as_element()
        .unwrap()
        .clone();
    assert_eq!(main.text_content(), "list");

    let mut document = Document::new();
    document.body.children.push(Element::new("main").into());
    let mut app = App::new(TestApp).use_router(movie_router());
    app.mount(document, "main").await.unwrap();
    assert_eq!(
        app.document().unwrap().body.children[0]
            .as_element()
            .unwrap()
            .text_content(),
        "list"
    );
}

#[tokio::test]
async fn test_layout_wraps_outlet() {
    struct Shell;

    impl Application for Shell {
        fn routes(&self) -> Vec<marquee::BoxedRoute> {
            TestApp.routes()
        }

        fn layout(&self, outlet: Node) -> Node {
            Element::new("main")
                .with_class("shell")
                .with_child(outlet)
                .into()
        }
    }

    let router = Router::new(Shell.routes(), History::web("/")).unwrap();
    let mut app = App::new(Shell).use_router(router);
    app.mount(Document::with_mount_point("app"), "#app")
        .await
        .unwrap();

    let markup = app.document().unwrap().body.to_string();
    assert_eq!(
        markup,
        r#"<body><div id="app"><main class="shell"><section class="movie-list">list</section></main></div></body>"#
    );
}
