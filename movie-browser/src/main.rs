mod routes;
mod stylesheet;

use std::ffi::OsString;

use kv_log_macro as log;

use marquee::{App, Application, BoxedRoute, Config, Document, Element, Node, Result, Router};

const CONFIG_ENV: &str = "MARQUEE_CONFIG";
const MOUNT_POINT_ID: &str = "app";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_some() {
        env_logger::init();
    } else {
        marquee::init_logging();
    }

    let config = load_config(std::env::var_os(CONFIG_ENV))?;

    let mut app = bootstrap(&config).await?;
    println!("{}", render(&app));

    for path in std::env::args().skip(1) {
        if app.push(&path).await? {
            println!("{}", render(&app));
        } else {
            log::info!("Already at location", { path: path });
        }
    }

    Ok(())
}

/// Reads the configuration file `path` names, or the defaults when unset.
fn load_config(path: Option<OsString>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}

/// Builds the router, attaches it to the root component and mounts the
/// result into a fresh host document.
async fn bootstrap(config: &Config) -> Result<App<MovieBrowser>> {
    let mut document = Document::with_mount_point(MOUNT_POINT_ID);
    document.title = config.title.clone();
    document.adopt_stylesheet(stylesheet::stylesheet());

    let router = Router::new(MovieBrowser.routes(), config.history())?;
    let mut app = App::new(MovieBrowser).use_router(router);
    app.mount(document, &config.mount_selector).await?;

    Ok(app)
}

fn render(app: &App<MovieBrowser>) -> String {
    app.document().map(|d| d.to_string()).unwrap_or_default()
}

#[derive(Copy, Clone)]
struct MovieBrowser;

impl Application for MovieBrowser {
    fn routes(&self) -> Vec<BoxedRoute> {
        vec![Box::new(routes::MovieListRoute), Box::new(routes::MovieRoute)]
    }

    fn layout(&self, outlet: Node) -> Node {
        Element::new("main")
            .with_class("movie-browser")
            .with_child(outlet)
            .into()
    }
}
