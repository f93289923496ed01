use marquee::{StyleRule, Stylesheet};

pub fn stylesheet() -> Stylesheet {
    Stylesheet::new(
        "style.css",
        vec![
            StyleRule::new(
                "body",
                &[
                    ("margin", "0"),
                    ("font-family", "system-ui, sans-serif"),
                    ("background", "#111"),
                    ("color", "#eee"),
                ],
            ),
            StyleRule::new(
                ".movie-browser",
                &[("max-width", "960px"), ("margin", "0 auto"), ("padding", "16px")],
            ),
            StyleRule::new(".title", &[("font-size", "22px"), ("font-weight", "800")]),
            StyleRule::new(".back", &[("color", "#8ab4f8"), ("text-decoration", "none")]),
        ],
    )
}
