//! HTML index of the mounted routes.

use crate::routes::ROUTES;
use axum::response::Html;

pub async fn sitemap() -> Html<String> {
    let mut items = String::new();
    for (method, path) in ROUTES {
        // Parameterized paths are listed but not linked.
        if *method == "GET" && !path.contains(':') {
            items.push_str(&format!(
                "<li><a href=\"{path}\">{method} {path}</a></li>\n"
            ));
        } else {
            items.push_str(&format!("<li>{method} {path}</li>\n"));
        }
    }
    Html(format!(
        "<!doctype html>\n<html>\n<head><title>{name} API</title></head>\n<body>\n\
         <h1>{name} API</h1>\n<p>Available endpoints:</p>\n<ul>\n{items}</ul>\n</body>\n</html>\n",
        name = env!("CARGO_PKG_NAME"),
    ))
}
