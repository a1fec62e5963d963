pub const HOME_PAGE: &str = "index.html";

pub fn is_home(path: &str, home_page: &str) -> bool {
    path.ends_with(home_page) || path.ends_with('/') || path.len() < 2
}

/// Same-page jump on the home document, navigate-then-jump everywhere else.
pub fn resolve(anchor: &str, path: &str, home_page: &str) -> String {
    if is_home(path, home_page) {
        anchor.to_string()
    } else {
        format!("{home_page}{anchor}")
    }
}

pub fn is_current_page(path: &str, filename: &str) -> bool {
    !filename.is_empty() && path.contains(filename)
}
