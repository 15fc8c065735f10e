const DEFAULT_BASE_PATH: &str = "/";

pub fn build_base_path() -> &'static str {
    option_env!("PORTFOLIO_BASE_PATH")
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_BASE_PATH)
}

pub fn resolve_asset_url(path: &str) -> String {
    resolve_asset_url_with_base(build_base_path(), path)
}

pub fn resolve_asset_url_with_base(base: &str, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }

    if is_fully_qualified(path) {
        return path.to_string();
    }

    let normalized_path = path.trim_start_matches('/');
    if base.ends_with('/') {
        format!("{base}{normalized_path}")
    } else {
        format!("{base}/{normalized_path}")
    }
}

/// `//host/...` or `scheme://...`, where the scheme is ASCII letters only.
fn is_fully_qualified(path: &str) -> bool {
    if path.starts_with("//") {
        return true;
    }

    let Some((scheme, rest)) = path.split_once(':') else {
        return false;
    };

    !scheme.is_empty() && scheme.chars().all(|c| c.is_ascii_alphabetic()) && rest.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_path_resolves_to_empty_string() {
        assert_eq!(resolve_asset_url_with_base("/portfolio/", ""), "");
    }

    #[test]
    fn fully_qualified_urls_pass_through() {
        for url in [
            "https://cdn.example.com/image.png",
            "HTTP://cdn.example.com/image.png",
            "//cdn.example.com/image.png",
            "ftp://files.example.com/cv.pdf",
        ] {
            assert_eq!(resolve_asset_url_with_base("/portfolio/", url), url);
        }
    }

    #[test]
    fn relative_paths_are_rooted_at_the_base() {
        assert_eq!(resolve_asset_url_with_base("/", "/image3.png"), "/image3.png");
        assert_eq!(
            resolve_asset_url_with_base("/portfolio/", "/logos/aws-sa-pro.svg"),
            "/portfolio/logos/aws-sa-pro.svg"
        );
        assert_eq!(
            resolve_asset_url_with_base("/portfolio", "/logos/aws-sa-pro.svg"),
            "/portfolio/logos/aws-sa-pro.svg"
        );
        assert_eq!(resolve_asset_url_with_base("/", "image.png"), "/image.png");
    }

    #[test]
    fn leading_double_slash_is_protocol_relative() {
        assert_eq!(
            resolve_asset_url_with_base("/portfolio", "///profilepic.jpeg"),
            "///profilepic.jpeg"
        );
    }

    #[test]
    fn scheme_must_be_letters_followed_by_slashes() {
        assert_eq!(
            resolve_asset_url_with_base("/", "mailto:dan@example.com"),
            "/mailto:dan@example.com"
        );
        assert_eq!(resolve_asset_url_with_base("/", "c2://x"), "/c2://x");
    }

    #[test]
    fn page_shell_links_the_stylesheet() {
        let shell = include_str!("../index.html");

        assert!(shell.contains(r#"<link data-trunk rel="css" href="styles.css" />"#));
    }

    #[test]
    fn stylesheet_styles_the_state_hooks() {
        let stylesheet = include_str!("../styles.css");

        for hook in [
            ".certificates-panel {",
            ".certificates-panel--visible",
            ".certificates-panel[hidden]",
            ".timeline__item--active",
            ".about--visible",
            ".app--rtl",
            "var(--card-rotate-x",
            "var(--card-rotate-y",
            "var(--avatar-image)",
            "var(--portrait-image)",
            "var(--portrait-accent",
            "var(--certificate-logo)",
        ] {
            assert!(stylesheet.contains(hook), "{hook} is not styled");
        }
    }
}
