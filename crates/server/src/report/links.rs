//! Cross-links from dashboard rows to the per-server stats page and the
//! support search.

use url::form_urlencoded;

/// Builds the `<a>` fragments for the links column, relative to the
/// configured frontend base URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    frontend_url: String,
}

impl LinkBuilder {
    pub fn new(frontend_url: &str) -> Self {
        Self {
            frontend_url: frontend_url.trim_end_matches('/').to_string(),
        }
    }

    /// Usage-stats link, keyed by server id.
    pub fn stats_link(&self, server_id: i64) -> String {
        format!(
            r#"<a href="{}/activity/remote/{server_id}"><i class="fa fa-pie-chart"></i></a>"#,
            self.frontend_url
        )
    }

    /// Support-search link, keyed by hostname.
    pub fn support_link(&self, hostname: &str) -> String {
        let query: String = form_urlencoded::Serializer::new(String::new())
            .append_pair("q", hostname)
            .finish();
        format!(
            r#"<a href="{}/activity/remote/support?{query}"><i class="fa fa-gift"></i></a>"#,
            self.frontend_url
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_link_points_at_server_page() {
        let links = LinkBuilder::new("https://admin.example.com/");
        assert_eq!(
            links.stats_link(42),
            r#"<a href="https://admin.example.com/activity/remote/42"><i class="fa fa-pie-chart"></i></a>"#
        );
    }

    #[test]
    fn support_link_encodes_hostname() {
        let links = LinkBuilder::new("https://admin.example.com");
        let markup = links.support_link("chat.example.com");
        assert_eq!(
            markup,
            r#"<a href="https://admin.example.com/activity/remote/support?q=chat.example.com"><i class="fa fa-gift"></i></a>"#
        );
    }

    #[test]
    fn support_link_escapes_query_metacharacters() {
        let links = LinkBuilder::new("https://admin.example.com");
        let markup = links.support_link(r#"evil"&.example"#);
        assert!(markup.contains("q=evil%22%26.example"));
        assert!(!markup.contains(r#"evil"&"#));
    }
}
