//! In-app routing. Paths come from CMS links after the site prefix is removed.

use url::form_urlencoded;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Page {
        slug: String,
    },
    Search {
        query: String,
    },
}

impl Route {
    /// Parse `/`, `/search?q=..` or `/{slug}`. Nested paths route to their last segment.
    pub fn parse(path: &str) -> Self {
        let path = path.split_once('#').map_or(path, |(path, _)| path);
        let (path, query) = path.split_once('?').unwrap_or((path, ""));
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["search"] => Route::Search {
                query: form_urlencoded::parse(query.as_bytes())
                    .find(|(key, _)| key == "q")
                    .map(|(_, value)| value.into_owned())
                    .unwrap_or_default(),
            },
            [.., slug] => Route::Page {
                slug: (*slug).to_string(),
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Page { slug } => format!("/{slug}"),
            Route::Search { query } => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .append_pair("q", query)
                    .finish();
                format!("/search?{encoded}")
            }
        }
    }

    /// Page slug this route shows; the home route maps to `home_slug`.
    pub fn slug<'a>(&'a self, home_slug: &'a str) -> Option<&'a str> {
        match self {
            Route::Home => Some(home_slug),
            Route::Page { slug } => Some(slug),
            Route::Search { .. } => None,
        }
    }
}
