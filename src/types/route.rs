use serde::{Deserialize, Serialize};

/// One of the five fixed client-side routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Route {
    /// All routes in navigation-bar order.
    pub const ALL: [Route; 5] = [
        Route::Home,
        Route::Projects,
        Route::Skills,
        Route::Certifications,
        Route::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Projects => "/projects",
            Route::Skills => "/skills",
            Route::Certifications => "/certifications",
            Route::Contact => "/contact",
        }
    }

    /// Label used in the navigation bar.
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
            Route::Skills => "Skills",
            Route::Certifications => "Certifications",
            Route::Contact => "Contact",
        }
    }

    /// Resolves a location path to a route.
    ///
    /// Query strings, fragments and a single trailing slash are ignored.
    /// Matching is exact otherwise; unknown paths yield `None`.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or("")
            .trim();
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };
        match path {
            "" | "/" => Some(Route::Home),
            "/projects" => Some(Route::Projects),
            "/skills" => Some(Route::Skills),
            "/certifications" => Some(Route::Certifications),
            "/contact" => Some(Route::Contact),
            _ => None,
        }
    }
}
