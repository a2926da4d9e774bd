//! Main application component and routes

use dioxus::prelude::*;

use crate::components::ConsoleLayout;
use crate::hooks::use_api_provider;
use crate::pages::{CoursesPage as Courses, Dashboard, MediaPage as Media, StudentsPage as Students};

/// Utility classes are served from the Tailwind play CDN
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(ConsoleLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/courses")]
        Courses {},
        #[route("/students")]
        Students {},
        #[route("/media")]
        Media {},
}

#[component]
pub fn App() -> Element {
    use_api_provider();

    rsx! {
        document::Title { "ECA Admin Console" }
        document::Script { src: TAILWIND_CDN }
        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/");
        assert_eq!(Route::Courses {}.to_string(), "/courses");
        assert_eq!(Route::from_str("/students").ok(), Some(Route::Students {}));
        assert_eq!(Route::from_str("/media").ok(), Some(Route::Media {}));
    }
}
