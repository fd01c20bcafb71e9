use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{MenuView, PlayView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", MenuView)] Menu {},
        #[route("/play", PlayView)] Play {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "🏙️ Bird's Eye View" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
