use dioxus::prelude::*;
use dioxus_router::use_navigator;

use guess_core::model::Category;
use services::GameService;

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn MenuView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut selected = use_signal(|| GameService::list_categories()[0].id);
    let start_error = use_signal(String::new);

    let total = ctx.with_game(|game| game.total_entries());

    let start_game = {
        let ctx = ctx.clone();
        move |hard_mode: bool| {
            let mut start_error = start_error;
            let Ok(category) = Category::new(selected()) else {
                return;
            };
            match ctx.with_game(|game| game.start_session(&category, hard_mode)) {
                Ok(_) => {
                    let _ = navigator.push(Route::Play {});
                }
                Err(err) => start_error.set(err.to_string()),
            }
        }
    };
    let start_easy = start_game.clone();
    let start_hard = start_game;

    rsx! {
        div { class: "page menu-page",
            p { class: "view-hint",
                "The goal is to guess the US cities shown in the satellite image."
            }

            header { class: "view-header",
                h2 { class: "view-title", "1. Select Game Type" }
                p { class: "view-subtitle", "Which cities would you like to guess?" }
            }
            div { class: "mode-options",
                for info in GameService::list_categories() {
                    label { class: "mode-option",
                        input {
                            r#type: "radio",
                            name: "category",
                            value: "{info.id}",
                            checked: selected() == info.id,
                            onchange: move |_| selected.set(info.id),
                        }
                        span { "{info.display_name}" }
                    }
                }
            }

            h3 { class: "menu-subtitle", "Choose Your Difficulty" }
            div { class: "menu-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| start_easy(false),
                    "Start Easy Game"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| start_hard(true),
                    "Start Hard Game (Rotated)"
                }
            }

            if !start_error().is_empty() {
                p { class: "form-error", "{start_error()}" }
            }

            div { class: "view-divider" }
            p { class: "menu-caption", "Total cities available: {total}" }
        }
    }
}
