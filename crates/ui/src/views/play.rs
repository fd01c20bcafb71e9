use dioxus::prelude::*;
use dioxus_router::use_navigator;

use services::GamePhase;

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{format_percent, image_data_url, map_history_rows};

#[component]
pub fn PlayView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut guess = use_signal(String::new);
    let input_error = use_signal(String::new);
    // Bumped after every accepted action so the view re-reads facade state.
    let revision = use_signal(|| 0u32);

    // Subscribe before reading: any bump re-renders this view.
    let _ = revision();

    let phase = ctx.with_game(|game| game.phase());
    let summary = ctx.with_game(|game| game.summary());
    let last = ctx.with_game(|game| game.last_round());

    let return_to_menu = {
        let ctx = ctx.clone();
        move |_| {
            ctx.with_game(|game| game.reset_to_menu());
            let _ = navigator.push(Route::Menu {});
        }
    };

    match phase {
        GamePhase::NotStarted => rsx! {
            div { class: "page",
                p { "No game in progress." }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: return_to_menu,
                    "⬅️ Return to Main Menu"
                }
            }
        },

        GamePhase::Finished => {
            let rows = map_history_rows(&summary);
            let accuracy = format_percent(summary.accuracy);
            rsx! {
                div { class: "page end-page",
                    h2 { "🎉 Game Over!" }

                    if let Some(last) = last {
                        section { class: "final-round",
                            h3 { "Final Round Results" }
                            if last.correct {
                                p { class: "result-banner result-banner--win",
                                    "CORRECT! Final guess: {last.guess}"
                                }
                            } else {
                                p { class: "result-banner result-banner--loss",
                                    "INCORRECT. Final guess: {last.guess}"
                                }
                            }
                            p { class: "result-answer", "The last city was: {last.answer}" }
                        }
                    }

                    div { class: "view-divider" }
                    section { class: "game-summary",
                        h3 { "Game Summary" }
                        div { class: "metric",
                            span { class: "metric-label", "Final Accuracy" }
                            span { class: "metric-value", "{accuracy}" }
                        }
                        p { "You got {summary.games_won} out of {summary.games_played} correct." }
                    }

                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: return_to_menu,
                        "Return to Main Menu"
                    }

                    div { class: "view-divider" }
                    table { class: "history-table",
                        thead {
                            tr {
                                th { "Image" }
                                th { "Your Guess" }
                                th { "Correct Answer" }
                                th { "Result" }
                            }
                        }
                        tbody {
                            for row in rows {
                                tr {
                                    td { "{row.round}" }
                                    td { "{row.guess}" }
                                    td { "{row.answer}" }
                                    td { "{row.result_icon}" }
                                }
                            }
                        }
                    }
                }
            }
        }

        GamePhase::Playing => {
            let round = ctx.with_game(|game| game.current_round());
            let Some(round) = round else {
                return rsx! {
                    div { class: "page",
                        p { "No round to show." }
                    }
                };
            };
            let image = ctx.with_game(|game| game.round_image());

            let image = match image {
                Ok(payload) => payload,
                Err(err) => {
                    // A missing image halts the game rather than skipping
                    // the round.
                    return rsx! {
                        div { class: "page",
                            div { class: "fatal",
                                p { "Error: {err}" }
                                p { "The game cannot continue without this round's image." }
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: return_to_menu,
                                "⬅️ Return to Main Menu"
                            }
                        }
                    };
                }
            };

            let submit = {
                let ctx = ctx.clone();
                move || {
                    let mut guess = guess;
                    let mut input_error = input_error;
                    let mut revision = revision;
                    let text = guess();
                    match ctx.with_game(|game| game.submit_guess(&text)) {
                        Ok(_) => {
                            guess.set(String::new());
                            input_error.set(String::new());
                            revision += 1;
                        }
                        Err(err) => input_error.set(err.to_string()),
                    }
                }
            };
            let submit_click = submit.clone();
            let submit_key = submit;

            let src = image_data_url(&image);
            let caption = if round.hard_mode {
                "Image is randomly rotated (Hard Mode)"
            } else {
                "Image is in original orientation (Easy Mode)"
            };
            let progress_pct =
                f64::from(round.round_number) / round.total_rounds.max(1) as f64 * 100.0;
            let win_rate = format_percent(summary.accuracy);

            rsx! {
                div { class: "page play-page",
                    div { class: "play-columns",
                        section { class: "play-image-panel",
                            h3 { "❓ Current City to Guess" }
                            img {
                                class: "round-image",
                                src: "{src}",
                                alt: "Satellite image of a US city",
                            }
                            p { class: "image-caption", "{caption}" }
                        }

                        section { class: "play-side-panel",
                            h3 { "Score and Play Area" }
                            div { class: "scorecard",
                                div { class: "progress-block",
                                    p { class: "progress-label",
                                        "Progress: {round.round_number} / {round.total_rounds}"
                                    }
                                    div { class: "progress-track",
                                        div {
                                            class: "progress-fill",
                                            style: "width: {progress_pct}%",
                                        }
                                    }
                                }
                                div { class: "metric",
                                    span { class: "metric-label", "Win Rate" }
                                    span { class: "metric-value", "{win_rate}" }
                                    if summary.games_played > 0 {
                                        span { class: "metric-delta", "{summary.games_won} Wins" }
                                    }
                                }
                            }

                            div { class: "view-divider" }
                            div { class: "guess-form",
                                input {
                                    class: "guess-input",
                                    r#type: "text",
                                    placeholder: "e.g., New York City, Houston, Denver...",
                                    value: "{guess()}",
                                    oninput: move |evt| guess.set(evt.value()),
                                    onkeydown: move |evt| {
                                        if evt.key() == Key::Enter {
                                            submit_key();
                                        }
                                    },
                                }
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    onclick: move |_| submit_click(),
                                    "Submit Guess and See Next City"
                                }
                            }

                            if let Some(last) = last {
                                div { class: "previous-result",
                                    h4 { "➡️ Previous Result" }
                                    if last.correct {
                                        p { class: "result-banner result-banner--win",
                                            "CORRECT! You guessed: {last.guess}"
                                        }
                                    } else {
                                        p { class: "result-banner result-banner--loss",
                                            "INCORRECT. Your guess: {last.guess}"
                                        }
                                    }
                                    p { class: "result-answer",
                                        "The correct answer was: {last.answer}"
                                    }
                                }
                            } else {
                                p { class: "view-hint", "Submit your first guess to start scoring!" }
                            }

                            if !input_error().is_empty() {
                                p { class: "form-error", "{input_error()}" }
                            }

                            div { class: "view-divider" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: return_to_menu,
                                "⬅️ Return to Main Menu"
                            }
                        }
                    }
                }
            }
        }
    }
}
