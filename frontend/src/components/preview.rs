use crate::app::{App, Msg};
use crate::controller::UiState;
use yew::prelude::*;

use super::utils::debounce;

pub fn render(app: &App, ctx: &Context<App>) -> Html {
    let Some(selected) = app.controller.selected() else {
        return html! {};
    };

    let link = ctx.link().clone();
    let loading = app.controller.state() == UiState::Loading;

    html! {
        <div id="preview-container" class="preview-container">
            {
                match &app.preview_url {
                    Some(url) => html! {
                        <img id="preview-image"
                            class="preview-image"
                            src={url.to_string()}
                            alt={selected.name.clone()} />
                    },
                    None => html! {
                        <div class="preview-placeholder">
                            <i class="fa-solid fa-spinner fa-spin"></i>
                            <p>{"Loading preview..."}</p>
                        </div>
                    },
                }
            }
            <p class="file-name">{ &selected.name }</p>

            { if loading {
                html! {
                    <div id="loading" class="loading">
                        <i class="fa-solid fa-spinner fa-spin"></i>
                        {" Analyzing leaf..."}
                    </div>
                }
            } else {
                html! {}
            }}

            <div class="button-container">
                <button
                    id="predict-btn"
                    class="predict-btn"
                    disabled={!app.controller.submit_enabled()}
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Submit)
                    })}
                >
                    { if loading {
                        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</> }
                    } else {
                        html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Predict"}</> }
                    }}
                </button>
                <button
                    id="reset-btn"
                    class="reset-btn"
                    onclick={debounce(300, {
                        let link = link.clone();
                        move || link.send_message(Msg::Reset)
                    })}
                >
                    <i class="fa-solid fa-rotate-left"></i>{" Reset"}
                </button>
            </div>
        </div>
    }
}
