use crate::app::App;
use yew::prelude::*;

/// One banner for every error kind; it hides itself after five seconds via
/// the component's timer.
pub fn render(app: &App) -> Html {
    if let Some(message) = app.controller.error() {
        html! {
            <div id="error" class="error-message">
                <i class="fa-solid fa-circle-exclamation"></i>
                <p>{ message }</p>
            </div>
        }
    } else {
        html! {}
    }
}
