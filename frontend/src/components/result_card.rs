use crate::app::App;
use yew::prelude::*;

pub fn render(app: &App) -> Html {
    let Some(result) = app.controller.result() else {
        return html! {};
    };

    html! {
        <div id="result-container" class={classes!("result-container", result.verdict.css_class())}>
            <h2 id="result-title">{ format!("Result: {}", result.class) }</h2>
            <p id="result-confidence">{ format!("Confidence: {}%", result.confidence_pct) }</p>
        </div>
    }
}
