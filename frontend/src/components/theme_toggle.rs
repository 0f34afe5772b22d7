use crate::app::{App, Msg};
use yew::prelude::*;

pub fn render(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if app.theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if app.theme == "light" {
                    html! { <i class="fa-solid fa-sun"></i> }
                } else {
                    html! { <i class="fa-solid fa-moon"></i> }
                }}
            </button>
        </div>
    }
}
