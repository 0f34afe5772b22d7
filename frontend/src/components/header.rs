use yew::prelude::*;

pub fn render() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-leaf"></i>{" Leaf Disease Classifier"}</h1>
            <p class="subtitle">{"Upload a leaf photo to check it for disease"}</p>
        </header>
    }
}
