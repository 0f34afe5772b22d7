use crate::app::{App, Msg};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

use super::utils::debounce;

/// Upload entry points: a hidden file input reachable by click, and a drop
/// zone. Both feed the same `Msg::FileChosen` path, so validation is
/// identical for either route. Hidden once a file has been accepted; reset
/// brings it back.
pub fn render(app: &App, ctx: &Context<App>) -> Html {
    if app.controller.selected().is_some() {
        return html! {};
    }

    let link = ctx.link();

    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|file_list| file_list.item(0));

        // allow re-picking the same path after a rejection
        input.set_value("");

        Msg::FileChosen(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    let trigger_file_input = Callback::from(|_| {
        if let Some(input) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id("file-input"))
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                onchange={handle_change}
            />

            <div
                id="upload-area"
                class={classes!("upload-area", app.is_dragging.then_some("dragover"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                <div class="upload-placeholder">
                    <i class="fa-solid fa-cloud-arrow-up"></i>
                    <p>{"Drag & drop a leaf image here, or click to browse"}</p>
                    <p class="file-types">{"JPG, PNG or WEBP, up to 10MB"}</p>
                </div>
            </div>
        </>
    }
}
