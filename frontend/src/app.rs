use crate::api;
use crate::components::{error_banner, header, preview, result_card, theme_toggle, upload_zone};
use crate::config;
use crate::controller::{Controller, PredictOutcome, SelectedFile, ERROR_DISMISS_MS};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub enum Msg {
    // File selection (click-to-browse and drag-and-drop both land here)
    FileChosen(Option<web_sys::File>),
    HandleDrop(DragEvent),
    SetDragging(bool),
    PreviewReady(ObjectUrl),

    // Prediction round trip
    Submit,
    PredictionDone(u64, PredictOutcome),

    // UI state
    DismissError,
    Reset,
    ToggleTheme,
}

/// Root component. All upload/predict semantics live in [`Controller`]; this
/// type owns the browser-side resources the controller's state refers to
/// (the file blob, its object URL, the error banner timer) and the render
/// glue.
pub struct App {
    pub controller: Controller,
    pub file: Option<GlooFile>,
    pub preview_url: Option<ObjectUrl>,
    pub is_dragging: bool,
    pub theme: String,
    predict_url: String,
    error_timer: Option<Timeout>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            controller: Controller::new(),
            file: None,
            preview_url: None,
            is_dragging: false,
            theme: "light".to_string(),
            predict_url: config::predict_url(),
            error_timer: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::FileChosen(file) => self.handle_file_chosen(ctx, file),
            Msg::HandleDrop(event) => self.handle_drop(ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }
            Msg::PreviewReady(url) => self.handle_preview_ready(url),
            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionDone(seq, outcome) => self.handle_prediction_done(ctx, seq, outcome),
            Msg::DismissError => {
                self.error_timer = None;
                self.controller.dismiss_error();
                true
            }
            Msg::Reset => self.handle_reset(),
            Msg::ToggleTheme => self.handle_toggle_theme(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { header::render() }
                { theme_toggle::render(self, ctx) }

                <main class="main-content">
                    { upload_zone::render(self, ctx) }
                    { preview::render(self, ctx) }
                    { error_banner::render(self) }
                    { result_card::render(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Leaf Disease Classifier | Rust WASM"}</p>
                </footer>
            </div>
        }
    }
}

// Handler methods
impl App {
    fn handle_file_chosen(&mut self, ctx: &Context<Self>, file: Option<web_sys::File>) -> bool {
        let candidate = file.as_ref().map(|f| SelectedFile {
            name: f.name(),
            mime: f.type_(),
            size: f.size() as u64,
        });

        match self.controller.accept_file(candidate) {
            Ok(()) => {
                self.error_timer = None;
                if let Some(file) = file {
                    let file = GlooFile::from(file);
                    self.preview_url = None;
                    // decode step: the preview shows once the object URL
                    // message comes back around
                    ctx.link()
                        .send_message(Msg::PreviewReady(ObjectUrl::from(file.clone())));
                    self.file = Some(file);
                }
            }
            Err(err) => {
                log::warn!("Rejected file: {:?}", err);
                self.arm_error_timer(ctx);
            }
        }
        true
    }

    fn handle_drop(&mut self, ctx: &Context<Self>, event: DragEvent) -> bool {
        event.prevent_default();
        self.is_dragging = false;

        let file = event
            .data_transfer()
            .and_then(|data_transfer| data_transfer.files())
            .and_then(|file_list| file_list.item(0));
        self.handle_file_chosen(ctx, file)
    }

    fn handle_preview_ready(&mut self, url: ObjectUrl) -> bool {
        // a reset may have raced the preview message; drop the URL then
        if self.controller.selected().is_some() {
            self.preview_url = Some(url);
            true
        } else {
            false
        }
    }

    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        let Some(file) = self.file.clone() else {
            return false;
        };
        let Some(seq) = self.controller.begin_submit() else {
            return false;
        };

        self.error_timer = None;
        api::send_prediction_request(ctx, seq, file, self.predict_url.clone());
        true
    }

    fn handle_prediction_done(
        &mut self,
        ctx: &Context<Self>,
        seq: u64,
        outcome: PredictOutcome,
    ) -> bool {
        if !self.controller.finish_submit(seq, outcome) {
            log::warn!("Ignoring stale prediction response #{}", seq);
            return false;
        }
        if self.controller.error().is_some() {
            self.arm_error_timer(ctx);
        }
        true
    }

    fn handle_reset(&mut self) -> bool {
        self.controller.reset();
        self.file = None;
        self.preview_url = None;
        self.error_timer = None;
        clear_file_input();
        true
    }

    fn handle_toggle_theme(&mut self) -> bool {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return false;
        };

        if self.theme == "light" {
            self.theme = "dark".to_string();
            let _ = body.class_list().add_1("dark-mode");
        } else {
            self.theme = "light".to_string();
            let _ = body.class_list().remove_1("dark-mode");
        }
        true
    }

    /// Starts (or restarts) the banner's 5 second window. Assigning over the
    /// previous `Timeout` drops it, which cancels the old window.
    fn arm_error_timer(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.error_timer = Some(Timeout::new(ERROR_DISMISS_MS, move || {
            link.send_message(Msg::DismissError);
        }));
    }
}

fn clear_file_input() {
    let input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("file-input"))
        .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());

    if let Some(input) = input {
        input.set_value("");
    }
}
