use super::super::{api, model};
use contracts::domain::submission::SubmissionResult;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel for the upload form
///
/// Owns every mutable field of the draft plus the in-flight flag and the
/// last result. The file selections belong to the root shell (the preview
/// pane reads them too) and are handed in at construction.
#[derive(Clone, Copy)]
pub struct UploadFormViewModel {
    pub resume: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub jd_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    pub jd_text: RwSignal<String>,
    pub category: RwSignal<String>,
    pub score: RwSignal<String>,
    pub submitting: RwSignal<bool>,
    pub result: RwSignal<Option<SubmissionResult>>,
}

impl UploadFormViewModel {
    pub fn new(
        resume: RwSignal<Option<web_sys::File>, LocalStorage>,
        jd_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    ) -> Self {
        Self {
            resume,
            jd_file,
            jd_text: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            score: RwSignal::new(String::new()),
            submitting: RwSignal::new(false),
            result: RwSignal::new(None),
        }
    }

    fn jd_source(&self) -> model::JdSource {
        model::jd_source(self.jd_file.get(), &self.jd_text.get())
    }

    /// Reveal the preview pane, provided both documents are selected.
    pub fn preview_command(&self, on_preview: Callback<()>) {
        if self.resume.with(Option::is_none) || !self.jd_source().has_content() {
            notify("Please upload resume and either JD file or JD text to preview.");
            return;
        }
        on_preview.run(());
    }

    /// Validate the draft and send it to `/process`.
    ///
    /// Missing fields block before any network call. While the request is in
    /// flight the submit control is disabled and re-entry is refused, so at
    /// most one `/process` call is outstanding per form instance. On failure
    /// the previous result is left untouched.
    pub fn submit_command(&self, on_submitted: Callback<()>) {
        if self.submitting.get() {
            return;
        }

        let missing = model::missing_fields(
            self.resume.with(Option::is_some),
            self.jd_source().has_content(),
            &self.category.get(),
            &self.score.get(),
        );
        if !missing.is_empty() {
            notify("All fields are required!");
            return;
        }

        let Some(resume) = self.resume.get() else {
            return;
        };
        let jd = self.jd_source();
        let category = self.category.get();
        let score = self.score.get();
        let vm = *self;

        self.submitting.set(true);
        spawn_local(async move {
            match api::process_submission(&resume, &jd, &category, &score).await {
                Ok(result) => {
                    vm.result.set(Some(result));
                    on_submitted.run(());
                    // Let the result block render before scrolling to it.
                    TimeoutFuture::new(200).await;
                    scroll_result_into_view();
                }
                Err(e) => {
                    log::error!("process request failed: {e}");
                    notify("Something went wrong!");
                }
            }
            vm.submitting.set(false);
        });
    }
}

/// Blocking user notice for validation and submit failures
fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn scroll_result_into_view() {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(super::result::RESULT_BLOCK_ID));
    if let Some(element) = element {
        element.scroll_into_view();
    }
}
