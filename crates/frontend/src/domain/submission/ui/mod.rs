pub mod result;
pub mod view_model;

use super::model;
use contracts::enums::match_category::MatchCategory;
use leptos::prelude::*;
use result::SubmissionResultView;
use view_model::UploadFormViewModel;
use wasm_bindgen::JsCast;

/// The upload form: résumé file, JD file or pasted text, category, score.
///
/// The two file selections live in the root shell so the preview pane can
/// read them; everything else is owned by the view model.
#[component]
#[allow(non_snake_case)]
pub fn UploadForm(
    resume: RwSignal<Option<web_sys::File>, LocalStorage>,
    jd_file: RwSignal<Option<web_sys::File>, LocalStorage>,
    on_preview: Callback<()>,
    on_submitted: Callback<()>,
) -> impl IntoView {
    let vm = UploadFormViewModel::new(resume, jd_file);

    let handle_resume_select = move |ev: web_sys::Event| {
        resume.set(selected_file(&ev));
    };
    let handle_jd_select = move |ev: web_sys::Event| {
        jd_file.set(selected_file(&ev));
    };

    view! {
        <div class="upload-form">
            <form
                class="upload-form__body"
                on:submit=move |ev| {
                    ev.prevent_default();
                    vm.submit_command(on_submitted);
                }
            >
                <h1 class="upload-form__title">"Dataset Row Insertion"</h1>

                <div class="form-group">
                    <label for="resume">"Upload Resume:"</label>
                    <input
                        id="resume"
                        type="file"
                        accept=model::RESUME_ACCEPT
                        on:change=handle_resume_select
                    />
                </div>

                <div class="form-group">
                    <label for="jd">"Upload Job Description:"</label>
                    <input
                        id="jd"
                        type="file"
                        accept=model::RESUME_ACCEPT
                        disabled=move || !vm.jd_text.get().trim().is_empty()
                        on:change=handle_jd_select
                    />
                </div>

                <div class="form-group">
                    <label for="jd-text">"Enter Job Description:"</label>
                    <textarea
                        id="jd-text"
                        rows="5"
                        placeholder="Enter job description text here..."
                        prop:value=move || vm.jd_text.get()
                        disabled=move || jd_file.with(Option::is_some)
                        on:input=move |ev| vm.jd_text.set(event_target_value(&ev))
                    />
                </div>

                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| vm.preview_command(on_preview)
                >
                    "Preview Files"
                </button>

                <div class="form-group">
                    <label for="category">"Choose your evaluation category:"</label>
                    <select
                        id="category"
                        on:change=move |ev| vm.category.set(event_target_value(&ev))
                    >
                        <option value="" selected=move || vm.category.get().is_empty()>
                            "-- Select --"
                        </option>
                        {MatchCategory::all()
                            .into_iter()
                            .map(|category| {
                                let code = category.code();
                                view! {
                                    <option value=code selected=move || vm.category.get() == code>
                                        {category.display_name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="score">"Enter Score (out of 100):"</label>
                    <input
                        id="score"
                        type="number"
                        placeholder="Score"
                        prop:value=move || vm.score.get()
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if model::accept_score_input(&value) {
                                vm.score.set(value);
                            } else if let Some(input) = event_input_element(&ev) {
                                // The DOM already holds the rejected keystroke;
                                // write the accepted value back.
                                input.set_value(&vm.score.get_untracked());
                            }
                        }
                    />
                </div>

                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || vm.submitting.get()
                >
                    {move || if vm.submitting.get() { "Processing..." } else { "Submit" }}
                </button>
            </form>

            {move || {
                vm.result
                    .get()
                    .map(|result| view! { <SubmissionResultView result=result /> })
            }}
        </div>
    }
}

fn event_input_element(ev: &web_sys::Event) -> Option<web_sys::HtmlInputElement> {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// First file of a file input's selection, if any
fn selected_file(ev: &web_sys::Event) -> Option<web_sys::File> {
    event_input_element(ev)?.files().and_then(|files| files.get(0))
}
