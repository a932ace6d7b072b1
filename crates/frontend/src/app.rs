use crate::domain::dataset::ui::DatasetView;
use crate::domain::preview::ui::FilePreview;
use crate::domain::submission::ui::UploadForm;
use leptos::prelude::*;

/// Root shell: owns the two file selections, the preview/dataset visibility
/// flags, and the count of rows submitted this session.
#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    // File handles are JS values, so they live in thread-local signals.
    let resume = RwSignal::new_local(None::<web_sys::File>);
    let jd_file = RwSignal::new_local(None::<web_sys::File>);

    let (show_preview, set_show_preview) = signal(false);
    let (show_dataset, set_show_dataset) = signal(false);
    // Bumped by the form after every accepted submission.
    let (submitted_rows, set_submitted_rows) = signal(0u32);

    view! {
        <div class="app">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Resume / JD Matcher"</h1>
                    <Show when={move || submitted_rows.get() > 0}>
                        <span class="header__subtitle">
                            {move || format!("Rows added this session: {}", submitted_rows.get())}
                        </span>
                    </Show>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--secondary"
                        disabled=move || show_dataset.get()
                        on:click=move |_| set_show_dataset.set(true)
                    >
                        "View Dataset"
                    </button>
                </div>
            </div>

            <div class="app__columns">
                <div class="app__pane">
                    <UploadForm
                        resume=resume
                        jd_file=jd_file
                        on_preview=Callback::new(move |_| set_show_preview.set(true))
                        on_submitted=Callback::new(move |_| {
                            set_submitted_rows.update(|n| *n += 1)
                        })
                    />
                </div>

                <div class="app__pane preview-pane">
                    <h2 class="preview-pane__title">"Preview Uploaded Files"</h2>
                    <Show
                        when=move || show_preview.get()
                        fallback=|| {
                            view! {
                                <p class="preview-pane__hint">
                                    "File previews will appear here after you click the "
                                    <strong>"\"Preview Files\""</strong>
                                    " button."
                                </p>
                            }
                        }
                    >
                        <FilePreview file=resume label="Resume Preview:" />
                        <FilePreview file=jd_file label="Job Description Preview:" />
                    </Show>
                </div>
            </div>

            <Show when=move || show_dataset.get()>
                <DatasetView on_close=Callback::new(move |_| set_show_dataset.set(false)) />
            </Show>
        </div>
    }
}
