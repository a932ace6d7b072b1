use super::resource::{PreviewKind, PreviewResource};
use leptos::prelude::*;

/// Inline preview for one selected file.
///
/// Renders nothing while no file is selected. PDFs are embedded through a
/// revocable object URL; Word documents and anything else get a fixed
/// advisory line. At most one object URL is live per mounted instance:
/// replacing the stored resource drops (and revokes) the previous one, and
/// teardown clears the last.
#[component]
#[allow(non_snake_case)]
pub fn FilePreview(
    file: RwSignal<Option<web_sys::File>, LocalStorage>,
    label: &'static str,
) -> impl IntoView {
    let resource = StoredValue::new_local(None::<PreviewResource>);
    let (preview_url, set_preview_url) = signal(None::<String>);

    Effect::new(move |_| {
        let next = file.with(|selection| {
            selection.as_ref().and_then(|f| {
                if PreviewKind::detect(&f.name(), &f.type_()) != PreviewKind::Pdf {
                    return None;
                }
                match PreviewResource::create(f) {
                    Ok(r) => Some(r),
                    Err(e) => {
                        log::error!("preview resource failed: {e}");
                        None
                    }
                }
            })
        });
        set_preview_url.set(next.as_ref().map(|r| r.url().to_string()));
        // Installing the new resource drops the prior one, which revokes
        // its URL.
        resource.set_value(next);
    });

    on_cleanup(move || {
        let _ = resource.try_set_value(None);
    });

    view! {
        <Show when=move || file.with(Option::is_some)>
            <div class="file-preview">
                <p class="file-preview__label">{label}</p>
                <p class="file-preview__name">
                    {move || {
                        file.with(|f| {
                            f.as_ref()
                                .map(|f| format!("File: {}", f.name()))
                                .unwrap_or_default()
                        })
                    }}
                </p>

                {move || {
                    let kind = file
                        .with(|f| f.as_ref().map(|f| PreviewKind::detect(&f.name(), &f.type_())));
                    match kind {
                        Some(PreviewKind::Pdf) => preview_url
                            .get()
                            .map(|url| {
                                view! {
                                    <iframe
                                        src=url
                                        class="file-preview__frame"
                                        title="File Preview"
                                    />
                                }
                                .into_any()
                            })
                            .unwrap_or_else(|| view! { <></> }.into_any()),
                        Some(PreviewKind::WordDocument) => view! {
                            <p class="file-preview__hint">
                                "Preview not supported for Word files. Please download to view."
                            </p>
                        }
                        .into_any(),
                        _ => view! {
                            <p class="file-preview__hint file-preview__hint--error">
                                "File preview not supported."
                            </p>
                        }
                        .into_any(),
                    }
                }}
            </div>
        </Show>
    }
}
