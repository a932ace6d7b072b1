use super::api;
use contracts::domain::dataset::{infer_columns, DatasetRow};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// Full-screen dataset overlay.
///
/// Fetches the whole dataset once per open and renders it as a schema-less
/// table: the first row's keys are the columns, later rows fill in what
/// they have (missing keys are blank cells, extra keys become untitled
/// trailing cells). A fetch failure is logged and shown as the empty state.
/// Closing discards the rows; reopening fetches again.
#[component]
#[allow(non_snake_case)]
pub fn DatasetView(on_close: Callback<()>) -> impl IntoView {
    let (rows, set_rows) = signal(Vec::<DatasetRow>::new());
    let (loading, set_loading) = signal(true);

    // One request per mount; the Close button stays usable while it runs.
    spawn_local(async move {
        match api::fetch_dataset().await {
            Ok(data) => set_rows.set(data),
            Err(e) => log::error!("Error fetching dataset: {e}"),
        }
        set_loading.set(false);
    });

    let columns = Memo::new(move |_| rows.with(|r| infer_columns(r)));

    view! {
        <div class="dataset-view">
            <div class="dataset-view__header">
                <h2 class="dataset-view__title">"Dataset"</h2>
                <button
                    class="button button--danger"
                    on:click=move |_| on_close.run(())
                >
                    "Close"
                </button>
            </div>

            <div class="dataset-view__body">
                {move || {
                    if loading.get() {
                        return view! {
                            <p class="dataset-view__status">"Loading dataset..."</p>
                        }
                        .into_any();
                    }
                    if rows.with(Vec::is_empty) {
                        return view! {
                            <p class="dataset-view__status">"No data found."</p>
                        }
                        .into_any();
                    }
                    view! {
                        <div class="table">
                            <table class="table__data table--striped">
                                <thead class="table__head">
                                    <tr>
                                        {columns
                                            .get()
                                            .into_iter()
                                            .map(|column| {
                                                view! {
                                                    <th class="table__header-cell">{column}</th>
                                                }
                                            })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    {rows
                                        .get()
                                        .into_iter()
                                        .map(|row| {
                                            let header = columns.get();
                                            let mut cells: Vec<String> = header
                                                .iter()
                                                .map(|column| row.cell(column))
                                                .collect();
                                            cells.extend(row.extra_cells(&header));
                                            view! {
                                                <tr class="table__row">
                                                    {cells
                                                        .into_iter()
                                                        .map(|cell| {
                                                            view! {
                                                                <td class="table__cell">{cell}</td>
                                                            }
                                                        })
                                                        .collect_view()}
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any()
                }}
            </div>
        </div>
    }
}
