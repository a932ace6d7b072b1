use contracts::domain::submission::{skill_summary, SubmissionResult};
use leptos::prelude::*;

/// Anchor id the view model scrolls to after a successful submission
pub const RESULT_BLOCK_ID: &str = "submission-result";

/// Single-row table for the freshly inserted comparison, with the flattened
/// matched/missing skill lists underneath.
#[component]
#[allow(non_snake_case)]
pub fn SubmissionResultView(result: SubmissionResult) -> impl IntoView {
    let matched = skill_summary(result.matched_skills.iter().map(|s| s.skill.as_str()));
    let missing = skill_summary(result.missing_skills.iter().map(|s| s.skill.as_str()));

    view! {
        <div id=RESULT_BLOCK_ID class="submission-result">
            <h2 class="submission-result__title">"Inserted Row"</h2>

            <div class="table">
                <table class="table__data">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Resume"</th>
                            <th class="table__header-cell">"Job Description"</th>
                            <th class="table__header-cell">"TF-IDF Similarity"</th>
                            <th class="table__header-cell">"Jaccard Similarity"</th>
                            <th class="table__header-cell">"Length Ratio"</th>
                            <th class="table__header-cell">"No of Matched Skills"</th>
                            <th class="table__header-cell">"No of Missing Skills"</th>
                            <th class="table__header-cell">"Category"</th>
                            <th class="table__header-cell">"Score"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <tr class="table__row">
                            <td class="table__cell">{result.resume.clone()}</td>
                            <td class="table__cell">{result.job_description.clone()}</td>
                            <td class="table__cell">{result.tfidf_similarity}</td>
                            <td class="table__cell">{result.jaccard_similarity}</td>
                            <td class="table__cell">{result.length_ratio}</td>
                            <td class="table__cell">{result.matched_skill_count}</td>
                            <td class="table__cell">{result.missing_skill_count}</td>
                            <td class="table__cell submission-result__category">
                                {result.category.clone()}
                            </td>
                            <td class="table__cell">{result.score}</td>
                        </tr>
                    </tbody>
                </table>
            </div>

            <div class="submission-result__skills">
                <p>
                    <strong>"Matched skills: "</strong>
                    {matched}
                </p>
                <p>
                    <strong>"Missing skills: "</strong>
                    {missing}
                </p>
            </div>
        </div>
    }
}
