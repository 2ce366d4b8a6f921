//! Archived reports with name search and status filter.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::Report;
use crate::state::reports::{ReportFilter, StatusFilter, report_status};
use crate::util::auth::surface_into;
use crate::util::files::file_icon;

fn report_card(report: Report) -> impl IntoView {
    let status = report_status(&report).to_owned();
    view! {
        <div class="report-card">
            <div class="report-card__header">
                <div class="file-icon"><i class=format!("fas {}", file_icon(report.file_type.as_deref()))></i></div>
                <div class="report-info">
                    <h3>{report.name.clone().unwrap_or_default()}</h3>
                    <span class="report-date">{report.created_at.clone().unwrap_or_else(|| "Unknown date".to_owned())}</span>
                </div>
                <span class=format!("status-badge {status}")>{status.clone()}</span>
            </div>
            <div class="report-description">
                <p>{report.description.clone().unwrap_or_else(|| "No description available".to_owned())}</p>
            </div>
            <div class="report-actions">
                {report.file_path.clone().map(|path| view! {
                    <a class="download-btn" href=api::media_url(&path) target="_blank" rel="noopener noreferrer">
                        <i class="fas fa-download"></i>" Download"
                    </a>
                })}
            </div>
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let reports = RwSignal::new(Vec::<Report>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let filter = RwSignal::new(ReportFilter::default());
    let attempt = RwSignal::new(0_u32);
    let retryable = RwSignal::new(false);

    Effect::new(move || {
        attempt.track();
        loading.set(true);
        error.set(None);
        leptos::task::spawn_local(async move {
            match api::reports().await {
                Ok(list) => reports.set(list),
                Err(e) => {
                    retryable.set(e.is_retryable());
                    surface_into(&e, "Failed to fetch reports", error);
                }
            }
            loading.set(false);
        });
    });

    let visible = Memo::new(move |_| filter.with(|f| reports.with(|all| f.apply(all))));

    view! {
        <div class="report-container">
            <div class="report-header">
                <h1><i class="fas fa-archive"></i>" Archived Reports"</h1>
                <p>"Manage and access your archived reports"</p>
            </div>
            <div class="report-controls">
                <div class="search-box">
                    <i class="fas fa-search"></i>
                    <input
                        type="text"
                        placeholder="Search reports..."
                        prop:value=move || filter.with(|f| f.search.clone())
                        on:input=move |ev| filter.update(|f| f.search = event_target_value(&ev))
                    />
                </div>
                <select
                    prop:value=move || filter.with(|f| f.status.value())
                    on:change=move |ev| filter.update(|f| f.status = StatusFilter::parse(&event_target_value(&ev)))
                >
                    {StatusFilter::ALL
                        .into_iter()
                        .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {move || {
                if loading.get() {
                    return view! { <div class="loading-state"><p>"Loading reports..."</p></div> }.into_any();
                }
                if let Some(message) = error.get() {
                    return view! {
                        <div class="error-state">
                            <i class="fas fa-exclamation-triangle"></i>
                            <p>{message}</p>
                            <Show when=move || retryable.get()>
                                <button on:click=move |_| attempt.update(|n| *n += 1)>"Retry"</button>
                            </Show>
                        </div>
                    }
                    .into_any();
                }
                let shown = visible.get();
                if shown.is_empty() {
                    return view! {
                        <div class="empty-state">
                            <i class="fas fa-folder-open"></i>
                            <h3>"No reports found"</h3>
                            <p>"Try adjusting your search or filter criteria"</p>
                        </div>
                    }
                    .into_any();
                }
                let total = reports.with(Vec::len);
                let count = shown.len();
                view! {
                    <div class="reports-grid">{shown.into_iter().map(report_card).collect_view()}</div>
                    <div class="report-summary"><p>{format!("Showing {count} of {total} reports")}</p></div>
                }
                .into_any()
            }}
        </div>
    }
}
