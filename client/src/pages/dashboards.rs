//! Role landing pages.

#[cfg(test)]
#[path = "dashboards_test.rs"]
mod dashboards_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::alert::{Alert, AlertKind};
use crate::components::student_internships::StudentInternships;
use crate::components::user_stats::UserStatsGrid;
use crate::net::api;
use crate::net::types::{InvitationStatus, UserStats};
use crate::session::{BrowserSessionStore, Page, SystemClock, current_claims};
use crate::util::auth::surface_into;

/// "Welcome back, name" for the signed-in user.
#[must_use]
pub fn welcome(display_name: Option<&str>) -> String {
    match display_name.map(str::trim).filter(|n| !n.is_empty()) {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome back!".to_owned(),
    }
}

/// Share of `part` in `total` as a whole percentage.
#[must_use]
pub fn percent(part: u64, total: u64) -> u64 {
    if total == 0 { 0 } else { part.saturating_mul(100) / total }
}

fn greeting() -> RwSignal<String> {
    let text = RwSignal::new(welcome(None));
    Effect::new(move || {
        let claims = current_claims(&BrowserSessionStore, &SystemClock);
        text.set(welcome(claims.as_ref().and_then(|c| c.display_name.as_deref())));
    });
    text
}

#[component]
fn DashboardHeader(subtitle: &'static str) -> impl IntoView {
    let title = greeting();
    view! {
        <div class="dashboard-header">
            <h1>{move || title.get()}</h1>
            <p>{subtitle}</p>
        </div>
    }
}

#[component]
fn QuickLink(page: Page, icon: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <div class="quick-link">
            <A href=page.path()>
                <i class=format!("fas {icon}")></i>
                <span>{label}</span>
            </A>
        </div>
    }
}

#[component]
pub fn StudentDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-container">
            <DashboardHeader subtitle="Manage your internships and supervision requests"/>
            <StudentInternships/>
        </div>
    }
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let pending = RwSignal::new(None::<usize>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::teacher_invitations().await {
                Ok(all) => pending.set(Some(all.iter().filter(|i| i.status == InvitationStatus::Pending).count())),
                Err(e) => surface_into(&e, "Failed to load invitations", error),
            }
        });
    });

    view! {
        <div class="dashboard-container">
            <DashboardHeader subtitle="Supervise student internships"/>
            <Alert kind=AlertKind::Error message=error/>
            <div class="stats-grid">
                <div class="stat-card stat-pending">
                    <div class="stat-icon"><i class="fas fa-envelope"></i></div>
                    <div class="stat-content">
                        <h3>{move || pending.get().map_or_else(|| "-".to_owned(), |n| n.to_string())}</h3>
                        <p>"Pending Invitations"</p>
                    </div>
                </div>
            </div>
            <div class="quick-links">
                <QuickLink page=Page::PendingInvitations icon="fa-envelope-open-text" label="Review invitations"/>
                <QuickLink page=Page::ArchivedReports icon="fa-archive" label="Archived reports"/>
                <QuickLink page=Page::Profile icon="fa-user" label="Profile"/>
            </div>
        </div>
    }
}

#[component]
pub fn CompanyDashboard() -> impl IntoView {
    view! {
        <div class="dashboard-container">
            <DashboardHeader subtitle="Company space"/>
            <div class="empty-state">
                <i class="fas fa-building"></i>
                <h3>"Nothing to review yet"</h3>
                <p>"Internships hosted by your company will appear here."</p>
            </div>
        </div>
    }
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let stats = RwSignal::new(None::<UserStats>);
    let pending = RwSignal::new(None::<usize>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match api::user_stats().await {
                Ok(loaded) => stats.set(Some(loaded)),
                Err(e) => surface_into(&e, "Failed to load statistics", error),
            }
            match api::pending_internships().await {
                Ok(items) => pending.set(Some(items.len())),
                Err(e) => surface_into(&e, "Failed to load pending internships", error),
            }
        });
    });

    let active_share = move || {
        stats.with(|s| s.as_ref().map(|s| format!("{}% of accounts active", percent(s.active_users, s.total_users))))
    };

    view! {
        <div class="dashboard-container">
            <DashboardHeader subtitle="Platform overview"/>
            <Alert kind=AlertKind::Error message=error/>
            {move || stats.get().map(|stats| view! { <UserStatsGrid stats=stats/> })}
            <p class="stats-note">{active_share}</p>
            <div class="stats-grid">
                <div class="stat-card stat-pending">
                    <div class="stat-icon"><i class="fas fa-clock"></i></div>
                    <div class="stat-content">
                        <h3>{move || pending.get().map_or_else(|| "-".to_owned(), |n| n.to_string())}</h3>
                        <p>"Internships awaiting approval"</p>
                    </div>
                </div>
            </div>
            <div class="quick-links">
                <QuickLink page=Page::PendingInternships icon="fa-clipboard-check" label="Review internships"/>
                <QuickLink page=Page::UserManagement icon="fa-users-cog" label="Manage users"/>
                <QuickLink page=Page::ArchivedReports icon="fa-archive" label="Archived reports"/>
            </div>
        </div>
    }
}
