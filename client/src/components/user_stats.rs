use leptos::prelude::*;

use crate::net::types::UserStats;

fn stat_card(class: &'static str, icon: &'static str, value: u64, label: String) -> impl IntoView {
    view! {
        <div class=format!("stat-card {class}")>
            <div class="stat-icon"><i class=format!("fas {icon}")></i></div>
            <div class="stat-content">
                <h3>{value}</h3>
                <p>{label}</p>
            </div>
        </div>
    }
}

/// Account totals, then one card per role.
#[component]
pub fn UserStatsGrid(stats: UserStats) -> impl IntoView {
    let by_role = stats
        .users_by_role
        .into_iter()
        .map(|(role, count)| stat_card("stat-role", "fa-user-tag", count, role))
        .collect_view();

    view! {
        <div class="stats-grid">
            {stat_card("stat-total", "fa-users", stats.total_users, "Total Users".to_owned())}
            {stat_card("stat-active", "fa-user-check", stats.active_users, "Active Users".to_owned())}
            {stat_card("stat-inactive", "fa-user-slash", stats.inactive_users, "Inactive Users".to_owned())}
            {by_role}
        </div>
    }
}
