//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::AppChrome;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::dashboards::{AdminDashboard, CompanyDashboard, StudentDashboard, TeacherDashboard};
use crate::pages::login::LoginPage;
use crate::pages::pending_internships::PendingInternshipsPage;
use crate::pages::pending_invitations::PendingInvitationsPage;
use crate::pages::profile::ProfilePage;
use crate::pages::reports::ReportsPage;
use crate::pages::user_management::UserManagementPage;
use crate::session::Page;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn page_view(page: Page) -> AnyView {
    match page {
        Page::Login => view! { <LoginPage/> }.into_any(),
        Page::StudentDashboard => view! { <StudentDashboard/> }.into_any(),
        Page::TeacherDashboard => view! { <TeacherDashboard/> }.into_any(),
        Page::CompanyDashboard => view! { <CompanyDashboard/> }.into_any(),
        Page::AdminDashboard => view! { <AdminDashboard/> }.into_any(),
        Page::PendingInvitations => view! { <PendingInvitationsPage/> }.into_any(),
        Page::PendingInternships => view! { <PendingInternshipsPage/> }.into_any(),
        Page::UserManagement => view! { <UserManagementPage/> }.into_any(),
        Page::ArchivedReports => view! { <ReportsPage/> }.into_any(),
        Page::Profile => view! { <ProfilePage/> }.into_any(),
    }
}

/// `page` behind the session gate, or as-is when it is public.
fn routed(page: Page) -> impl IntoView {
    let body = if page.required_roles().is_some() {
        view! { <ProtectedRoute page=page>{page_view(page)}</ProtectedRoute> }.into_any()
    } else {
        page_view(page)
    };
    view! {
        <Title text=page.title()/>
        {body}
    }
}

/// Root application component.
///
/// Every page in the route table gets one route; all but the login page sit
/// behind [`ProtectedRoute`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/internflow.css"/>
        <Title text="InternFlow"/>

        <Router>
            <AppChrome/>
            <main class="page-content">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| routed(Page::Login)/>
                    <Route path=StaticSegment(Page::StudentDashboard.segment()) view=|| routed(Page::StudentDashboard)/>
                    <Route path=StaticSegment(Page::TeacherDashboard.segment()) view=|| routed(Page::TeacherDashboard)/>
                    <Route path=StaticSegment(Page::CompanyDashboard.segment()) view=|| routed(Page::CompanyDashboard)/>
                    <Route path=StaticSegment(Page::AdminDashboard.segment()) view=|| routed(Page::AdminDashboard)/>
                    <Route
                        path=StaticSegment(Page::PendingInvitations.segment())
                        view=|| routed(Page::PendingInvitations)
                    />
                    <Route
                        path=StaticSegment(Page::PendingInternships.segment())
                        view=|| routed(Page::PendingInternships)
                    />
                    <Route path=StaticSegment(Page::UserManagement.segment()) view=|| routed(Page::UserManagement)/>
                    <Route path=StaticSegment(Page::ArchivedReports.segment()) view=|| routed(Page::ArchivedReports)/>
                    <Route path=StaticSegment(Page::Profile.segment()) view=|| routed(Page::Profile)/>
                </Routes>
            </main>
        </Router>
    }
}
