use super::*;

#[test]
fn join_normalizes_slashes() {
    assert_eq!(join("http://h:8000/", "/auth/login/"), "http://h:8000/auth/login/");
    assert_eq!(join("http://h:8000", "auth/login/"), "http://h:8000/auth/login/");
}

#[test]
fn base_url_has_no_trailing_path() {
    assert!(base_url().starts_with("http"));
    assert_eq!(endpoint("auth/get-user/"), format!("{}/auth/get-user/", base_url().trim_end_matches('/')));
}

#[test]
fn media_url_resolves_relative_paths() {
    let url = media_url("/media/profile/p.png");
    assert!(url.ends_with("/media/profile/p.png"));
    assert!(url.starts_with(base_url().trim_end_matches('/')));
}

#[test]
fn media_url_keeps_absolute_urls() {
    assert_eq!(media_url("https://cdn.example.com/a.pdf"), "https://cdn.example.com/a.pdf");
}

#[test]
fn id_paths_format_expected_routes() {
    assert_eq!(internship_path(4), "internship/4/");
    assert_eq!(respond_path(9), "internship/invitation/9/respond/");
    assert_eq!(approve_path(2), "internship/admin/2/approve/");
    assert_eq!(reject_path(2), "internship/admin/2/reject/");
    assert_eq!(user_path(5, ""), "administrator/users/5/");
    assert_eq!(user_path(5, "reset-password"), "administrator/users/5/reset-password/");
}

#[test]
fn empty_user_query_has_no_pairs() {
    assert!(UserQuery::default().pairs().is_empty());
    let blank = UserQuery { search: "   ".to_owned(), ..UserQuery::default() };
    assert!(blank.pairs().is_empty());
}

#[test]
fn user_query_pairs_in_wire_order() {
    let query = UserQuery { search: " ali ".to_owned(), role: "3".to_owned(), is_active: Some(false) };
    assert_eq!(
        query.pairs(),
        vec![("role", "3".to_owned()), ("search", "ali".to_owned()), ("is_active", "false".to_owned())]
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_build_calls_are_unavailable() {
    let err = block_on(current_user()).unwrap_err();
    assert_eq!(err, ApiError::Transport("not available on server".to_owned()));
}

/// Drives a future that never awaits anything pending.
#[cfg(not(feature = "hydrate"))]
fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
