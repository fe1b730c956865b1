//! Wiki page handlers module
//!
//! The three verb handlers behind the router. Each request is independent:
//! pages are loaded or constructed, rendered or persisted, and dropped
//! with the response.

use crate::config::AppState;
use crate::http;
use crate::logger;
use crate::templates::TemplateName;
use crate::wiki::{Page, Title};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// GET `/view/{title}`
///
/// Renders the stored page. Any load failure means the page is not
/// viewable yet and redirects to the edit form for the same title.
pub async fn view(state: &AppState, title: &Title, is_head: bool) -> Response<Full<Bytes>> {
    match state.store.load(title).await {
        Ok(page) => {
            let html = state.templates.render(TemplateName::View, &page);
            http::build_html_response(html, is_head)
        }
        Err(_) => http::build_redirect_response(&format!("/edit/{title}")),
    }
}

/// GET `/edit/{title}`
///
/// Renders the edit form, pre-filled with the stored body when one
/// exists; a missing page just means an empty form, not an error.
pub async fn edit(state: &AppState, title: &Title, is_head: bool) -> Response<Full<Bytes>> {
    let page = match state.store.load(title).await {
        Ok(page) => page,
        Err(_) => Page::empty(title.clone()),
    };
    let html = state.templates.render(TemplateName::Edit, &page);
    http::build_html_response(html, is_head)
}

/// POST `/save/{title}`
///
/// Persists the submitted `body` form field (absent field saves an empty
/// page) and redirects to the view. Storage failures surface as a 500
/// carrying the raw error text.
pub async fn save(state: &AppState, title: &Title, form_body: &[u8]) -> Response<Full<Bytes>> {
    let body = crate::http::form::form_value(form_body, "body").unwrap_or_default();
    let page = Page::new(title.clone(), body);

    match state.store.save(&page).await {
        Ok(()) => http::build_redirect_response(&format!("/view/{title}")),
        Err(e) => {
            logger::log_error(&format!("Failed to save page {title}: {e}"));
            http::build_500_response(&e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Write;

    /// Build an `AppState` rooted in temp directories, mirroring the
    /// startup path in `main`
    fn test_state(dir: &tempfile::TempDir) -> AppState {
        let data_dir = dir.path().join("pages");
        let tmpl_dir = dir.path().join("templates");
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::create_dir_all(&tmpl_dir).unwrap();

        let mut view = std::fs::File::create(tmpl_dir.join("view.html")).unwrap();
        write!(view, "<h1>{{{{title}}}}</h1><div>{{{{body}}}}</div>").unwrap();
        let mut edit = std::fs::File::create(tmpl_dir.join("edit.html")).unwrap();
        write!(
            edit,
            "<h1>Editing {{{{title}}}}</h1>\
             <textarea name=\"body\">{{{{body}}}}</textarea>"
        )
        .unwrap();

        let mut config = Config::load_from("no-such-config-file").unwrap();
        config.storage.data_dir = data_dir.to_string_lossy().into_owned();
        config.templates.dir = tmpl_dir.to_string_lossy().into_owned();
        AppState::new(config).unwrap()
    }

    fn title(state: &AppState, s: &str) -> Title {
        state.validator.validate(s).unwrap()
    }

    fn location(resp: &Response<Full<Bytes>>) -> &str {
        resp.headers().get("Location").unwrap().to_str().unwrap()
    }

    #[tokio::test]
    async fn test_view_missing_page_redirects_to_edit() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "Ghost");

        let resp = view(&state, &t, false).await;
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/edit/Ghost");
    }

    #[tokio::test]
    async fn test_save_then_view_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "TestPage");

        let resp = save(&state, &t, b"body=This+is+a+sample+Page.").await;
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/view/TestPage");

        let resp = view(&state, &t, false).await;
        assert_eq!(resp.status(), 200);
        let html = String::from_utf8(
            http_body_util::BodyExt::collect(resp.into_body())
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(html.contains("This is a sample Page."));
        assert!(html.contains("<h1>TestPage</h1>"));
    }

    #[tokio::test]
    async fn test_edit_missing_page_renders_empty_form() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "NewPage");

        let resp = edit(&state, &t, false).await;
        assert_eq!(resp.status(), 200);
        let html = String::from_utf8(
            http_body_util::BodyExt::collect(resp.into_body())
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(html.contains("Editing NewPage"));
        assert!(html.contains("<textarea name=\"body\"></textarea>"));
    }

    #[tokio::test]
    async fn test_edit_existing_page_prefills_body() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "Existing");

        save(&state, &t, b"body=draft+text").await;
        let resp = edit(&state, &t, false).await;
        let html = String::from_utf8(
            http_body_util::BodyExt::collect(resp.into_body())
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(html.contains(">draft text</textarea>"));
    }

    #[tokio::test]
    async fn test_second_save_wins() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "Race");

        save(&state, &t, b"body=first").await;
        save(&state, &t, b"body=second").await;

        let page = state.store.load(&t).await.unwrap();
        assert_eq!(page.body, b"second");
    }

    #[tokio::test]
    async fn test_save_without_body_field_saves_empty_page() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "Blank");

        let resp = save(&state, &t, b"unrelated=x").await;
        assert_eq!(resp.status(), 302);
        let page = state.store.load(&t).await.unwrap();
        assert!(page.body.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_returns_500_with_error_text() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "Doomed");

        // Point the store at a directory that does not exist
        let mut config = state.config.clone();
        config.storage.data_dir = dir
            .path()
            .join("missing")
            .to_string_lossy()
            .into_owned();
        let broken = AppState::new(config).unwrap();

        let resp = save(&broken, &t, b"body=x").await;
        assert_eq!(resp.status(), 500);
        let text = String::from_utf8(
            http_body_util::BodyExt::collect(resp.into_body())
                .await
                .unwrap()
                .to_bytes()
                .to_vec(),
        )
        .unwrap();
        assert!(!text.is_empty());
    }

    #[tokio::test]
    async fn test_head_view_has_empty_body() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let t = title(&state, "HeadPage");

        save(&state, &t, b"body=content").await;
        let resp = view(&state, &t, true).await;
        assert_eq!(resp.status(), 200);
        let bytes = http_body_util::BodyExt::collect(resp.into_body())
            .await
            .unwrap()
            .to_bytes();
        assert!(bytes.is_empty());
    }
}
