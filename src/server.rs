//! The embedded page server.
//!
//! A small tiny_http loop handles requests sequentially on the calling
//! thread: `GET /` renders the current page, `GET /select` applies an
//! engine- or tab-selection click and redirects back, `/style.css` serves
//! the embedded stylesheet. When the data document failed to load the
//! server keeps serving the bare skeleton and selection clicks do nothing.

use anyhow::{anyhow, Result};

use crate::constants::{ENGINE_PARAM, SELECT_PATH, TAB_PARAM};
use crate::page::{skeleton_page, Page};

const STYLESHEET: &str = include_str!("../assets/style.css");

/// Run the page server until the process is terminated.
pub fn serve(addr: &str, title: &str, mut page: Option<Page>) -> Result<()> {
    let server =
        tiny_http::Server::http(addr).map_err(|e| anyhow!("Failed to bind {}: {}", addr, e))?;
    log::info!("Serving start page on http://{}/", addr);

    let fallback = skeleton_page(title);

    for request in server.incoming_requests() {
        let url = request.url().to_string();
        log::debug!("{} {}", request.method(), url);
        let (path, query) = split_url(&url);

        let response = match path {
            "/" => {
                let body = match &page {
                    Some(page) => page.render(),
                    None => fallback.clone(),
                };
                text_response(200, "text/html; charset=utf-8", body)
            }
            p if p == SELECT_PATH => {
                if let Some(page) = page.as_mut() {
                    apply_selection(page, query);
                }
                redirect("/")
            }
            "/style.css" => text_response(200, "text/css; charset=utf-8", STYLESHEET.to_string()),
            _ => text_response(404, "text/plain", "404 Not Found\n".to_string()),
        };

        let _ = request.respond(response);
    }

    Ok(())
}

/// Map selection query parameters onto page-state transitions. Unknown
/// keys, non-numeric engine indices, and dangling tab ids are all handled
/// without error: the first two are ignored, the last deactivates every
/// section by design.
fn apply_selection(page: &mut Page, query: &str) {
    for (key, value) in parse_query(query) {
        match key.as_str() {
            ENGINE_PARAM => {
                if let Ok(index) = value.parse::<usize>() {
                    page.select_engine(index);
                }
            }
            TAB_PARAM => page.select_tab(&value),
            _ => {}
        }
    }
}

fn split_url(url: &str) -> (&str, &str) {
    match url.split_once('?') {
        Some((path, query)) => (path, query),
        None => (url, ""),
    }
}

/// Decode `k=v&k2=v2` pairs with form-style percent encoding.
fn parse_query(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (url_decode(k), url_decode(v)),
            None => (url_decode(pair), String::new()),
        })
        .collect()
}

/// Minimal percent decoding: `+` becomes space, `%XX` becomes the byte.
/// Malformed escapes pass through untouched.
fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => match hex_pair(bytes.get(i + 1).copied(), bytes.get(i + 2).copied()) {
                Some(byte) => {
                    out.push(byte);
                    i += 3;
                }
                None => {
                    out.push(b'%');
                    i += 1;
                }
            },
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_pair(hi: Option<u8>, lo: Option<u8>) -> Option<u8> {
    let hi = (hi? as char).to_digit(16)?;
    let lo = (lo? as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

fn text_response(
    status: u16,
    content_type: &str,
    body: String,
) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(body)
        .with_status_code(status)
        .with_header(
            tiny_http::Header::from_bytes("Content-Type", content_type)
                .expect("static header is valid"),
        )
}

fn redirect(location: &str) -> tiny_http::Response<std::io::Cursor<Vec<u8>>> {
    tiny_http::Response::from_string(String::new())
        .with_status_code(303)
        .with_header(
            tiny_http::Header::from_bytes("Location", location).expect("static header is valid"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_site_data;

    fn sample_page() -> Page {
        let data = parse_site_data(
            r##"{
                "search": {
                    "engines": [
                        {"name": "Google", "url": "https://google.com/search?q=", "param": "q"},
                        {"name": "Bing", "url": "https://bing.com/search?q=", "param": "qb"}
                    ]
                },
                "categories": [
                    {"id": "ai", "navTitle": "AI", "icon": "i", "sectionTitle": "AI", "titleColor": "#000", "items": []},
                    {"id": "dev", "navTitle": "Dev", "icon": "i", "sectionTitle": "Dev", "titleColor": "#000", "items": []}
                ]
            }"##,
        )
        .expect("Should parse");
        Page::new("Homeport", data)
    }

    #[test]
    fn split_url_separates_path_and_query() {
        assert_eq!(split_url("/select?tab=ai"), ("/select", "tab=ai"));
        assert_eq!(split_url("/"), ("/", ""));
    }

    #[test]
    fn parse_query_pairs() {
        assert_eq!(
            parse_query("engine=1&tab=ai"),
            vec![
                ("engine".to_string(), "1".to_string()),
                ("tab".to_string(), "ai".to_string())
            ]
        );
        assert_eq!(parse_query(""), vec![]);
        assert_eq!(
            parse_query("flag"),
            vec![("flag".to_string(), String::new())]
        );
    }

    #[test]
    fn url_decode_handles_form_encoding() {
        assert_eq!(url_decode("my+tab"), "my tab");
        assert_eq!(url_decode("a%2Fb"), "a/b");
        assert_eq!(url_decode("plain"), "plain");
        // Malformed escape passes through
        assert_eq!(url_decode("50%"), "50%");
        assert_eq!(url_decode("%zz"), "%zz");
    }

    #[test]
    fn engine_selection_retargets_the_page() {
        let mut page = sample_page();
        apply_selection(&mut page, "engine=1");
        let html = page.render();
        assert!(html.contains("action=\"https://bing.com/search\""));
        assert!(html.contains("name=\"qb\""));
    }

    #[test]
    fn tab_selection_moves_the_active_section() {
        let mut page = sample_page();
        apply_selection(&mut page, "tab=dev");
        let html = page.render();
        assert!(html.contains("id=\"dev\" class=\"category-section active\""));
        assert!(html.contains("id=\"ai\" class=\"category-section\""));
    }

    #[test]
    fn malformed_selection_is_ignored() {
        let mut page = sample_page();
        let before = page.render();
        apply_selection(&mut page, "engine=notanumber&unknown=1");
        assert_eq!(page.render(), before);
    }

    #[test]
    fn out_of_range_engine_is_ignored() {
        let mut page = sample_page();
        let before = page.render();
        apply_selection(&mut page, "engine=99");
        assert_eq!(page.render(), before);
    }

    #[test]
    fn dangling_tab_deactivates_all_sections() {
        let mut page = sample_page();
        apply_selection(&mut page, "tab=missing");
        let html = page.render();
        assert_eq!(html.matches("category-section active").count(), 0);
    }
}
