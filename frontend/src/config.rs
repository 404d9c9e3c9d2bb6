use std::sync::OnceLock;

/// Build-time override, e.g. `HRMS_API_URL=https://hr.example.com trunk build`.
const BUILD_API_BASE_URL: Option<&str> = option_env!("HRMS_API_URL");

static API_BASE_URL: OnceLock<String> = OnceLock::new();

/// Picks the API base URL: a runtime global first, then the build-time
/// variable, then the page's own origin. Blank values count as unset.
pub fn resolve_api_base_url(
    runtime: Option<String>,
    build_time: Option<&str>,
    origin: Option<String>,
) -> String {
    let normalize = |value: &str| {
        let trimmed = value.trim().trim_end_matches('/');
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };
    runtime
        .as_deref()
        .and_then(normalize)
        .or_else(|| build_time.and_then(normalize))
        .or_else(|| origin.as_deref().and_then(normalize))
        .unwrap_or_default()
}

pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            let url = resolve_api_base_url(runtime_base_url(), BUILD_API_BASE_URL, page_origin());
            log::info!(
                "API base url: {}",
                if url.is_empty() { "<relative>" } else { url.as_str() }
            );
            url
        })
        .clone()
}

#[cfg(target_arch = "wasm32")]
fn runtime_base_url() -> Option<String> {
    // Optional global injected by env.js: window.__HRMS_ENV = { API_BASE_URL: "..." }
    let window = web_sys::window()?;
    let env = js_sys::Reflect::get(&window, &"__HRMS_ENV".into()).ok()?;
    if env.is_undefined() || env.is_null() {
        return None;
    }
    let value = js_sys::Reflect::get(&env, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&env, &"api_base_url".into()).ok());
    value.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_base_url() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Option<String> {
    None
}
