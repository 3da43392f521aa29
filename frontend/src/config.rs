use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://emp-rating-backend.onrender.com";
pub const DEFAULT_LOGIN_URL: &str = "https://login-ivory-tau.vercel.app/";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
    pub login_url: Option<String>,
}

static RUNTIME_CONFIG: OnceLock<RuntimeConfig> = OnceLock::new();

fn reflect_string(obj: &js_sys::Object, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &key.into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn global_object(name: &str) -> Option<js_sys::Object> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &name.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    Some(js_sys::Object::from(any))
}

fn get_from_env_js() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__TASKRATE_ENV = { API_BASE_URL: "...", LOGIN_URL: "..." }
    let obj = global_object("__TASKRATE_ENV")?;
    let api_base_url =
        reflect_string(&obj, "API_BASE_URL").or_else(|| reflect_string(&obj, "api_base_url"));
    let login_url =
        reflect_string(&obj, "LOGIN_URL").or_else(|| reflect_string(&obj, "login_url"));
    if api_base_url.is_none() && login_url.is_none() {
        return None;
    }
    Some(RuntimeConfig {
        api_base_url,
        login_url,
    })
}

fn get_from_window_config() -> Option<RuntimeConfig> {
    // Expect optional global object: window.__TASKRATE_CONFIG = { api_base_url: "...", login_url: "..." }
    let obj = global_object("__TASKRATE_CONFIG")?;
    let api_base_url =
        reflect_string(&obj, "api_base_url").or_else(|| reflect_string(&obj, "API_BASE_URL"));
    let login_url =
        reflect_string(&obj, "login_url").or_else(|| reflect_string(&obj, "LOGIN_URL"));
    if api_base_url.is_none() && login_url.is_none() {
        return None;
    }
    Some(RuntimeConfig {
        api_base_url,
        login_url,
    })
}

fn snapshot_from_globals() -> Option<RuntimeConfig> {
    if let Some(env_cfg) = get_from_env_js() {
        return Some(env_cfg);
    }
    get_from_window_config()
}

fn cache_config(cfg: RuntimeConfig) -> RuntimeConfig {
    let _ = RUNTIME_CONFIG.set(cfg.clone());
    cfg
}

fn write_window_config(cfg: &RuntimeConfig) {
    if cfg.api_base_url.is_none() && cfg.login_url.is_none() {
        return;
    }
    let w = match web_sys::window() {
        Some(win) => win,
        None => return,
    };
    let obj = js_sys::Object::new();
    if let Some(url) = &cfg.api_base_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"api_base_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    if let Some(url) = &cfg.login_url {
        let _ = js_sys::Reflect::set(
            &obj,
            &"login_url".into(),
            &wasm_bindgen::JsValue::from_str(url),
        );
    }
    let _ = js_sys::Reflect::set(&w, &"__TASKRATE_CONFIG".into(), &obj);
}

async fn fetch_runtime_config() -> Option<RuntimeConfig> {
    let resp = reqwest::get("./config.json").await.ok()?;
    if !resp.status().is_success() {
        return None;
    }
    resp.json::<RuntimeConfig>().await.ok()
}

async fn await_config() -> RuntimeConfig {
    if let Some(cached) = RUNTIME_CONFIG.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_config(existing);
    }
    if let Some(cfg) = fetch_runtime_config().await {
        write_window_config(&cfg);
        return cache_config(cfg);
    }
    cache_config(RuntimeConfig::default())
}

pub async fn await_api_base_url() -> String {
    await_config()
        .await
        .api_base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
}

pub async fn await_login_url() -> String {
    await_config()
        .await
        .login_url
        .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string())
}

pub async fn init() {
    let _ = await_config().await;
}
