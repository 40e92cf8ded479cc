// Clientes HTTP del backend de contenidos (palabra del día, generación de
// quizzes) y del almacén de clasificación. Peticiones sueltas de tipo
// petición/respuesta: aquí no hay protocolo propio.

pub mod leaderboard;
pub mod quiz_gen;
pub mod word_of_day;

#[cfg(target_arch = "wasm32")]
const DEFAULT_BASE: &str = "/api";
#[cfg(not(target_arch = "wasm32"))]
const DEFAULT_NATIVE_BASE: &str = "http://127.0.0.1:8788/api";

/// Quita barras finales para poder concatenar rutas sin dobles `//`.
fn trim_base(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed == "/" {
        return trimmed.to_string();
    }
    trimmed.trim_end_matches('/').to_string()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn base_url() -> String {
    std::env::var("KOTOBA_QUIZ_BACKEND")
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(|s| trim_base(&s))
        .unwrap_or_else(|| DEFAULT_NATIVE_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
pub fn base_url() -> String {
    base_from_querystring()
        .or_else(base_from_meta)
        .or_else(base_from_local_storage)
        .map(|s| trim_base(&s))
        .unwrap_or_else(|| DEFAULT_BASE.to_string())
}

#[cfg(target_arch = "wasm32")]
fn normalize_base(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
fn base_from_querystring() -> Option<String> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    let query = search.strip_prefix('?').unwrap_or(search.as_str());

    for pair in query.split('&') {
        let (key, value) = match pair.split_once('=') {
            Some((k, v)) => (k, v),
            None => (pair, ""),
        };
        if key == "backend" {
            let decoded = js_sys::decode_uri_component(value).ok()?;
            let decoded = decoded.as_string()?;
            return normalize_base(&decoded);
        }
    }
    None
}

#[cfg(target_arch = "wasm32")]
fn base_from_meta() -> Option<String> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let meta = document
        .query_selector("meta[name='kotoba-quiz-backend']")
        .ok()??;
    meta.get_attribute("content")
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(target_arch = "wasm32")]
fn base_from_local_storage() -> Option<String> {
    let window = web_sys::window()?;
    let storage = window.local_storage().ok()??;
    storage
        .get_item("kotoba_quiz_backend")
        .ok()?
        .as_deref()
        .and_then(normalize_base)
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(url)
        .json(body)
        .send()
        .map_err(|err| format!("Error conectando con el backend: {err}"))?;
    if !response.status().is_success() {
        return Err(format!(
            "El backend devolvió HTTP {} en {url}",
            response.status()
        ));
    }
    response
        .json::<T>()
        .map_err(|err| format!("Respuesta JSON inválida del backend: {err}"))
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn get_json<T>(url: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .send()
        .map_err(|err| format!("Error conectando con el backend: {err}"))?;
    if !response.status().is_success() {
        return Err(format!(
            "El backend devolvió HTTP {} en {url}",
            response.status()
        ));
    }
    response
        .json::<T>()
        .map_err(|err| format!("Respuesta JSON inválida del backend: {err}"))
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let payload = serde_json::to_string(body)
        .map_err(|err| format!("No se pudo serializar el payload: {err}"))?;
    request_json("POST", url, Some(payload)).await
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn get_json<T>(url: &str) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    request_json("GET", url, None).await
}

#[cfg(target_arch = "wasm32")]
async fn request_json<T>(method: &str, url: &str, body: Option<String>) -> Result<T, String>
where
    T: serde::de::DeserializeOwned,
{
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(body) = &body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|err| format!("No se pudo crear el request fetch: {err:?}"))?;
    if body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| format!("No se pudieron asignar las cabeceras: {err:?}"))?;
    }

    let window = web_sys::window().ok_or_else(|| "No existe window en entorno WASM.".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| format!("Fetch al backend falló: {err:?}"))?;
    let response: Response = resp_value
        .dyn_into()
        .map_err(|_| "La respuesta fetch no es un Response válido.".to_string())?;

    let text_promise = response
        .text()
        .map_err(|err| format!("No se pudo leer el body de la respuesta: {err:?}"))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|err| format!("No se pudo leer el body de la respuesta: {err:?}"))?
        .as_string()
        .ok_or_else(|| "response.text() no devolvió string".to_string())?;

    if !response.ok() {
        return Err(format!(
            "El backend devolvió HTTP {} en {url}",
            response.status()
        ));
    }

    serde_json::from_str(&text).map_err(|err| format!("Respuesta JSON inválida del backend: {err}"))
}
