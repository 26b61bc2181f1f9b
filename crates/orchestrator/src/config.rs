/// Endpoint resolution for the interpreter service. The URL is configured,
/// never computed: DREAM_API_URL wins, `.env` files fill it in best-effort,
/// and the local default covers development.
pub fn endpoint() -> String {
    std::env::var(client::ENDPOINT_ENV).unwrap_or_else(|_| client::DEFAULT_ENDPOINT.to_string())
}

/// Load environment variables from .env (best-effort). Tries the current
/// directory and up to two parents so `cargo run -p orchestrator` finds the
/// workspace-root file.
pub fn load_dotenv() {
    for path in [".env", "../.env", "../../.env"] {
        if let Ok(content) = std::fs::read_to_string(path) {
            parse_env_file(&content);
        }
    }
}

fn parse_env_file(content: &str) {
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = parse_key_value(trimmed) {
            set_env_if_unset(key, value);
        }
    }
}

fn parse_key_value(line: &str) -> Option<(String, String)> {
    let mut parts = line.splitn(2, '=');
    let key = parts.next()?.trim();
    let value = parts.next()?.trim().trim_matches('"').trim_matches('\'');
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

fn set_env_if_unset(key: String, value: String) {
    if std::env::var(&key).is_err() {
        unsafe {
            std::env::set_var(key, value);
        }
    }
}
