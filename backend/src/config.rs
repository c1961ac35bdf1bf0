use std::env;

/// Fails fast at startup when the store connection cannot be configured.
pub fn validate_env() {
    if env::var("DATABASE_URL").is_ok() {
        return;
    }
    let required_vars = ["DB_HOST", "DB_USER", "DB_PASSWORD", "DB_NAME"];
    for var in required_vars.iter() {
        env::var(var).expect(&format!("{} must be set", var));
    }
}

/// `DATABASE_URL` wins when set; otherwise the URL is composed from the
/// individual `DB_*` variables.
pub fn database_url() -> String {
    if let Ok(url) = env::var("DATABASE_URL") {
        return url;
    }
    let host = env::var("DB_HOST").expect("DB_HOST must be set");
    let user = env::var("DB_USER").expect("DB_USER must be set");
    let password = env::var("DB_PASSWORD").expect("DB_PASSWORD must be set");
    let name = env::var("DB_NAME").expect("DB_NAME must be set");
    format!("mysql://{}:{}@{}/{}", user, password, host, name)
}

pub fn port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|port| port.parse().ok())
        .unwrap_or(3001)
}
