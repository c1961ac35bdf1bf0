/// Origin of the contact intake API. Baked in at compile time so deployed
/// builds can point somewhere other than a local backend.
pub fn get_backend_url() -> String {
    option_env!("BACKEND_URL")
        .unwrap_or("http://localhost:3001")
        .to_string()
}
