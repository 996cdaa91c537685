/// Version of this tool, as baked in at compile time.
pub fn get_version() -> String {
    option_env!("CARGO_PKG_VERSION")
        .unwrap_or("0.0.0")
        .to_string()
}
