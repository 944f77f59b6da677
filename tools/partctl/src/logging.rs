pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    // Respect RUST_LOG if set, otherwise fall back to the verbosity flag
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
