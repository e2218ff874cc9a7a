use env_logger::Env;

/// Initialise `env_logger`. `RUST_LOG` wins over the default level when set.
pub fn init(debug: bool) {
    let env = if debug {
        Env::default().default_filter_or("debug")
    } else {
        Env::default().default_filter_or("warn")
    };
    // A second call (e.g. from tests) keeps the first logger.
    let _ = env_logger::Builder::from_env(env).try_init();
}
