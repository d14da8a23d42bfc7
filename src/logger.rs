/// Initialises `env_logger` for the binaries. Recovered parse problems are
/// logged as warnings, so those stay visible without `--verbose`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();
}
