use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Default filter directive for a given `-v` count.
fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "snapstream_gallery=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. `RUST_LOG` refines the default directive.
pub fn init(verbose: u8) {
    let filter = EnvFilter::builder()
        .with_default_directive(
            default_directive(verbose)
                .parse()
                .unwrap_or_else(|_| LevelFilter::INFO.into()),
        )
        .from_env_lossy();

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        tracing::debug!("logging already initialised");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_parse() {
        for verbose in 0..4 {
            let directive: Result<tracing_subscriber::filter::Directive, _> =
                default_directive(verbose).parse();
            assert!(directive.is_ok(), "verbosity {verbose}");
        }
    }
}
