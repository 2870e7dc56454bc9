//! Logger bootstrap shared by every Tagalong binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise only `crate_name` is logged at
/// `default_level`. Calling this twice is harmless: the second install is
/// ignored.
pub fn setup_logger(crate_name: &str, default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(crate_name, default_level)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init();
}

/// Build the fallback filter directive, e.g. `tagalong_client=info`.
fn default_directive(crate_name: &str, default_level: &str) -> String {
    // Binary names use dashes, tracing targets use underscores.
    let target = crate_name.replace('-', "_");
    format!("{target}={default_level},tagalong_mock_api={default_level}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_normalizes_crate_name() {
        // テスト項目: バイナリ名のハイフンがアンダースコアに変換される
        // when (操作):
        let directive = default_directive("tagalong-client", "debug");

        // then (期待する結果):
        assert_eq!(
            directive,
            "tagalong_client=debug,tagalong_mock_api=debug"
        );
    }
}
