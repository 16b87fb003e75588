//! Shared test setup: one global tracing subscriber for all tests of a binary.

use std::sync::Once;

use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::Tree;

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // Silence the config crate's own tracing
    let noisy_modules = ["config"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // RUST_LOG wins, otherwise debug
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Builds the tree used across tests:
///
/// ```text
/// root
/// ├── a
/// │   ├── a1
/// │   └── a2
/// └── b
///     └── b1
/// ```
pub fn sample_tree() -> Tree<String> {
    let mut tree = Tree::new("root".to_string());
    let root = tree.root_id();
    let build = |tree: &mut Tree<String>| -> crate::domain::TreeResult<()> {
        let a = tree.insert(root, "a".into())?;
        tree.insert(a, "a1".into())?;
        tree.insert(a, "a2".into())?;
        let b = tree.insert(root, "b".into())?;
        tree.insert(b, "b1".into())?;
        Ok(())
    };
    build(&mut tree).unwrap_or_else(|e| panic!("sample tree: {e}"));
    tree
}
