use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
});

/// Install the test subscriber once per test binary.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}
