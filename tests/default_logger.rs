// SPDX-License-Identifier: MIT OR Apache-2.0
use minlog::global_logger::{
    default_logger, default_logger_for, install_default_logger, with_default_logger,
    with_default_logger_mut,
};
use minlog::{Error, InMemoryBackend, Logger, Verbosity};
use std::sync::{Arc, Mutex, MutexGuard, OnceLock};

static TEST_LOGGER_GUARD: Mutex<()> = Mutex::new(());
static BACKEND: OnceLock<Arc<InMemoryBackend>> = OnceLock::new();

//tests here mutate the process-wide default, so they run one at a time
fn setup() -> (MutexGuard<'static, ()>, &'static InMemoryBackend) {
    let guard = TEST_LOGGER_GUARD
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    let backend = BACKEND.get_or_init(|| {
        let backend = Arc::new(InMemoryBackend::new());
        install_default_logger(Logger::new(Verbosity::Info, backend.clone())).unwrap();
        backend
    });
    with_default_logger_mut(|logger| logger.set_verbosity(Verbosity::Info));
    backend.drain_logs();
    (guard, backend)
}

#[test]
fn second_install_is_rejected() {
    let (_guard, backend) = setup();
    let other = Arc::new(InMemoryBackend::new());
    let err = install_default_logger(Logger::new(Verbosity::Debug, other.clone())).unwrap_err();
    assert!(matches!(err, Error::AlreadyInstalled));

    default_logger().info("still the first").unwrap();
    assert_eq!(backend.drain_logs(), "[inf] still the first\n");
    assert!(other.is_empty());
}

#[test]
fn mutation_is_explicit_and_visible() {
    let (_guard, backend) = setup();
    with_default_logger_mut(|logger| logger.be_quiet());
    assert!(with_default_logger(|logger| logger.is_quiet()));

    with_default_logger(|logger| {
        logger.warn("dropped").unwrap();
        logger.error("kept").unwrap();
    });
    assert_eq!(backend.drain_logs(), "[err] kept\n");
}

#[test]
fn derived_loggers_snapshot_the_threshold() {
    let (_guard, backend) = setup();
    with_default_logger_mut(|logger| logger.be_verbose());
    let mut net = default_logger_for("net");
    with_default_logger_mut(|logger| logger.be_quiet());

    assert_eq!(net.verbosity(), Verbosity::Trace);
    net.trace("handshake").unwrap();
    net.be_debug();
    assert!(with_default_logger(|logger| logger.is_quiet()));
    assert_eq!(backend.drain_logs(), "[trc] [net] handshake\n");
}

#[test]
fn copies_are_independent() {
    let (_guard, _backend) = setup();
    let mut copy = default_logger();
    copy.be_debug();
    assert_eq!(with_default_logger(Logger::verbosity), Verbosity::Info);
}
