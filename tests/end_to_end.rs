// SPDX-License-Identifier: MIT OR Apache-2.0
use minlog::{ColorChoice, ConsoleBackend, InMemoryBackend, Logger, Verbosity};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_test::*;

#[cfg(target_arch = "wasm32")]
wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn take(&self) -> String {
        String::from_utf8(std::mem::take(&mut *self.0.lock().unwrap())).unwrap()
    }
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn warn_debug_be_debug() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut logger = Logger::new(Verbosity::default(), backend.clone());
    assert_eq!(logger.verbosity(), Verbosity::Info);

    logger.warn("x").unwrap();
    logger.debug("y").unwrap();
    assert_eq!(backend.drain_logs(), "[wrn] x\n");

    logger.be_debug();
    logger.debug("y").unwrap();
    assert_eq!(backend.drain_logs(), "[dbg] y\n");
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn quiet_verbose_and_debug_boundaries() {
    let backend = Arc::new(InMemoryBackend::new());
    let mut logger = Logger::new(Verbosity::Info, backend.clone());

    logger.be_quiet();
    logger.error("e").unwrap();
    logger.warn("w").unwrap();
    assert_eq!(backend.drain_logs(), "[err] e\n");

    logger.be_verbose();
    logger.trace("t").unwrap();
    logger.debug("d").unwrap();
    assert_eq!(backend.drain_logs(), "[trc] t\n");

    logger.be_debug();
    logger.debug("d").unwrap();
    assert_eq!(backend.drain_logs(), "[dbg] d\n");
}

#[cfg_attr(not(target_arch = "wasm32"), test)]
#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test)]
fn subsystems_with_scopes() {
    let backend = Arc::new(InMemoryBackend::new());
    let root = Logger::new(Verbosity::Info, backend.clone());
    let mut db = root.logger_for("db");

    db.info("open").unwrap();
    db.with_subsource("migrate", |db| {
        db.with_verbosity(Verbosity::Debug, |db| {
            minlog::debug!(db, "step {}", 1).unwrap();
        });
        db.debug("hidden again").unwrap();
    });
    db.info("done").unwrap();
    root.info("bye").unwrap();

    assert_eq!(
        backend.drain_logs(),
        "[inf] [db] open\n[dbg] [db:migrate] step 1\n[inf] [db] done\n[inf] bye\n"
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn console_output_escapes_brackets() {
    let buf = SharedBuf::default();
    let backend = Arc::new(ConsoleBackend::from_writer(buf.clone()).color(ColorChoice::Never));
    let logger = Logger::with_source(Verbosity::Info, "net", backend);

    logger.info("[red]not a tag[/]").unwrap();
    logger.force_log("forced").unwrap();

    assert_eq!(
        buf.take(),
        "[inf] [net] [red]not a tag[/]\n[crt] [net] forced\n"
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn console_output_is_colored_when_asked() {
    let buf = SharedBuf::default();
    let backend = Arc::new(ConsoleBackend::from_writer(buf.clone()).color(ColorChoice::Always));
    let logger = Logger::new(Verbosity::Info, backend);

    logger.warn("careful").unwrap();

    let out = buf.take();
    let tag_style = Verbosity::Warn.style();
    assert!(out.starts_with(&tag_style.render().to_string()));
    assert!(out.contains("[wrn]"));
    assert!(out.ends_with("careful\n"));
}
