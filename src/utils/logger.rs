use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("page_behavior=debug,info")
    } else {
        EnvFilter::new("page_behavior=info")
    }
}

/// Logger for native hosts (server-side rendering helpers, tests, tooling).
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(verbose));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}

/// Logger for the browser: the fmt layer writes one `console.log` call per event.
///
/// There is no environment and no wall clock in `wasm32-unknown-unknown`, so the
/// filter comes from `verbose` alone and timestamps are dropped.
#[cfg(target_arch = "wasm32")]
pub fn init_browser_logger(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(console::ConsoleMakeWriter)
                .with_ansi(false)
                .without_time()
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            if self.buffer.is_empty() {
                return Ok(());
            }
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
            self.buffer.clear();
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let _ = io::Write::flush(self);
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter { buffer: Vec::new() }
        }
    }
}
