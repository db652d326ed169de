use ratatui::buffer::Buffer;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};

/// Returns the symbols in each row of `buf`, ignoring styles
pub(crate) fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Runs `func` with a debug-level subscriber installed for the current thread
/// and returns everything it logged
pub(crate) fn capture_logs<F: FnOnce()>(func: F) -> String {
    let output = Arc::new(Mutex::new(Vec::new()));
    let writer = {
        let output = Arc::clone(&output);
        move || SharedWriter(Arc::clone(&output))
    };
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(writer)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, func);
    let bytes = output.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

#[derive(Clone, Debug)]
struct SharedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for SharedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
