use std::io;
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::logging::{HandsetFormatter, build_filter};

/// In-memory sink for everything the formatter writes.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with the program's formatter and filter writing into a buffer, uncoloured.
pub fn capture_output<T>(directives: Option<&str>, f: impl FnOnce() -> T) -> (T, String) {
    colored::control::set_override(false);

    let buffer: SharedBuffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_env_filter(build_filter(directives).unwrap())
        .event_format(HandsetFormatter)
        .finish();

    let result: T = tracing::subscriber::with_default(subscriber, f);
    let bytes: Vec<u8> = buffer.0.lock().unwrap().clone();
    (result, String::from_utf8_lossy(&bytes).into_owned())
}
