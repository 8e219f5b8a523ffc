/// Logger setup.
///
/// `env_logger` writes to stderr, which is the same terminal the animation
/// owns while a session is running. Log output therefore goes through a
/// switchable target: stderr before and after the session, and during it
/// either the file named by `NIGHTDRIVE_LOG_FILE` or nowhere.

use std::fs::File;
use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Environment variable naming a file to receive log lines while the
/// screen is in use.
pub const LOG_FILE_ENV: &str = "NIGHTDRIVE_LOG_FILE";

/// Handle that moves log output off the screen and back.
#[derive(Clone, Debug, Default)]
pub struct LogGate(Arc<AtomicBool>);

impl LogGate {
    /// Stop writing to stderr until `restore` is called.
    pub fn divert(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn restore(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_diverted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Writer handed to `env_logger`.
pub struct LogTarget {
    gate: LogGate,
    diverted: Option<Box<dyn Write + Send>>,
}

impl LogTarget {
    pub fn new(gate: LogGate, diverted: Option<Box<dyn Write + Send>>) -> Self {
        LogTarget { gate, diverted }
    }
}

impl Write for LogTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.gate.is_diverted() {
            return io::stderr().write(buf);
        }
        match self.diverted.as_mut() {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.gate.is_diverted() {
            return io::stderr().flush();
        }
        match self.diverted.as_mut() {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Install the global logger (default filter `warn`) and return its gate.
pub fn init() -> LogGate {
    let gate = LogGate::default();
    let file = std::env::var_os(LOG_FILE_ENV).and_then(|path| match File::create(&path) {
        Ok(f) => Some(Box::new(f) as Box<dyn Write + Send>),
        Err(e) => {
            eprintln!("Cannot open log file {}: {e}", path.to_string_lossy());
            None
        }
    });

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Pipe(Box::new(LogTarget::new(gate.clone(), file))))
        .init();
    gate
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Clone, Default)]
    struct Shared(Arc<Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn diverted_lines_go_to_the_side_writer() {
        let gate = LogGate::default();
        let side = Shared::default();
        let mut target = LogTarget::new(gate.clone(), Some(Box::new(side.clone())));

        gate.divert();
        target.write_all(b"during\n").unwrap();
        assert_eq!(side.0.lock().unwrap().as_slice(), b"during\n");

        gate.restore();
        target.write_all(b"after\n").unwrap();
        assert_eq!(side.0.lock().unwrap().as_slice(), b"during\n");
    }

    #[test]
    fn diverted_without_file_discards() {
        let gate = LogGate::default();
        let mut target = LogTarget::new(gate.clone(), None);
        gate.divert();
        assert_eq!(target.write(b"dropped").unwrap(), 7);
        target.flush().unwrap();
    }

    #[test]
    fn gate_clones_share_state() {
        let gate = LogGate::default();
        let other = gate.clone();
        assert!(!other.is_diverted());
        gate.divert();
        assert!(other.is_diverted());
        other.restore();
        assert!(!gate.is_diverted());
    }
}
