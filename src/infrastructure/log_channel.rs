//! Tracing writers that forward formatted log lines into a channel,
//! so the calculator window can show its own activity log.

use crossbeam_channel::{Receiver, Sender};
use tracing_subscriber::fmt::MakeWriter;

// A writer that sends logs to the UI via a crossbeam channel
pub struct ChannelWriter {
    sender: Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).trim_end().to_string();
        if !msg.is_empty() {
            // A full or closed channel just drops the line
            let _ = self.sender.try_send(msg);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
pub struct ChannelWriterFactory {
    sender: Sender<String>,
}

impl ChannelWriterFactory {
    /// Bounded so a window that stops draining cannot grow memory without limit.
    pub fn bounded(capacity: usize) -> (Self, Receiver<String>) {
        let (sender, receiver) = crossbeam_channel::bounded(capacity);
        (Self { sender }, receiver)
    }
}

impl<'a> MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

/// Drains whatever is waiting in `rx` into `lines`, keeping at most `keep` entries.
pub fn drain_into(rx: &Receiver<String>, lines: &mut Vec<String>, keep: usize) {
    lines.extend(rx.try_iter());
    if lines.len() > keep {
        let excess = lines.len() - keep;
        lines.drain(..excess);
    }
}
