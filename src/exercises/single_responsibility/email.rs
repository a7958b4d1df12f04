// Sending mail and logging are separate jobs. The sender only sends and
// reports through whatever logger it was given.

use crate::console::Console;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub theme: String,
    pub from: String,
    pub to: String,
}

impl Email {
    pub fn new(from: impl Into<String>, to: impl Into<String>, theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            from: from.into(),
            to: to.into(),
        }
    }
}

pub trait Logger {
    fn log(&self, message: &str);
}

pub struct ConsoleLogger<'c> {
    console: &'c dyn Console,
}

impl<'c> ConsoleLogger<'c> {
    pub fn new(console: &'c dyn Console) -> Self {
        Self { console }
    }
}

impl Logger for ConsoleLogger<'_> {
    fn log(&self, message: &str) {
        self.console.line(message);
    }
}

/// Forwards to `tracing` instead of the console.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn log(&self, message: &str) {
        tracing::info!(target: "email", "{message}");
    }
}

pub struct EmailSender<L: Logger> {
    logger: L,
}

impl<L: Logger> EmailSender<L> {
    pub fn new(logger: L) -> Self {
        Self { logger }
    }

    pub fn send(&self, email: &Email) {
        self.logger.log(&format!(
            "Email from '{}' to '{}' was sent",
            email.from, email.to
        ));
    }
}

pub fn sample_mailbox() -> Vec<Email> {
    vec![
        Email::new("Me", "Vasya", "Who are you?"),
        Email::new("Vasya", "Me", "vacuum cleaners!"),
        Email::new("Kolya", "Vasya", "No! Thanks!"),
        Email::new("Vasya", "Me", "washing machines!"),
        Email::new("Me", "Vasya", "Yes"),
        Email::new("Vasya", "Petya", "+2"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    struct MockLogger {
        messages: RefCell<Vec<String>>,
    }

    impl Logger for MockLogger {
        fn log(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    #[test]
    fn test_sender_logs_through_injected_logger() {
        let sender = EmailSender::new(MockLogger {
            messages: RefCell::new(vec![]),
        });

        sender.send(&Email::new("Kolya", "Vasya", "No! Thanks!"));

        assert_eq!(
            *sender.logger.messages.borrow(),
            vec!["Email from 'Kolya' to 'Vasya' was sent"]
        );
    }

    #[test]
    fn test_console_logger() {
        let console = RecordingConsole::new();
        let sender = EmailSender::new(ConsoleLogger::new(&console));

        for email in sample_mailbox() {
            sender.send(&email);
        }

        let lines = console.lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Email from 'Me' to 'Vasya' was sent");
        assert_eq!(lines[5], "Email from 'Vasya' to 'Petya' was sent");
    }

    #[derive(Clone, Default)]
    struct CapturedOutput(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedOutput {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_logger_emits_info_event() {
        let captured = CapturedOutput::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let sender = EmailSender::new(TracingLogger);
            sender.send(&Email::new("Me", "Vasya", "Yes"));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Email from 'Me' to 'Vasya' was sent"));
        assert!(output.contains("INFO email:"));
    }
}
