//! Delivery of the rendered dashboard by mail.

pub mod smtp;

pub use smtp::{Notifier, SmtpNotifier};
