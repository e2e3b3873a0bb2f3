//! DealDrip notification library.
//!
//! Fans a title and message out to a Telegram chat and an email recipient and
//! reports which channels delivered. Channel failures never escape as errors;
//! they are logged and reported as [`ChannelOutcome`]s.
//!
//! # Example
//!
//! ```ignore
//! use dealdrip_notify::{NotificationService, NotifyConfig};
//!
//! let service = NotificationService::new(&NotifyConfig::from_env()?)?;
//! let outcome = service
//!     .send_notification("New Deal Alert!", "MacBook Pro 16\" - 50% OFF", None)
//!     .await;
//! assert!(outcome.success);
//! ```

pub mod channels;
pub mod config;
pub mod error;
mod http_client;
pub mod message;
pub mod service;

pub use channels::{Channel, ChannelOutcome, ChatTransport, MailTransport, OutgoingMail};
pub use config::{EmailConfig, NotifyConfig, TelegramConfig};
pub use error::{Error, Result};
pub use service::{NotificationOutcome, NotificationService};
