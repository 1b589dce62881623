pub mod mock_email_client;
pub mod relay_email_client;
pub mod reset_email_notifier;

pub use mock_email_client::{MockEmailClient, SentEmail};
pub use relay_email_client::RelayEmailClient;
pub use reset_email_notifier::{RESET_EMAIL_SUBJECT, ResetEmailNotifier};
