use askama::Template;
use scribe_core::{Email, EmailClient, ResetNotifier, ResetToken};
use url::form_urlencoded;

pub const RESET_EMAIL_SUBJECT: &str = "Reset Password";

#[derive(Template)]
#[template(path = "reset_password.html")]
struct ResetPasswordEmail<'a> {
    base_url: &'a str,
    /// Already form-encoded: `token=<token>&email=<recipient>`.
    query: &'a str,
    email: &'a str,
}

/// Renders the reset link and hands the message to an [`EmailClient`].
#[derive(Clone)]
pub struct ResetEmailNotifier<E> {
    email_client: E,
    base_url: String,
}

impl<E> ResetEmailNotifier<E> {
    pub fn new(email_client: E, base_url: impl Into<String>) -> Self {
        Self {
            email_client,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn render(&self, recipient: &Email, token: &ResetToken) -> Result<String, String> {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("token", token.as_str())
            .append_pair("email", recipient.as_str())
            .finish();

        ResetPasswordEmail {
            base_url: &self.base_url,
            query: &query,
            email: recipient.as_str(),
        }
        .render()
        .map_err(|e| e.to_string())
    }
}

#[async_trait::async_trait]
impl<E: EmailClient> ResetNotifier for ResetEmailNotifier<E> {
    #[tracing::instrument(name = "ResetEmailNotifier::send_reset_email", skip_all)]
    async fn send_reset_email(&self, recipient: &Email, token: &ResetToken) -> Result<(), String> {
        let content = self.render(recipient, token)?;
        self.email_client
            .send_email(recipient, RESET_EMAIL_SUBJECT, &content)
            .await
    }
}
