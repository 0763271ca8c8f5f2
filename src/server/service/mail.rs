//! Transactional mail client.
//!
//! Thin typed client for the mail provider's HTTP API. The application sends
//! four kinds of messages: welcome, account deletion, password reset, and
//! attendance reminders. No retry or queueing; callers log failed sends and
//! carry on.

use chrono::NaiveDate;
use serde::Serialize;

use crate::server::{config::Config, error::AppError};

/// Outgoing message payload for the mail provider API.
#[derive(Debug, Serialize)]
struct SendMailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
}

/// Client for the transactional mail provider.
#[derive(Clone)]
pub struct MailClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
}

impl MailClient {
    /// Creates a mail client from application configuration.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            api_url: config.mail_api_url.clone(),
            api_key: config.mail_api_key.clone(),
            from: config.mail_from.clone(),
        }
    }

    /// Sends a plain-text message through the provider.
    ///
    /// # Returns
    /// - `Ok(())` - Provider accepted the message
    /// - `Err(AppError::ReqwestErr)` - Network failure or non-success status
    pub async fn send(&self, to: &str, subject: &str, text: &str) -> Result<(), AppError> {
        let request = SendMailRequest {
            from: &self.from,
            to,
            subject,
            text,
        };

        self.http
            .post(format!("{}/messages", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Sent '{}' email to {}", subject, to);

        Ok(())
    }

    /// Welcomes a freshly registered user.
    pub async fn send_welcome(&self, to: &str, name: &str) -> Result<(), AppError> {
        let text = format!(
            "Hi {},\n\nYour account is ready. Mark your attendance for the next \
             communal meal and see you at the table!\n",
            name
        );
        self.send(to, "Welcome to the meal board", &text).await
    }

    /// Confirms an account deletion.
    pub async fn send_account_deleted(&self, to: &str, name: &str) -> Result<(), AppError> {
        let text = format!(
            "Hi {},\n\nYour account and all of your attendance data have been \
             deleted. Sorry to see you go.\n",
            name
        );
        self.send(to, "Your account has been deleted", &text).await
    }

    /// Sends a password reset link.
    pub async fn send_password_reset(
        &self,
        to: &str,
        name: &str,
        reset_url: &str,
    ) -> Result<(), AppError> {
        let text = format!(
            "Hi {},\n\nSomeone requested a password reset for your account. \
             Use the link below within the next hour to pick a new password:\n\n{}\n\n\
             If this wasn't you, you can ignore this email.\n",
            name, reset_url
        );
        self.send(to, "Reset your password", &text).await
    }

    /// Reminds an attendee of tomorrow's meal.
    pub async fn send_attendance_reminder(
        &self,
        to: &str,
        name: &str,
        date: NaiveDate,
        meal_titles: &[String],
    ) -> Result<(), AppError> {
        let menu = if meal_titles.is_empty() {
            "The menu is still being decided.".to_string()
        } else {
            format!("On the menu: {}.", meal_titles.join(", "))
        };

        let text = format!(
            "Hi {},\n\nYou're signed up for the communal meal on {}. {}\n",
            name,
            date.format("%Y-%m-%d"),
            menu
        );
        self.send(to, "Meal reminder for tomorrow", &text).await
    }
}
