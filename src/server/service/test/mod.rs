use crate::server::{config::Config, service::mail::MailClient};

mod meal;
mod meal_day;

/// Configuration stub pointing every provider at an unroutable port.
///
/// Provider sends fail fast in tests; the services under test log and carry
/// on, which is exactly the production behavior for mail failures.
fn test_config() -> Config {
    Config {
        database_url: String::new(),
        app_url: "http://localhost:8080".to_string(),
        port: 0,
        jwt_secret: "test-secret".to_string(),
        mail_api_url: "http://127.0.0.1:1".to_string(),
        mail_api_key: "test-key".to_string(),
        mail_from: "noreply@example.com".to_string(),
        storage_url: "http://127.0.0.1:1".to_string(),
        storage_bucket: "images".to_string(),
        storage_token: "test-token".to_string(),
        ai_api_url: None,
        ai_api_key: None,
        reminder_hour: 16,
    }
}

fn test_mail_client() -> MailClient {
    MailClient::new(reqwest::Client::new(), &test_config())
}
