/// Process-wide configuration, read from the environment once at startup and
/// passed into the app as shared state. Nothing here mutates after boot.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on.
    pub port: u16,
    /// SMTP relay host.
    pub smtp_host: String,
    /// SMTP relay port (STARTTLS).
    pub smtp_port: u16,
    /// Sending account, also used as the From address.
    pub email_user: String,
    /// Sending account credential (app password).
    pub email_pass: String,
    /// Mailbox that receives every booking and review email.
    pub recipient: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing mail credentials are tolerated — the server then runs with a
    /// logging mailer instead of a real SMTP transport, so a development box
    /// works without any setup.
    pub fn from_env() -> Self {
        let port = match std::env::var("PORT") {
            Ok(val) => val.parse().unwrap_or_else(|_| {
                log::warn!("PORT={val} is not a valid port, using 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
        let smtp_port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(587);

        let email_user = std::env::var("EMAIL_USER").unwrap_or_default();
        let email_pass = std::env::var("EMAIL_PASS").unwrap_or_default();

        // The receiving mailbox used to be a hardcoded literal; it is now
        // configuration. A half-configured box routes mail to its own
        // sending account rather than to nobody.
        let recipient = match std::env::var("RECIPIENT_EMAIL") {
            Ok(val) if !val.trim().is_empty() => val,
            _ => {
                if !email_user.is_empty() {
                    log::warn!("No RECIPIENT_EMAIL set — delivering to EMAIL_USER");
                }
                email_user.clone()
            }
        };

        AppConfig {
            port,
            smtp_host,
            smtp_port,
            email_user,
            email_pass,
            recipient,
        }
    }

    /// Address string for the HTTP listener.
    pub fn bind_addr(&self) -> (String, u16) {
        ("0.0.0.0".to_string(), self.port)
    }

    /// Whether SMTP credentials are present.
    pub fn has_mail_credentials(&self) -> bool {
        !self.email_user.is_empty() && !self.email_pass.is_empty()
    }
}
