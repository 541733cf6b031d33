//! Email verification codes and the outbound mail boundary.
//!
//! Verification codes are kept in an in-memory store keyed by email address
//! with a five-minute TTL, instead of ambient session state: issuing, checking
//! and expiry are all explicit. A code is one-time-use; a successful check
//! consumes it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

use crate::error::AppError;

/// Time-to-live for verification codes in seconds.
const VERIFICATION_CODE_TTL_SECONDS: u64 = 300;

/// Length of the numeric verification code.
const VERIFICATION_CODE_LENGTH: u32 = 6;

/// Stored verification code with expiration timestamp.
#[derive(Clone)]
struct VerificationCode {
    code: String,
    expires_at: Instant,
}

impl VerificationCode {
    fn new(code: String, ttl: Duration) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// In-memory store of pending verification codes, keyed by email address.
///
/// Issuing a new code for an email replaces any previous one. Codes expire
/// after five minutes and are invalidated on first successful check, so each
/// code verifies at most once.
#[derive(Clone)]
pub struct VerificationCodeService {
    codes: Arc<RwLock<HashMap<String, VerificationCode>>>,
}

impl VerificationCodeService {
    pub fn new() -> Self {
        Self {
            codes: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Generates a new random code for the email and stores it with the TTL.
    ///
    /// # Returns
    /// - `String` - The generated six-digit code
    pub async fn issue(&self, email: &str) -> String {
        self.issue_with_ttl(email, Duration::from_secs(VERIFICATION_CODE_TTL_SECONDS))
            .await
    }

    /// Generates a new random code for the email with a caller-chosen TTL.
    pub async fn issue_with_ttl(&self, email: &str, ttl: Duration) -> String {
        let code_string = Self::generate_code();

        self.codes.write().await.insert(
            email.to_string(),
            VerificationCode::new(code_string.clone(), ttl),
        );

        code_string
    }

    /// Validates the provided code for the email.
    ///
    /// A matching, unexpired code is consumed so it cannot be replayed. An
    /// expired code is removed and fails validation.
    ///
    /// # Returns
    /// - `true` - Code matched and was valid; it has been consumed
    /// - `false` - No code issued, code expired, or code did not match
    pub async fn verify_and_consume(&self, email: &str, input_code: &str) -> bool {
        let mut codes = self.codes.write().await;

        if let Some(stored) = codes.get(email) {
            if stored.is_expired() {
                codes.remove(email);
                return false;
            }

            if stored.matches(input_code) {
                codes.remove(email);
                return true;
            }
        }

        false
    }

    fn generate_code() -> String {
        let mut rng = rand::rng();
        let code = rng.random_range(0..10u32.pow(VERIFICATION_CODE_LENGTH));

        format!("{:06}", code)
    }

    /// Checks whether a valid code is currently stored for the email.
    #[cfg(test)]
    pub async fn has_valid_code(&self, email: &str) -> bool {
        let mut codes = self.codes.write().await;

        if let Some(stored) = codes.get(email) {
            if stored.is_expired() {
                codes.remove(email);
                return false;
            }
            return true;
        }

        false
    }
}

impl Default for VerificationCodeService {
    fn default() -> Self {
        Self::new()
    }
}

/// Outbound mail transport boundary.
///
/// The application only needs to hand a verification code to a recipient;
/// delivery guarantees belong to the transport behind this trait.
pub trait Mailer: Send + Sync {
    fn send_verification_code(&self, recipient: &str, code: &str);
}

/// Transport that writes the mail to the log instead of sending it.
///
/// Stands in for a real SMTP transport in development and tests.
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send_verification_code(&self, recipient: &str, code: &str) {
        tracing::info!("Verification mail to {}: code {}", recipient, code);
    }
}

/// Service orchestrating code issuance and checking for the signup flow.
pub struct MailService<'a> {
    codes: &'a VerificationCodeService,
    mailer: &'a dyn Mailer,
}

impl<'a> MailService<'a> {
    pub fn new(codes: &'a VerificationCodeService, mailer: &'a dyn Mailer) -> Self {
        Self { codes, mailer }
    }

    /// Issues a fresh code for the email and hands it to the mail transport.
    pub async fn send_verification_code(&self, email: &str) -> Result<(), AppError> {
        let code = self.codes.issue(email).await;

        self.mailer.send_verification_code(email, &code);

        Ok(())
    }

    /// Checks a submitted code against the stored one.
    ///
    /// # Returns
    /// - `Ok(())` - Code matched; it has been consumed
    /// - `Err(AppError::BadRequest)` - Code mismatch, expired, or never issued
    pub async fn verify_code(&self, email: &str, code: &str) -> Result<(), AppError> {
        if !self.codes.verify_and_consume(email, code).await {
            return Err(AppError::BadRequest(
                "Verification code does not match".to_string(),
            ));
        }

        Ok(())
    }
}
