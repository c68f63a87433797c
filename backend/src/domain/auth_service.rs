//! Login gate for the single-operator tool.
//!
//! The service only validates credentials; keeping the operator logged in
//! across requests is the caller's concern.

use anyhow::Result;
use log::{info, warn};

use crate::domain::commands::auth::{LoginCommand, LoginResult};

#[derive(Clone)]
pub struct AuthService {
    username: String,
    password: String,
}

impl AuthService {
    pub fn new(username: String, password: String) -> Self {
        Self { username, password }
    }

    /// Check a username/password pair. Comparison is exact, including case.
    pub fn login(&self, command: LoginCommand) -> Result<LoginResult> {
        let is_valid = command.username == self.username && command.password == self.password;

        let result = if is_valid {
            info!("Login succeeded for user '{}'", command.username);
            LoginResult {
                success: true,
                message: "Login successful.".to_string(),
            }
        } else {
            warn!("Login failed for user '{}'", command.username);
            LoginResult {
                success: false,
                message: "Invalid username or password.".to_string(),
            }
        };

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> AuthService {
        AuthService::new("admin".to_string(), "secret".to_string())
    }

    #[test]
    fn correct_credentials_succeed() -> Result<()> {
        let result = service().login(LoginCommand {
            username: "admin".to_string(),
            password: "secret".to_string(),
        })?;
        assert!(result.success);
        assert_eq!(result.message, "Login successful.");
        Ok(())
    }

    #[test]
    fn wrong_password_fails() -> Result<()> {
        let result = service().login(LoginCommand {
            username: "admin".to_string(),
            password: "wrong".to_string(),
        })?;
        assert!(!result.success);
        assert_eq!(result.message, "Invalid username or password.");
        Ok(())
    }

    #[test]
    fn comparison_is_case_sensitive() -> Result<()> {
        let result = service().login(LoginCommand {
            username: "Admin".to_string(),
            password: "secret".to_string(),
        })?;
        assert!(!result.success);
        Ok(())
    }

    #[test]
    fn empty_credentials_fail() -> Result<()> {
        let result = service().login(LoginCommand {
            username: String::new(),
            password: String::new(),
        })?;
        assert!(!result.success);
        Ok(())
    }
}
