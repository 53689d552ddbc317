//! Admin user management commands.

use rand::{Rng, distr::Alphanumeric};
use secrecy::SecretString;

use souk_admin::db;
use souk_admin::services::AdminAuthService;
use souk_core::AdminRole;

/// Length of generated passwords.
const GENERATED_PASSWORD_LENGTH: usize = 20;

/// Create an admin user.
///
/// When no password is supplied, a random one is generated and logged once -
/// the operator is expected to rotate it after first login.
///
/// # Errors
///
/// Returns an error if the role is unknown, the environment is missing the
/// database URL, or the user already exists.
pub async fn create_user(
    email: &str,
    name: &str,
    role: &str,
    password: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let role: AdminRole = role.parse()?;

    let database_url = std::env::var("ADMIN_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| "ADMIN_DATABASE_URL not set")?;

    let pool = db::create_pool(&database_url).await?;

    let (password, generated) = match password {
        Some(p) => (p, false),
        None => (generate_password(), true),
    };

    let user = AdminAuthService::new(&pool)
        .create_user(email, name, role, &password)
        .await?;

    tracing::info!(id = %user.id, email = %user.email, role = %user.role, "Admin user created");
    if generated {
        tracing::info!("Generated password: {password}");
    }

    Ok(())
}

/// Generate a random alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_shape() {
        let password = generate_password();
        assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(generate_password(), generate_password());
    }
}
