use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::rngs::OsRng;

pub async fn hash(password: String) -> Result<String, String> {
    let result = tokio::task::spawn_blocking(move || {
        let salt = SaltString::generate(&mut OsRng);

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| e.to_string())
    })
    .await;

    match result {
        Ok(hash) => hash,
        Err(e) => {
            tracing::error!(%e);
            Err(e.to_string())
        }
    }
}

pub async fn verify(password: String, hash: String) -> Result<bool, String> {
    let result = tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash).map_err(|e| e.to_string())?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await;

    match result {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!(%e);
            Err(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn verifies_the_password_it_hashed() {
        let hash = hash("Sup3r$ecret".to_string()).await.unwrap();

        assert!(verify("Sup3r$ecret".to_string(), hash.clone()).await.unwrap());
        assert!(!verify("wrong".to_string(), hash).await.unwrap());
    }

    #[tokio::test]
    async fn malformed_hash_is_an_error() {
        assert!(verify("pw".to_string(), "not-a-hash".to_string())
            .await
            .is_err());
    }
}
