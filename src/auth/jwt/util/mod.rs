use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::time},
    auth::jwt::models::claims::Claims,
};

use super::config::JWT_EXP;

pub fn sign_jwt(user_id: &str, secret: &str) -> Result<String, ApiError> {
    let iat = time::current_time_in_secs();
    let claims = Claims {
        id: user_id.to_string(),
        iat,
        exp: iat + JWT_EXP,
    };

    match encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    ) {
        Ok(jwt) => Ok(jwt),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

pub fn decode_jwt(jwt: &str, secret: &str) -> Result<Claims, ErrorKind> {
    let result = decode::<Claims>(
        jwt,
        &DecodingKey::from_secret(secret.as_ref()),
        &Validation::new(Algorithm::HS256),
    );

    match result {
        Ok(data) => Ok(data.claims),
        Err(e) => Err(e.kind().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_what_it_signs() {
        let jwt = sign_jwt("5b0c6d8e-1a6e-4d8a-9d3a-0c9b8f1f2e11", "secret").unwrap();
        let claims = decode_jwt(&jwt, "secret").unwrap();

        assert_eq!(claims.id, "5b0c6d8e-1a6e-4d8a-9d3a-0c9b8f1f2e11");
        assert_eq!(claims.exp - claims.iat, JWT_EXP);
    }

    #[test]
    fn rejects_token_signed_with_another_secret() {
        let jwt = sign_jwt("user", "secret").unwrap();

        assert!(matches!(
            decode_jwt(&jwt, "other-secret"),
            Err(ErrorKind::InvalidSignature)
        ));
    }

    #[test]
    fn rejects_expired_token() {
        let claims = Claims {
            id: "user".to_string(),
            iat: 1_000,
            exp: 2_000,
        };
        let jwt = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("secret".as_ref()),
        )
        .unwrap();

        assert!(matches!(
            decode_jwt(&jwt, "secret"),
            Err(ErrorKind::ExpiredSignature)
        ));
    }
}
