//! Issuing, verifying, and extracting bearer tokens.

// Code in this module is adapted from the JWT example in the axum
// repository: https://github.com/tokio-rs/axum/blob/main/examples/jwt

use axum::{
    RequestPartsExt,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::{AppState, Error, auth::is_token_blacklisted, models::UserID};

/// How long a freshly issued token stays valid.
const TOKEN_DURATION: Duration = Duration::days(1);

/// The contents of a JSON Web Token.
///
/// Protected route handlers take a `Claims` argument; extraction verifies
/// the bearer token's signature and expiry and rejects blacklisted tokens,
/// so a handler holding a `Claims` value knows the caller is authenticated.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    /// The ID of the authenticated user.
    sub: i64,
    /// The time the token was issued as a unix timestamp.
    iat: usize,
    /// The expiry time of the token as a unix timestamp.
    exp: usize,
}

impl Claims {
    /// The verified ID of the user that presented the token.
    pub(crate) fn user_id(&self) -> UserID {
        UserID::new(self.sub)
    }
}

impl<S> FromRequestParts<S> for Claims
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| Error::InvalidToken)?;

        let state = AppState::from_ref(state);

        let token_data = decode_jwt(bearer.token(), state.decoding_key())?;

        let connection = state.db_connection().lock().unwrap();
        if is_token_blacklisted(bearer.token(), &connection)? {
            return Err(Error::InvalidToken);
        }

        Ok(token_data.claims)
    }
}

/// Create a signed token for `user_id`.
///
/// # Errors
/// Returns an [Error::TokenCreation] if signing fails. The cause is logged
/// on the server.
pub(crate) fn encode_jwt(user_id: UserID, encoding_key: &EncodingKey) -> Result<String, Error> {
    let now = OffsetDateTime::now_utc();
    let claims = Claims {
        sub: user_id.as_i64(),
        iat: now.unix_timestamp() as usize,
        exp: (now + TOKEN_DURATION).unix_timestamp() as usize,
    };

    encode(&Header::default(), &claims, encoding_key).map_err(|error| {
        tracing::error!("could not sign a new token: {}", error);
        Error::TokenCreation
    })
}

fn decode_jwt(
    jwt_token: &str,
    decoding_key: &DecodingKey,
) -> Result<jsonwebtoken::TokenData<Claims>, Error> {
    decode(jwt_token, decoding_key, &Validation::default()).map_err(|_| Error::InvalidToken)
}
