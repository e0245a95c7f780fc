//! # Extracteurs validés
//!
//! Extracteurs actix-web qui désérialisent puis valident (via `validator`)
//! le corps JSON, la query string ou les paramètres de chemin avant que le
//! handler ne s'exécute. Toute erreur est convertie en `AppError` et donc
//! en réponse 422 structurée.
//!
//! Les `*Config` d'actix sont aussi reconfigurés ici pour que les extracteurs
//! standards (`web::Json`, `web::Query`, `web::Path`) renvoient le même format.

use actix_web::{dev::Payload, web, Error, FromRequest, HttpRequest};
use futures_util::future::{ready, LocalBoxFuture, Ready};
use serde::de::DeserializeOwned;
use std::ops::Deref;
use validator::Validate;

use crate::utils::error::{AppError, RequestPart};

/// Corps JSON désérialisé et validé
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

/// Query string désérialisée et validée
#[derive(Debug)]
pub struct ValidatedQuery<T>(pub T);

/// Paramètres de chemin désérialisés et validés
#[derive(Debug)]
pub struct ValidatedPath<T>(pub T);

macro_rules! impl_inner {
    ($($wrapper:ident),*) => {$(
        impl<T> $wrapper<T> {
            pub fn into_inner(self) -> T {
                self.0
            }
        }

        impl<T> Deref for $wrapper<T> {
            type Target = T;

            fn deref(&self) -> &T {
                &self.0
            }
        }
    )*};
}

impl_inner!(ValidatedJson, ValidatedQuery, ValidatedPath);

impl<T> FromRequest for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
{
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let json = web::Json::<T>::from_request(req, payload);

        Box::pin(async move {
            let value = json.await?.into_inner();
            value
                .validate()
                .map_err(|errors| AppError::validation(RequestPart::Body, errors))?;
            Ok(ValidatedJson(value))
        })
    }
}

impl<T> FromRequest for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = web::Query::<T>::from_query(req.query_string())
            .map_err(|err| AppError::invalid_request(RequestPart::Query, err.to_string()))
            .and_then(|query| {
                let value = query.into_inner();
                value
                    .validate()
                    .map_err(|errors| AppError::validation(RequestPart::Query, errors))?;
                Ok(ValidatedQuery(value))
            })
            .map_err(Error::from);

        ready(result)
    }
}

impl<T> FromRequest for ValidatedPath<T>
where
    T: DeserializeOwned + Validate,
{
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = req
            .match_info()
            .load::<T>()
            .map_err(|err| AppError::invalid_request(RequestPart::Path, err.to_string()))
            .and_then(|value| {
                value
                    .validate()
                    .map_err(|errors| AppError::validation(RequestPart::Path, errors))?;
                Ok(ValidatedPath(value))
            })
            .map_err(Error::from);

        ready(result)
    }
}

/// Valeurs multiples d'un paramètre de query répété (`?key=a&key=b`)
pub fn query_values(req: &HttpRequest, key: &str) -> Vec<String> {
    url::form_urlencoded::parse(req.query_string().as_bytes())
        .filter(|(name, _)| name == key)
        .map(|(_, value)| value.into_owned())
        .collect()
}

/// Erreurs de désérialisation JSON → 422
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::invalid_request(RequestPart::Body, err.to_string()).into()
    })
}

/// Erreurs de query string → 422
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::invalid_request(RequestPart::Query, err.to_string()).into()
    })
}

/// Erreurs de paramètres de chemin → 422 (404 par défaut dans actix)
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        AppError::invalid_request(RequestPart::Path, err.to_string()).into()
    })
}
