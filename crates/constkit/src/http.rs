//! HTTP status codes used across API clients.

use serde::Serialize;

/// HTTP status codes known to the helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HttpStatus {
    /// 200
    Ok,
    /// 201
    Created,
    /// 204
    NoContent,
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 409
    Conflict,
    /// 422
    UnprocessableEntity,
    /// 500
    InternalServerError,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
}

impl HttpStatus {
    /// Every status in the table, ordered by code.
    pub const ALL: [HttpStatus; 12] = [
        HttpStatus::Ok,
        HttpStatus::Created,
        HttpStatus::NoContent,
        HttpStatus::BadRequest,
        HttpStatus::Unauthorized,
        HttpStatus::Forbidden,
        HttpStatus::NotFound,
        HttpStatus::Conflict,
        HttpStatus::UnprocessableEntity,
        HttpStatus::InternalServerError,
        HttpStatus::BadGateway,
        HttpStatus::ServiceUnavailable,
    ];

    /// Numeric status code.
    pub const fn code(&self) -> u16 {
        match self {
            HttpStatus::Ok => 200,
            HttpStatus::Created => 201,
            HttpStatus::NoContent => 204,
            HttpStatus::BadRequest => 400,
            HttpStatus::Unauthorized => 401,
            HttpStatus::Forbidden => 403,
            HttpStatus::NotFound => 404,
            HttpStatus::Conflict => 409,
            HttpStatus::UnprocessableEntity => 422,
            HttpStatus::InternalServerError => 500,
            HttpStatus::BadGateway => 502,
            HttpStatus::ServiceUnavailable => 503,
        }
    }

    /// Table key, e.g. `NOT_FOUND`.
    pub fn name(&self) -> &'static str {
        match self {
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "CREATED",
            HttpStatus::NoContent => "NO_CONTENT",
            HttpStatus::BadRequest => "BAD_REQUEST",
            HttpStatus::Unauthorized => "UNAUTHORIZED",
            HttpStatus::Forbidden => "FORBIDDEN",
            HttpStatus::NotFound => "NOT_FOUND",
            HttpStatus::Conflict => "CONFLICT",
            HttpStatus::UnprocessableEntity => "UNPROCESSABLE_ENTITY",
            HttpStatus::InternalServerError => "INTERNAL_SERVER_ERROR",
            HttpStatus::BadGateway => "BAD_GATEWAY",
            HttpStatus::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        }
    }

    /// Look up a status by its numeric code.
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// 2xx codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code())
    }

    /// 4xx codes.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.code())
    }

    /// 5xx codes.
    pub fn is_server_error(&self) -> bool {
        self.code() >= 500
    }
}

impl std::fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.code(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(HttpStatus::Ok.code(), 200);
        assert_eq!(HttpStatus::NoContent.code(), 204);
        assert_eq!(HttpStatus::UnprocessableEntity.code(), 422);
        assert_eq!(HttpStatus::ServiceUnavailable.code(), 503);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(HttpStatus::from_code(409), Some(HttpStatus::Conflict));
        assert_eq!(HttpStatus::from_code(418), None);
    }

    #[test]
    fn test_all_is_sorted_and_unique() {
        let codes: Vec<u16> = HttpStatus::ALL.iter().map(HttpStatus::code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn test_classes() {
        assert!(HttpStatus::Created.is_success());
        assert!(HttpStatus::Forbidden.is_client_error());
        assert!(HttpStatus::BadGateway.is_server_error());
        assert!(!HttpStatus::NotFound.is_server_error());
    }

    #[test]
    fn test_display_and_serialize() {
        assert_eq!(HttpStatus::NotFound.to_string(), "404 NOT_FOUND");
        assert_eq!(
            serde_json::to_string(&HttpStatus::InternalServerError).unwrap(),
            "\"INTERNAL_SERVER_ERROR\""
        );
    }
}
