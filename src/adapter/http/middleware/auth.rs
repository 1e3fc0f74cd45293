use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::adapter::http::middleware::extractor::AuthUser;
use crate::application::app_error::{AppError, AppResult};
use crate::application::dto::session::{SessionDTO, SessionValidationResult};
use crate::application::interactors::session::ValidateSessionInteractor;
use crate::infra::config::{AppConfig, SessionConfig};

/// Idle-session guard. Layered onto every route that requires a logged-in
/// user; routes without this layer never read or refresh `last_touch`.
///
/// An idle session is deleted server-side and the request is rejected with
/// 401 before the handler runs. An active session has its `last_touch`
/// refreshed as part of the same pass.
pub async fn auth_middleware(
    State(config): State<Arc<AppConfig>>,
    interactor: ValidateSessionInteractor,
    mut request: Request,
    next: Next,
) -> AppResult<Response> {
    let session_id = extract_session_id(&request, &config.session.cookie_name)?;
    let dto = SessionDTO {
        id: session_id,
        idle_timeout_minutes: config.session.idle_timeout_minutes,
    };
    let result = interactor.execute(dto).await?;
    match result.status {
        SessionValidationResult::Valid(user_id) => {
            request.extensions_mut().insert(AuthUser {
                user_id: user_id.value.to_string(),
            });
        }
        SessionValidationResult::Expired | SessionValidationResult::Invalid => {
            return Err(AppError::InvalidCredentials);
        }
    }

    Ok(next.run(request).await)
}

fn extract_session_id(request: &Request, cookie_name: &str) -> AppResult<String> {
    let cookie_header = request
        .headers()
        .get(axum::http::header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .ok_or(AppError::InvalidCredentials)?;

    for cookie in cookie_header.split(";") {
        let cookie = cookie.trim();
        if let Some(value) = cookie.strip_prefix(&format!("{}=", cookie_name)) {
            return Ok(value.to_string());
        }
    }

    Err(AppError::InvalidCredentials)
}

pub fn build_session_cookie(session_id: &str, config: &SessionConfig) -> String {
    let secure = if config.cookie_secure { "; Secure" } else { "" };
    let http_only = if config.cookie_http_only {
        "; HttpOnly"
    } else {
        ""
    };
    format!(
        "{}={}; Path=/; Max-Age={}; SameSite=Lax{}{}",
        config.cookie_name, session_id, config.cookie_max_age, secure, http_only
    )
}

pub fn build_logout_cookie(config: &SessionConfig) -> String {
    format!("{}=; Path=/; Max-Age=0; SameSite=Lax", config.cookie_name)
}

#[cfg(test)]
mod tests {
    use crate::adapter::http::middleware::auth::{build_logout_cookie, build_session_cookie};
    use crate::infra::config::SessionConfig;

    fn session_config() -> SessionConfig {
        SessionConfig {
            idle_timeout_minutes: 30,
            cookie_name: "session_id".to_string(),
            cookie_max_age: 1_209_600,
            cookie_secure: true,
            cookie_http_only: true,
        }
    }

    #[test]
    fn test_build_session_cookie() {
        let cookie = build_session_cookie("abc", &session_config());
        assert_eq!(
            cookie,
            "session_id=abc; Path=/; Max-Age=1209600; SameSite=Lax; Secure; HttpOnly"
        );
    }

    #[test]
    fn test_build_logout_cookie_expires_immediately() {
        let cookie = build_logout_cookie(&session_config());
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.starts_with("session_id=;"));
    }
}
