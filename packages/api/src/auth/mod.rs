//! Authentication endpoints (`/api/auth/*`).
//!
//! Every call here relies on the session cookie set by a successful
//! [`ApiClient::login`] or [`ApiClient::register`].

mod session;

pub use session::{Session, USER_STORAGE_KEY};

use serde::{Deserialize, Serialize};

use crate::client::{ensure_success, ApiClient, Reply};
use crate::endpoint::Endpoint;
use crate::error::ApiError;
use crate::models::User;

/// Body for `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body for `POST /api/auth/verifyEmail`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub verification_code: String,
}

/// Body for `POST /api/auth/upload-profile-pic`; `image` is a data URL.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProfilePicRequest {
    pub image: String,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    user: Option<User>,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfilePicResponse {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    profile_pic: Option<String>,
}

impl ProfilePicResponse {
    fn into_reply(self) -> Reply<Option<String>> {
        Reply {
            data: self.profile_pic.filter(|pic| !pic.trim().is_empty()),
            message: self.message,
        }
    }
}

impl UserResponse {
    fn into_reply(self) -> Result<Reply<Option<User>>, ApiError> {
        ensure_success(self.success, &self.message)?;
        Ok(Reply {
            data: self.user,
            message: self.message,
        })
    }

    fn into_user_reply(self) -> Result<Reply<User>, ApiError> {
        let reply = self.into_reply()?;
        match reply.data {
            Some(user) => Ok(Reply {
                data: user,
                message: reply.message,
            }),
            None => Err(ApiError::Rejected {
                message: reply.message,
            }),
        }
    }
}

impl ApiClient {
    /// Sign in with email and password. The response sets the session cookie.
    pub async fn login(&self, request: &LoginRequest) -> Result<Reply<User>, ApiError> {
        let body: UserResponse = self
            .send(self.request(Endpoint::Login).json(request))
            .await?;
        body.into_user_reply()
    }

    /// Create an account. The API may sign the new user in straight away, in
    /// which case the reply carries the user.
    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<Reply<Option<User>>, ApiError> {
        let body: UserResponse = self
            .send(self.request(Endpoint::Register).json(request))
            .await?;
        body.into_reply()
    }

    /// Invalidate the server-side session.
    pub async fn logout(&self) -> Result<(), ApiError> {
        self.send_unit(self.request(Endpoint::Logout))
            .await
    }

    /// Ask the server who the session cookie belongs to.
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let body: UserResponse = self
            .send(self.request(Endpoint::CurrentUser))
            .await?;
        Ok(body.into_user_reply()?.data)
    }

    pub async fn verify_email(
        &self,
        request: &VerifyEmailRequest,
    ) -> Result<Reply<Option<User>>, ApiError> {
        let body: UserResponse = self
            .send(self.request(Endpoint::VerifyEmail).json(request))
            .await?;
        body.into_reply()
    }

    pub async fn resend_verification(&self) -> Result<Reply<()>, ApiError> {
        let body: MessageResponse = self
            .send(self.request(Endpoint::ResendVerification))
            .await?;
        ensure_success(body.success, &body.message)?;
        Ok(Reply {
            data: (),
            message: body.message,
        })
    }

    /// Upload a new profile picture. The reply carries the stored picture
    /// reference when the server sends one back.
    pub async fn upload_profile_pic(
        &self,
        request: &ProfilePicRequest,
    ) -> Result<Reply<Option<String>>, ApiError> {
        let body: ProfilePicResponse = self
            .send(
                self.request(Endpoint::UploadProfilePic)
                    .json(request),
            )
            .await?;
        Ok(body.into_reply())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::decode;

    #[test]
    fn test_login_reply_requires_user() {
        let body: UserResponse = decode(200, r#"{"message":"Logged in"}"#).unwrap();
        assert_eq!(
            body.into_user_reply().unwrap_err(),
            ApiError::Rejected {
                message: Some("Logged in".to_string())
            }
        );

        let body: UserResponse = decode(
            200,
            r#"{"message":"Logged in","user":{"_id":"u1","email":"ada@example.com","isVerified":true}}"#,
        )
        .unwrap();
        let reply = body.into_user_reply().unwrap();
        assert_eq!(reply.data.id, "u1");
        assert_eq!(reply.message_or("Login successful!"), "Logged in");
    }

    #[test]
    fn test_session_check_rejects_unsuccessful_body() {
        let body: UserResponse = decode(
            200,
            r#"{"success":false,"message":"Not authenticated","user":null}"#,
        )
        .unwrap();
        assert!(matches!(
            body.into_user_reply(),
            Err(ApiError::Rejected { .. })
        ));
    }

    #[test]
    fn test_register_reply_user_is_optional() {
        let body: UserResponse =
            decode(201, r#"{"message":"Account created. Check your email."}"#).unwrap();
        let reply = body.into_reply().unwrap();
        assert!(reply.data.is_none());
        assert_eq!(
            reply.message.as_deref(),
            Some("Account created. Check your email.")
        );
    }

    #[test]
    fn test_request_bodies() {
        let body = serde_json::to_value(VerifyEmailRequest {
            verification_code: "123456".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "verificationCode": "123456" }));

        let body = serde_json::to_value(RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "password": "secret1"
            })
        );
    }

    #[test]
    fn test_profile_pic_reply() {
        let body: ProfilePicResponse = decode(
            200,
            r#"{"message":"Uploaded","profilePic":"/uploads/u1.png"}"#,
        )
        .unwrap();
        let reply = body.into_reply();
        assert_eq!(reply.data.as_deref(), Some("/uploads/u1.png"));

        // Accepted without a reference: the caller keeps the current picture.
        let body: ProfilePicResponse = decode(200, r#"{"message":"Uploaded"}"#).unwrap();
        let reply = body.into_reply();
        assert_eq!(reply.data, None);
        assert_eq!(reply.message.as_deref(), Some("Uploaded"));
    }
}
