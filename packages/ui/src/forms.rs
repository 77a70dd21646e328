//! # Form state and client-side validation
//!
//! Each screen keeps one of these structs in a signal and calls `validate()`
//! on submit. The request bodies from the `api` crate are only built here, so
//! a form that fails validation never produces anything to send.

use api::{
    LoginRequest, ProfilePicRequest, ProjectPayload, RegisterRequest, Url, VerifyEmailRequest,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const CODE_LEN: usize = 6;
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("All fields are required")]
    MissingFields,
    #[error("Please fill in all fields")]
    IncompleteProject,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please enter the verification code")]
    MissingCode,
    #[error("Verification code must be 6 digits")]
    CodeLength,
    #[error("Please enter a valid URL (e.g., https://example.com)")]
    InvalidUrl,
    #[error("Please select an image first.")]
    MissingImage,
    #[error("Please select an image file.")]
    UnsupportedImage,
    #[error("Images must be 10MB or smaller.")]
    ImageTooLarge,
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        if is_blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingCredentials);
        }
        Ok(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        if is_blank(&self.name) || is_blank(&self.email) || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Keep only digits, at most [`CODE_LEN`] of them.
pub fn sanitize_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(CODE_LEN)
        .collect()
}

pub fn validate_code(code: &str) -> Result<VerifyEmailRequest, FormError> {
    let code = code.trim();
    if code.is_empty() {
        return Err(FormError::MissingCode);
    }
    if code.len() != CODE_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(FormError::CodeLength);
    }
    Ok(VerifyEmailRequest {
        verification_code: code.to_string(),
    })
}

/// Create and edit share the same fields and rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectForm {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl ProjectForm {
    pub fn from_project(project: &api::Project) -> Self {
        Self {
            name: project.name.clone(),
            url: project.url.clone(),
            description: project.description.clone(),
        }
    }

    pub fn validate(&self) -> Result<ProjectPayload, FormError> {
        if is_blank(&self.name) || is_blank(&self.url) || is_blank(&self.description) {
            return Err(FormError::MissingFields);
        }
        let url = self.url.trim();
        if Url::parse(url).is_err() {
            return Err(FormError::InvalidUrl);
        }
        Ok(ProjectPayload {
            name: self.name.trim().to_string(),
            url: url.to_string(),
            description: self.description.trim().to_string(),
        })
    }

    /// Same rules as [`validate`](Self::validate); the edit screen words the
    /// missing-field error differently.
    pub fn validate_edit(&self) -> Result<ProjectPayload, FormError> {
        self.validate().map_err(|e| match e {
            FormError::MissingFields => FormError::IncompleteProject,
            other => other,
        })
    }
}

/// MIME type from the file's leading bytes.
fn sniff_image(bytes: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
        (b"\x00\x00\x01\x00", "image/x-icon"),
        (b"II*\x00", "image/tiff"),
        (b"MM\x00*", "image/tiff"),
    ];
    if let Some((_, mime)) = SIGNATURES.iter().find(|(magic, _)| bytes.starts_with(magic)) {
        return Some(*mime);
    }
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some("image/webp");
    }
    if bytes.len() >= 12 && &bytes[4..8] == b"ftyp" {
        match &bytes[8..12] {
            b"avif" | b"avis" => return Some("image/avif"),
            b"heic" | b"heix" | b"mif1" => return Some("image/heic"),
            _ => {}
        }
    }
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start();
    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        return Some("image/svg+xml");
    }
    None
}

/// MIME type from the file extension, for formats without a signature above.
fn image_mime_from_name(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "avif" => Some("image/avif"),
        "heic" | "heif" => Some("image/heic"),
        "bmp" => Some("image/bmp"),
        "ico" => Some("image/x-icon"),
        "tif" | "tiff" => Some("image/tiff"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

/// Names that are clearly not images, so the picker's `image/*` filter was
/// bypassed.
fn is_non_image_name(file_name: &str) -> bool {
    matches!(
        file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()),
        Some(ext) if matches!(
            ext.as_str(),
            "txt" | "pdf" | "doc" | "docx" | "zip" | "json" | "csv" | "html" | "exe" | "mp4" | "mp3"
        )
    )
}

/// Encode a picked file as a `data:` URL for preview and upload.
///
/// The type comes from the file's bytes, then its extension; an image picked
/// through the `image/*` filter with neither hint is sent as `image/*`.
pub fn image_data_url(file_name: &str, bytes: &[u8]) -> Result<String, FormError> {
    if bytes.len() > MAX_IMAGE_BYTES {
        return Err(FormError::ImageTooLarge);
    }
    let mime = match sniff_image(bytes).or_else(|| image_mime_from_name(file_name)) {
        Some(mime) => mime,
        None if is_non_image_name(file_name) => return Err(FormError::UnsupportedImage),
        None => "image/*",
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

pub fn validate_image(image: Option<&str>) -> Result<ProfilePicRequest, FormError> {
    match image {
        Some(image) if !image.is_empty() => Ok(ProfilePicRequest {
            image: image.to_string(),
        }),
        _ => Err(FormError::MissingImage),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        let blank_email = LoginForm {
            email: "  ".to_string(),
            password: "secret1".to_string(),
        };
        let blank_password = LoginForm {
            email: "ada@example.com".to_string(),
            password: String::new(),
        };

        assert_eq!(blank_email.validate(), Err(FormError::MissingCredentials));
        assert_eq!(blank_password.validate(), Err(FormError::MissingCredentials));
        assert_eq!(LoginForm::default().validate(), Err(FormError::MissingCredentials));
    }

    #[test]
    fn test_login_trims_email() {
        let form = LoginForm {
            email: " ada@example.com ".to_string(),
            password: " secret1 ".to_string(),
        };
        let request = form.validate().unwrap();
        assert_eq!(request.email, "ada@example.com");
        // Passwords are sent as typed.
        assert_eq!(request.password, " secret1 ");
    }

    fn signup() -> SignupForm {
        SignupForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret1".to_string(),
            confirm_password: "secret1".to_string(),
        }
    }

    #[test]
    fn test_signup_each_required_field() {
        let mut form = signup();
        form.name.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        let mut form = signup();
        form.email.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        let mut form = signup();
        form.password.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_signup_confirmation_and_length() {
        let mut form = signup();
        form.confirm_password = "secret2".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        let mut form = signup();
        form.password = "abc12".to_string();
        form.confirm_password = "abc12".to_string();
        assert_eq!(form.validate(), Err(FormError::PasswordTooShort));
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );

        let request = signup().validate().unwrap();
        assert_eq!(request.name, "Ada");
        assert_eq!(request.password, "secret1");
    }

    #[test]
    fn test_sanitize_code() {
        assert_eq!(sanitize_code("12a3-45"), "12345");
        assert_eq!(sanitize_code("1234567890"), "123456");
        assert_eq!(sanitize_code(" 9 8 7 "), "987");
        assert_eq!(sanitize_code("abcdef"), "");
        assert!(sanitize_code("٣٤٥١٢٣٤٥").is_empty());
    }

    #[test]
    fn test_validate_code() {
        assert_eq!(validate_code(""), Err(FormError::MissingCode));
        assert_eq!(validate_code("123"), Err(FormError::CodeLength));
        assert_eq!(validate_code("12345a"), Err(FormError::CodeLength));
        assert_eq!(
            validate_code("123456").unwrap().verification_code,
            "123456"
        );
    }

    fn project() -> ProjectForm {
        ProjectForm {
            name: "Storefront".to_string(),
            url: "https://shop.example.com".to_string(),
            description: "Checkout flow audit".to_string(),
        }
    }

    #[test]
    fn test_project_each_required_field() {
        let mut form = project();
        form.name = "   ".to_string();
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        let mut form = project();
        form.url.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));

        let mut form = project();
        form.description.clear();
        assert_eq!(form.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_project_rejects_invalid_url() {
        let mut form = project();
        form.url = "not-a-url".to_string();

        let err = form.validate().unwrap_err();
        assert_eq!(err, FormError::InvalidUrl);
        assert_eq!(
            err.to_string(),
            "Please enter a valid URL (e.g., https://example.com)"
        );
    }

    #[test]
    fn test_edit_wording() {
        let mut form = project();
        form.description = " ".to_string();
        assert_eq!(form.validate_edit(), Err(FormError::IncompleteProject));
        assert_eq!(
            FormError::IncompleteProject.to_string(),
            "Please fill in all fields"
        );

        form.description = "Audit".to_string();
        form.url = "example".to_string();
        assert_eq!(form.validate_edit(), Err(FormError::InvalidUrl));
    }

    #[test]
    fn test_project_payload_is_trimmed() {
        let form = ProjectForm {
            name: "  Storefront ".to_string(),
            url: " https://shop.example.com ".to_string(),
            description: "\tCheckout flow audit\n".to_string(),
        };
        let payload = form.validate().unwrap();
        assert_eq!(payload.name, "Storefront");
        assert_eq!(payload.url, "https://shop.example.com");
        assert_eq!(payload.description, "Checkout flow audit");
    }

    const PNG_HEADER: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

    #[test]
    fn test_image_data_url() {
        let url = image_data_url("avatar.PNG", &[0x89, 0x50, 0x4e, 0x47]).unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");

        assert_eq!(
            image_data_url("notes.txt", b"hello"),
            Err(FormError::UnsupportedImage)
        );
    }

    #[test]
    fn test_image_type_from_bytes() {
        let gif = image_data_url("avatar.gif", b"GIF89a").unwrap();
        assert!(gif.starts_with("data:image/gif;base64,"));

        let png = image_data_url("avatar", PNG_HEADER).unwrap();
        assert!(png.starts_with("data:image/png;base64,"));

        // Bytes win over a misleading extension.
        let jpeg = image_data_url("avatar.png", &[0xff, 0xd8, 0xff, 0xe0]).unwrap();
        assert!(jpeg.starts_with("data:image/jpeg;base64,"));

        let webp = image_data_url("photo", b"RIFF\x10\x00\x00\x00WEBPVP8 ").unwrap();
        assert!(webp.starts_with("data:image/webp;base64,"));

        let avif = image_data_url("photo", b"\x00\x00\x00\x1cftypavif").unwrap();
        assert!(avif.starts_with("data:image/avif;base64,"));

        let svg = image_data_url("logo", b"<?xml version=\"1.0\"?><svg></svg>").unwrap();
        assert!(svg.starts_with("data:image/svg+xml;base64,"));
    }

    #[test]
    fn test_image_type_fallbacks() {
        // Extension when the bytes carry no signature.
        let heic = image_data_url("IMG_0001.HEIC", b"\x00\x00\x00\x18ftypmsf1").unwrap();
        assert!(heic.starts_with("data:image/heic;base64,"));

        // Neither hint: still an image from the picker.
        let unknown = image_data_url("noextension", b"hello").unwrap();
        assert!(unknown.starts_with("data:image/*;base64,"));
    }

    #[test]
    fn test_image_size_limit() {
        let big = vec![0u8; MAX_IMAGE_BYTES + 1];
        assert_eq!(image_data_url("big.jpg", &big), Err(FormError::ImageTooLarge));
    }

    #[test]
    fn test_upload_requires_selection() {
        assert_eq!(validate_image(None), Err(FormError::MissingImage));
        assert_eq!(validate_image(Some("")), Err(FormError::MissingImage));
        assert!(validate_image(Some("data:image/png;base64,AAAA")).is_ok());
    }
}
