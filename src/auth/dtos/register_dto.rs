use serde::Deserialize;
use validator::Validate;

use super::USERNAME_REGEX;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterDto {
    #[validate(regex(
        path = "USERNAME_REGEX",
        message = "username must be 3 to 24 letters, digits, dots, dashes or underscores."
    ))]
    pub username: String,
    #[validate(email(message = "email must be a valid email address."))]
    pub email: String,
    #[validate(
        length(
            min = 8,
            max = 512,
            message = "password must be between 8 and 512 characters."
        ),
        custom(
            function = "super::validate_password",
            message = "password must contain an uppercase letter, a lowercase letter, a digit and a symbol."
        )
    )]
    pub password: String,
}
