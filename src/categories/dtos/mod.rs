use regex::Regex;
use validator::ValidationError;

pub mod create_category_dto;
pub mod edit_category_dto;
pub mod get_categories_filter_dto;

lazy_static! {
    pub static ref COLOR_REGEX: Regex =
        Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$").unwrap();
}

pub static MAX_CATEGORY_NAME_CHARS: usize = 64;

pub fn validate_category_name(value: &str) -> Result<(), ValidationError> {
    let count = value.trim().chars().count();

    match count > 0 && count <= MAX_CATEGORY_NAME_CHARS {
        true => Ok(()),
        false => Err(ValidationError::new("category_name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_hex_colors() {
        for color in ["#FFF", "#4285F4", "#4285f4cc"] {
            assert!(COLOR_REGEX.is_match(color), "{}", color);
        }
    }

    #[test]
    fn rejects_other_colors() {
        for color in ["red", "4285F4", "#12345", "#GGGGGG", "#4285F4 "] {
            assert!(!COLOR_REGEX.is_match(color), "{}", color);
        }
    }

    #[test]
    fn names_are_checked_after_trimming() {
        assert!(validate_category_name(" Food ").is_ok());
        assert!(validate_category_name("   ").is_err());
        assert!(validate_category_name(&"a".repeat(65)).is_err());
    }
}
