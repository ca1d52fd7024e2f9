use regex::Regex;

pub mod edit_user_dto;

lazy_static! {
    pub static ref DISPLAYNAME_REGEX: Regex = Regex::new(r"^[\p{L}\p{N} _.'-]{1,48}$").unwrap();
}
