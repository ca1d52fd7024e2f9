pub mod category_names;
pub mod extraction_response;
