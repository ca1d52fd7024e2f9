pub mod llm_output;
pub mod ocr;
pub mod pdf;
pub mod prompt;
