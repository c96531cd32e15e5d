pub mod chatbot;
pub mod classifier;
pub mod gateway;
pub mod gemini;
pub mod prompt;
