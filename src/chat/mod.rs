pub mod chat_assistant;
