pub mod knowledge_base_error;
