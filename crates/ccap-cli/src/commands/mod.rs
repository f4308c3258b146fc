pub mod config_ops;
pub mod corpus_ops;
pub mod text_ops;
pub mod vocab_ops;
