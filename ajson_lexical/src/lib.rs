//! This crate implements a lenient tokenizer for JSON-like text. It converts a raw character
//! stream into an ordered sequence of typed tokens without ever aborting on malformed input;
//! lexical problems surface in-band as [`token::TokenKind::Illegal`] tokens.
//!
//! The final output of this phase is the sequence of [`token::Token`]s produced by
//! [`lexer::Lexer::tokenize`], terminated by an end-of-input token.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod lexer;
pub mod token;
