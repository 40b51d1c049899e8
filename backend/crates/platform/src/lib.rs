//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (Argon2id, salted, zeroized handling)
//! - Bearer token issuance (HS256, fixed lifetime)

pub mod password;
pub mod token;
