// src/models/mod.rs

pub mod contest_result;
pub mod question;
pub mod swot;
