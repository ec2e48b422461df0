/*
MIT License

Copyright (c) 2026 The cubefield developers
*/

//! Shared constants and unit conversions

pub mod constants;
pub mod conversions;
