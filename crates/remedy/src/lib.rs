//! HTTP client for the external remedy text service

pub mod client;

pub use client::{ClientError, RemedyClient, RemedyRequest, RemedyResponse};
