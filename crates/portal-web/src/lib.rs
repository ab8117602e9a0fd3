//! Leptos views for the Citizen Services Portal.
//!
//! Built with `ssr` by the server (`portal-api`) and with `hydrate` +
//! `islands` by the WASM client (`portal-web-client`).

pub mod app;
pub mod pages;
