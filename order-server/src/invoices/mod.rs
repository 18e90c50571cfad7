//! Invoice presentation

pub mod view;
