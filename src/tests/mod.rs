#![cfg(test)]

pub mod fixtures;
pub mod helpers;

mod public_routes;
