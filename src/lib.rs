pub mod analysis;
pub mod backend;
pub mod catalog;
pub mod web;
