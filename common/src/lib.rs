pub mod db;
pub mod domain;
pub mod entities;
pub mod settings;
