//! This module acts as a central hub for all database-related logic.
//! It declares the specialized submodules so they can be accessed from
//! elsewhere in the application via their full path, e.g.
//! `database::todos::list_todos`.

pub mod economy;
pub mod init;
pub mod models;
pub mod stocks;
pub mod todos;
