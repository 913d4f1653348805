//! Database repository layer.
//!
//! Repositories hold a borrowed `DatabaseConnection`, use SeaORM entity models internally
//! and return domain models so the layers above never depend on the table layout.

pub mod guild_config;

#[cfg(test)]
mod test;
