pub mod actions;
pub mod error;

#[cfg(test)]
mod tests;
