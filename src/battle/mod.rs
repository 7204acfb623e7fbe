pub mod engine;
pub mod participant;
pub mod state;

#[cfg(test)]
mod tests;
