pub mod engine;
pub mod events;

#[cfg(test)]
mod tests;
