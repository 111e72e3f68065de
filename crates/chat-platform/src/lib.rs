pub mod dispatch;
pub mod responder;
pub mod seed;

#[cfg(test)]
mod tests;
