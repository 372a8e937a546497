pub mod error;
pub mod greeting;
pub mod lang;

pub use error::{GreetingError, Result};
pub use greeting::{DEFAULT_GREETING, GREETING_EN, GREETING_RU, greet, greet_tag};
pub use lang::Language;
