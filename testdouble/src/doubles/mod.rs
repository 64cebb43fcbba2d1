//! The double variants.
//!
//! | Double           | Records            | Supplies                 | Verifies               |
//! |------------------|--------------------|--------------------------|------------------------|
//! | [`Mock`]         | latest call only   | return values, clamped   | arguments, call count  |
//! | [`Spy`]          | every call         | nothing                  | call count             |
//! | [`Stub`]         | count only         | return values, clamped   | call count             |
//! | [`InputDouble`]  | count only         | inputs, cycling          | call count             |
//! | [`OutputDouble`] | every output       | nothing                  | output text, count     |
//! | [`InjectDouble`] | count only         | one replacement object   | call count             |

mod inject;
mod input;
mod mock;
mod output;
mod spy;
mod stub;

pub use inject::InjectDouble;
pub use input::InputDouble;
pub use mock::Mock;
pub use output::OutputDouble;
pub use spy::Spy;
pub use stub::Stub;
