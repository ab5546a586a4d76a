mod setup;

pub use setup::SetupFormDto;
