//! Concrete screens.
//!
//! | Screen   | A          | B            | X             | Y          |
//! |----------|------------|--------------|---------------|------------|
//! | HOME     | FILES      | SETTINGS     | NETWORK       | PONG       |
//! | SETTINGS | up         | down         | HOME          | open entry |
//! | CLOCK    | up         | down         | SETTINGS      | choose     |
//! | COLORS   | up         | down         | SETTINGS      | choose     |
//! | FILES    | up         | down         | parent / HOME | enter      |
//! | NETWORK  | -          | -            | HOME          | -          |
//! | PONG     | paddle up  | paddle down  | HOME          | pause      |

pub mod files;
pub mod home;
pub mod network;
pub mod pong;
pub mod select;
pub mod settings;

pub use files::FilesScreen;
pub use home::HomeScreen;
pub use network::NetworkScreen;
pub use pong::PongScreen;
pub use select::SelectScreen;
pub use settings::{SelectCallback, SettingsScreen};

pub const HOME: &str = "HOME";
pub const FILES: &str = "FILES";
pub const SETTINGS: &str = "SETTINGS";
pub const NETWORK: &str = "NETWORK";
pub const CLOCK: &str = "CLOCK";
pub const COLORS: &str = "COLORS";
pub const PONG: &str = "PONG";
