pub use super::developer::Entity as Developer;
pub use super::downloadable_content::Entity as DownloadableContent;
pub use super::franchise::Entity as Franchise;
pub use super::game::Entity as Game;
pub use super::game_barcode::Entity as GameBarcode;
pub use super::game_developer::Entity as GameDeveloper;
pub use super::game_genre::Entity as GameGenre;
pub use super::game_mode::Entity as GameMode;
pub use super::game_platform::Entity as GamePlatform;
pub use super::game_publisher::Entity as GamePublisher;
pub use super::game_release_date::Entity as GameReleaseDate;
pub use super::genre::Entity as Genre;
pub use super::platform::Entity as Platform;
pub use super::publisher::Entity as Publisher;
