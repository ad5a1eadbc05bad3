//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation. Factories only insert the row
//! they describe; create referenced rows first or use the `helpers` module.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let owner = factory::create_user(&db).await?;
//! let lesson = factory::create_lesson(&db, owner.id).await?;
//!
//! let card = factory::flashcard::FlashcardFactory::new(&db, lesson.id)
//!     .front("Capital of France?")
//!     .back("Paris")
//!     .build()
//!     .await?;
//! ```

pub mod comment;
pub mod connection;
pub mod exercise;
pub mod flashcard;
pub mod helpers;
pub mod lesson;
pub mod notification;
pub mod post;
pub mod room;
pub mod user;

pub use comment::create_comment;
pub use connection::create_connection;
pub use exercise::create_exercise;
pub use flashcard::create_flashcard;
pub use lesson::create_lesson;
pub use notification::create_notification;
pub use post::create_post;
pub use room::{create_room, create_room_member};
pub use user::create_user;
