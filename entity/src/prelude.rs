pub use super::auth_session::Entity as AuthSession;
pub use super::comment::Entity as Comment;
pub use super::connection::Entity as Connection;
pub use super::exercise_attempt::Entity as ExerciseAttempt;
pub use super::flashcard::Entity as Flashcard;
pub use super::flashcard_review::Entity as FlashcardReview;
pub use super::lesson::Entity as Lesson;
pub use super::lesson_exercise::Entity as LessonExercise;
pub use super::lesson_file::Entity as LessonFile;
pub use super::notification::Entity as Notification;
pub use super::post::Entity as Post;
pub use super::reaction::Entity as Reaction;
pub use super::room::Entity as Room;
pub use super::room_access_request::Entity as RoomAccessRequest;
pub use super::room_member::Entity as RoomMember;
pub use super::room_message::Entity as RoomMessage;
pub use super::user::Entity as User;
