mod connection;
mod exercise;
mod flashcard;
mod lesson;
mod notification;
mod reaction;
mod room;
mod session;
mod user;
