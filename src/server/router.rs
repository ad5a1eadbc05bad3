use axum::{routing::get, Router};
use utoipa::{
    openapi::{
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
        OpenApi as OpenApiSpec,
    },
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{
            __path_login, __path_logout, __path_me, __path_register, login, logout, me, register,
            AUTH_TAG,
        },
        connection::{
            __path_accept_connection, __path_block_user, __path_delete_connection,
            __path_get_friends, __path_get_incoming_requests, __path_get_outgoing_requests,
            __path_reject_connection, __path_request_connection, accept_connection, block_user,
            delete_connection, get_friends, get_incoming_requests, get_outgoing_requests,
            reject_connection, request_connection, CONNECTION_TAG,
        },
        exercise::{
            __path_create_exercise, __path_delete_exercise, __path_get_attempts,
            __path_get_exercise, __path_get_lesson_exercises, __path_submit_attempt,
            __path_update_exercise, create_exercise, delete_exercise, get_attempts, get_exercise,
            get_lesson_exercises, submit_attempt, update_exercise, EXERCISE_TAG,
        },
        flashcard::{
            __path_create_flashcard, __path_delete_flashcard, __path_get_due_flashcards,
            __path_get_flashcard, __path_get_lesson_flashcards, __path_review_flashcard,
            __path_update_flashcard, create_flashcard, delete_flashcard, get_due_flashcards,
            get_flashcard, get_lesson_flashcards, review_flashcard, update_flashcard,
            FLASHCARD_TAG,
        },
        health::{__path_health, health, HEALTH_TAG},
        lesson::{
            __path_add_lesson_file, __path_create_lesson, __path_delete_lesson,
            __path_delete_lesson_file, __path_get_lesson, __path_get_lesson_files,
            __path_get_lessons, __path_update_lesson, add_lesson_file, create_lesson,
            delete_lesson, delete_lesson_file, get_lesson, get_lesson_files, get_lessons,
            update_lesson, LESSON_TAG,
        },
        notification::{
            __path_delete_notification, __path_get_notifications, __path_get_unread_count,
            __path_mark_all_notifications_read, __path_mark_notification_read, delete_notification,
            get_notifications, get_unread_count, mark_all_notifications_read,
            mark_notification_read, NOTIFICATION_TAG,
        },
        post::{
            __path_clear_reaction, __path_create_comment, __path_create_post,
            __path_delete_comment, __path_delete_post, __path_get_comments, __path_get_feed,
            __path_get_post, __path_set_reaction, __path_update_post, clear_reaction,
            create_comment, create_post, delete_comment, delete_post, get_comments, get_feed,
            get_post, set_reaction, update_post, POST_TAG,
        },
        room::{
            __path_approve_access_request, __path_create_room, __path_delete_room,
            __path_deny_access_request, __path_get_access_requests, __path_get_room,
            __path_get_room_members, __path_get_room_messages, __path_get_rooms, __path_join_room,
            __path_leave_room, __path_send_room_message, __path_update_room,
            approve_access_request, create_room, delete_room, deny_access_request,
            get_access_requests, get_room, get_room_members, get_room_messages, get_rooms,
            join_room, leave_room, send_room_message, update_room, ROOM_TAG,
        },
        user::{
            __path_get_progress, __path_get_user, __path_search_users, __path_update_me,
            get_progress, get_user, search_users, update_me, USER_TAG,
        },
    },
    realtime::socket::ws_handler,
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "StudyHub API", description = "Study tools, chat rooms and social feed"),
    modifiers(&BearerAuth),
    tags(
        (name = HEALTH_TAG, description = "Service health"),
        (name = AUTH_TAG, description = "Registration and sessions"),
        (name = USER_TAG, description = "Profiles, search and progress"),
        (name = LESSON_TAG, description = "Lessons and their files"),
        (name = FLASHCARD_TAG, description = "Flashcards and spaced repetition"),
        (name = EXERCISE_TAG, description = "Exercises and graded attempts"),
        (name = CONNECTION_TAG, description = "Friend connections and blocking"),
        (name = ROOM_TAG, description = "Chat rooms, membership and history"),
        (name = POST_TAG, description = "Feed posts, comments and reactions"),
        (name = NOTIFICATION_TAG, description = "Notification inbox"),
    )
)]
struct ApiDoc;

/// Registers the `bearer` scheme referenced by the endpoints' `security` attributes
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut OpenApiSpec) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

/// Builds the API router with Swagger UI at `/api/docs` and the websocket at `/api/ws`
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(health))
        .routes(routes!(register))
        .routes(routes!(login))
        .routes(routes!(logout))
        .routes(routes!(me))
        .routes(routes!(update_me))
        .routes(routes!(get_progress))
        .routes(routes!(search_users))
        .routes(routes!(get_user))
        .routes(routes!(create_lesson, get_lessons))
        .routes(routes!(get_lesson, update_lesson, delete_lesson))
        .routes(routes!(add_lesson_file, get_lesson_files))
        .routes(routes!(delete_lesson_file))
        .routes(routes!(create_flashcard, get_lesson_flashcards))
        .routes(routes!(get_due_flashcards))
        .routes(routes!(get_flashcard, update_flashcard, delete_flashcard))
        .routes(routes!(review_flashcard))
        .routes(routes!(create_exercise, get_lesson_exercises))
        .routes(routes!(get_exercise, update_exercise, delete_exercise))
        .routes(routes!(submit_attempt, get_attempts))
        .routes(routes!(request_connection, get_friends))
        .routes(routes!(get_incoming_requests))
        .routes(routes!(get_outgoing_requests))
        .routes(routes!(accept_connection))
        .routes(routes!(reject_connection))
        .routes(routes!(block_user))
        .routes(routes!(delete_connection))
        .routes(routes!(create_room, get_rooms))
        .routes(routes!(get_room, update_room, delete_room))
        .routes(routes!(join_room))
        .routes(routes!(leave_room))
        .routes(routes!(get_room_members))
        .routes(routes!(get_access_requests))
        .routes(routes!(approve_access_request))
        .routes(routes!(deny_access_request))
        .routes(routes!(get_room_messages, send_room_message))
        .routes(routes!(get_feed, create_post))
        .routes(routes!(get_post, update_post, delete_post))
        .routes(routes!(get_comments, create_comment))
        .routes(routes!(delete_comment))
        .routes(routes!(set_reaction, clear_reaction))
        .routes(routes!(get_notifications))
        .routes(routes!(get_unread_count))
        .routes(routes!(mark_notification_read))
        .routes(routes!(mark_all_notifications_read))
        .routes(routes!(delete_notification))
        .split_for_parts();

    router
        .route("/api/ws", get(ws_handler))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
