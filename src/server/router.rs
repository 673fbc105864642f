use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::OpenApi;

use crate::{
    model::{
        api::ErrorDto,
        category::{CreateStudyCategoryDto, StudyCategoryDto, UpdateStudyCategoryDto},
        character::{CharacterDto, RankingEntryDto, RenameCharacterDto},
        notification::{CreateNotificationDto, NotificationDto},
        study::{
            ActiveSessionDto, CurrentSessionDto, LevelUpDto, StartStudyDto, StartStudyResponseDto,
            StopStudyResponseDto, StudyChartDto, StudySummaryDto,
        },
    },
    server::{
        controller::{
            auth::{self, logout},
            category::{
                self, create_category, delete_category, get_categories, update_category,
            },
            character::{self, get_character, get_ranking, rename_character},
            notification::{
                self, create_notification, delete_notification, get_notifications,
                mark_all_notifications_read, mark_notification_read,
            },
            study::{
                self, get_current_session, get_last7_stats, get_summary, get_today_stats,
                start_study, stop_study,
            },
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        study::start_study,
        study::stop_study,
        study::get_current_session,
        study::get_summary,
        study::get_today_stats,
        study::get_last7_stats,
        category::get_categories,
        category::create_category,
        category::update_category,
        category::delete_category,
        character::get_character,
        character::rename_character,
        character::get_ranking,
        notification::get_notifications,
        notification::mark_notification_read,
        notification::mark_all_notifications_read,
        notification::delete_notification,
        notification::create_notification,
        auth::logout,
    ),
    components(schemas(
        ErrorDto,
        StartStudyDto,
        StartStudyResponseDto,
        StopStudyResponseDto,
        LevelUpDto,
        CurrentSessionDto,
        ActiveSessionDto,
        StudySummaryDto,
        StudyChartDto,
        StudyCategoryDto,
        CreateStudyCategoryDto,
        UpdateStudyCategoryDto,
        CharacterDto,
        RankingEntryDto,
        RenameCharacterDto,
        NotificationDto,
        CreateNotificationDto,
    )),
    tags(
        (name = "study", description = "Study session stopwatch and statistics"),
        (name = "category", description = "Study categories"),
        (name = "character", description = "Character progress and ranking"),
        (name = "notification", description = "User notifications"),
        (name = "auth", description = "Session management"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/study/start", post(start_study))
        .route("/api/study/stop/{session_id}", put(stop_study))
        .route("/api/study/current", get(get_current_session))
        .route("/api/study/summary", get(get_summary))
        .route("/api/study/stats/today", get(get_today_stats))
        .route("/api/study/stats/last7", get(get_last7_stats))
        .route("/api/categories", get(get_categories).post(create_category))
        .route(
            "/api/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
        .route("/api/character", get(get_character))
        .route("/api/character/name", put(rename_character))
        .route("/api/ranking", get(get_ranking))
        .route(
            "/api/notifications",
            get(get_notifications).post(create_notification),
        )
        .route(
            "/api/notifications/read-all",
            patch(mark_all_notifications_read),
        )
        .route(
            "/api/notifications/{notification_id}/read",
            patch(mark_notification_read),
        )
        .route(
            "/api/notifications/{notification_id}",
            delete(delete_notification),
        )
        .route("/api/auth/logout", post(logout))
}
