use axum::{
    routing::{get, post},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto, PointsTotalDto},
        apply::ApplyDto,
        auth::{
            PhoneLoginDto, PhoneLoginResponseDto, SendCodeDto, VerifyCodeDto,
            VerifyCodeResponseDto,
        },
        favorite::FavoriteDto,
        game::GameDto,
        level::LevelDto,
        mission::{MissionDto, UserMissionDto},
        notification::NotificationDto,
        payment::{MakePaymentDto, MakePaymentResponseDto, PaymentDto, TransitionPaymentDto},
        points::{AddPointsDto, PointsDto},
        user::{UpdateUserDto, UserDto},
        video::VideoDto,
    },
    server::{
        controller::{
            apply::{self, APPLY_TAG},
            auth::{self, AUTH_TAG},
            favorite::{self, FAVORITE_TAG},
            game::{self, GAME_TAG},
            mission::{self, MISSION_TAG},
            notification::{self, NOTIFICATION_TAG},
            payment::{self, PAYMENT_TAG},
            points::{self, POINTS_TAG},
            user::{self, USER_TAG},
            video::{self, VIDEO_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Kick-off API",
        description = "Matchmaking backend for amateur football games"
    ),
    paths(
        auth::send_code,
        auth::verify_code,
        auth::phone_login,
        auth::logout,
        user::get_user,
        user::update_user,
        user::delete_user,
        game::get_game,
        game::join_game,
        points::get_points,
        points::add_points,
        mission::get_missions,
        mission::get_mission,
        mission::get_user_missions,
        mission::complete_mission,
        favorite::get_favorites,
        favorite::add_favorite,
        favorite::remove_favorite,
        video::get_user_videos,
        video::get_game_videos,
        payment::get_payments,
        payment::make_payment,
        payment::transition_payment,
        apply::get_applications,
        apply::apply_game,
        apply::cancel_application,
        notification::get_notifications,
        notification::read_notification,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        PointsTotalDto,
        SendCodeDto,
        VerifyCodeDto,
        VerifyCodeResponseDto,
        PhoneLoginDto,
        PhoneLoginResponseDto,
        UserDto,
        UpdateUserDto,
        LevelDto,
        GameDto,
        PointsDto,
        AddPointsDto,
        MissionDto,
        UserMissionDto,
        FavoriteDto,
        VideoDto,
        PaymentDto,
        MakePaymentDto,
        MakePaymentResponseDto,
        TransitionPaymentDto,
        ApplyDto,
        NotificationDto,
    )),
    tags(
        (name = AUTH_TAG, description = "Phone verification and session login"),
        (name = USER_TAG, description = "User profiles"),
        (name = GAME_TAG, description = "Games and participation"),
        (name = POINTS_TAG, description = "Points ledger"),
        (name = MISSION_TAG, description = "Missions and rewards"),
        (name = FAVORITE_TAG, description = "Favorited games"),
        (name = VIDEO_TAG, description = "Game videos"),
        (name = PAYMENT_TAG, description = "Payments"),
        (name = APPLY_TAG, description = "Game applications"),
        (name = NOTIFICATION_TAG, description = "User notifications"),
    )
)]
pub struct ApiDoc;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/send-code/", post(auth::send_code))
        .route("/api/auth/verify-code/", post(auth::verify_code))
        .route("/api/auth/phone-login/", post(auth::phone_login))
        .route("/api/auth/logout/", post(auth::logout))
        .route("/api/users/{user_id}/", get(user::get_user))
        .route("/api/users/{user_id}/update/", post(user::update_user))
        .route(
            "/api/users/{user_id}/delete/",
            post(user::delete_user).delete(user::delete_user),
        )
        .route("/api/games/{game_id}/", get(game::get_game))
        .route("/api/games/{game_id}/join/", post(game::join_game))
        .route("/api/points/{user_id}/", get(points::get_points))
        .route("/api/points/{user_id}/add/", post(points::add_points))
        .route("/api/missions/", get(mission::get_missions))
        .route("/api/missions/{mission_id}/", get(mission::get_mission))
        .route(
            "/api/missions/user/{user_id}/",
            get(mission::get_user_missions),
        )
        .route(
            "/api/missions/user/{user_id}/complete/{mission_id}/",
            post(mission::complete_mission),
        )
        .route("/api/favorites/{user_id}/", get(favorite::get_favorites))
        .route(
            "/api/favorites/{user_id}/add/{game_id}/",
            post(favorite::add_favorite),
        )
        .route(
            "/api/favorites/{user_id}/remove/{game_id}/",
            post(favorite::remove_favorite),
        )
        .route("/api/videos/{user_id}/", get(video::get_user_videos))
        .route("/api/videos/game/{game_id}/", get(video::get_game_videos))
        .route("/api/payments/{user_id}/", get(payment::get_payments))
        .route("/api/payments/{user_id}/make/", post(payment::make_payment))
        .route(
            "/api/payments/{user_id}/{payment_id}/transition/",
            post(payment::transition_payment),
        )
        .route("/api/applies/{user_id}/", get(apply::get_applications))
        .route(
            "/api/applies/{user_id}/apply/{game_id}/",
            post(apply::apply_game),
        )
        .route(
            "/api/applies/{user_id}/cancel/{game_id}/",
            post(apply::cancel_application),
        )
        .route(
            "/api/notifications/{id}/",
            get(notification::get_notifications),
        )
        .route(
            "/api/notifications/{id}/read/",
            post(notification::read_notification),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
}
