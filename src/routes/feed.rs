use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::FeedSettings;
use crate::core::{
    estimate_match_probability, CompatibilityScorer, FeedAssembler, FeedOptions, MatchError,
    PreferenceEvaluator, VisibilityModel,
};
use crate::models::{
    CompatibilityQuery, CompatibilityResponse, ErrorResponse, EvaluateQuery, EvaluateResponse,
    FeedQuery, FeedResponse, HealthResponse, MatchProbabilityQuery, MatchProbabilityResponse,
    MatchingConfig, VisibilityRecomputeResponse,
};
use crate::services::ProfileStore;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProfileStore>,
    pub feed: FeedAssembler,
    pub scorer: CompatibilityScorer,
    pub evaluator: PreferenceEvaluator,
    pub visibility: VisibilityModel,
    pub feed_settings: FeedSettings,
}

impl AppState {
    pub fn new(store: Arc<ProfileStore>, config: &MatchingConfig, feed_settings: FeedSettings) -> Self {
        Self {
            store,
            feed: FeedAssembler::new(config),
            scorer: CompatibilityScorer::new(config),
            evaluator: PreferenceEvaluator::new(config),
            visibility: VisibilityModel::new(*config),
            feed_settings,
        }
    }
}

/// Configure all feed-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/feed/{user_id}", web::get().to(get_feed))
        .route("/compatibility", web::get().to(get_compatibility))
        .route("/preferences/evaluate", web::get().to(evaluate_preferences))
        .route("/users/{user_id}/stats", web::get().to(get_visibility_stats))
        .route("/visibility/recompute", web::post().to(recompute_visibility))
        .route("/match-probability", web::get().to(match_probability));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

fn not_found(user_id: &str) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::NOT_FOUND,
        "User not found",
        format!("No profile with id {}", user_id),
    )
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    error_response(
        actix_web::http::StatusCode::BAD_REQUEST,
        "Validation failed",
        errors.to_string(),
    )
}

fn engine_error(err: MatchError) -> HttpResponse {
    tracing::warn!("Rejected malformed input: {}", err);
    error_response(
        actix_web::http::StatusCode::BAD_REQUEST,
        "Malformed input",
        err.to_string(),
    )
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let profiles = state.store.len().await;
    let status = if profiles > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles,
        timestamp: chrono::Utc::now(),
    })
}

/// Feed endpoint
///
/// GET /api/v1/feed/{user_id}?connectionMode=dating&limit=20&offset=0&includeOutsidePreferences=false
async fn get_feed(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<FeedQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for feed request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    let user_id = path.into_inner();
    let mode = query.connection_mode.unwrap_or_default();
    let limit = query
        .limit
        .unwrap_or(state.feed_settings.default_limit)
        .min(state.feed_settings.max_limit) as usize;
    let options = FeedOptions {
        limit,
        offset: query.offset.unwrap_or(0) as usize,
        include_outside_preferences: query.include_outside_preferences.unwrap_or(false),
    };

    // One consistent population for the whole request
    let population = state.store.snapshot().await;

    let Some(viewer) = population.iter().find(|p| p.user_id == user_id) else {
        return not_found(&user_id);
    };

    tracing::info!(
        "Generating {} feed for user: {}, limit: {}, offset: {}",
        mode.as_str(),
        user_id,
        options.limit,
        options.offset
    );

    let feed = match state
        .feed
        .generate_feed_with_thread_rng(viewer, &population, mode, &options)
    {
        Ok(feed) => feed,
        Err(e) => return engine_error(e),
    };

    tracing::debug!(
        "Returning {} entries for user {} (from {} profiles)",
        feed.len(),
        user_id,
        population.len()
    );

    HttpResponse::Ok().json(FeedResponse {
        count: feed.len(),
        feed,
        connection_mode: mode,
    })
}

/// Pairwise compatibility endpoint
///
/// GET /api/v1/compatibility?user1Id={id}&user2Id={id}
async fn get_compatibility(
    state: web::Data<AppState>,
    query: web::Query<CompatibilityQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let Some(user1) = state.store.get(&query.user1_id).await else {
        return not_found(&query.user1_id);
    };
    let Some(user2) = state.store.get(&query.user2_id).await else {
        return not_found(&query.user2_id);
    };

    match state.scorer.score(&user1, &user2) {
        Ok(compatibility) => HttpResponse::Ok().json(CompatibilityResponse { compatibility }),
        Err(e) => engine_error(e),
    }
}

/// Directional preference diagnostic
///
/// GET /api/v1/preferences/evaluate?viewerId={id}&candidateId={id}
async fn evaluate_preferences(
    state: web::Data<AppState>,
    query: web::Query<EvaluateQuery>,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return validation_failed(errors);
    }

    let Some(viewer) = state.store.get(&query.viewer_id).await else {
        return not_found(&query.viewer_id);
    };
    let Some(candidate) = state.store.get(&query.candidate_id).await else {
        return not_found(&query.candidate_id);
    };

    let Some(preferences) = viewer.preferences.as_ref() else {
        return engine_error(MatchError::missing(&viewer.user_id, "preferences"));
    };

    match state.evaluator.evaluate(&candidate, preferences) {
        Ok(result) => HttpResponse::Ok().json(EvaluateResponse {
            viewer_id: viewer.user_id.clone(),
            candidate_id: candidate.user_id.clone(),
            result,
        }),
        Err(e) => engine_error(e),
    }
}

/// Visibility and engagement stats of one profile
///
/// GET /api/v1/users/{user_id}/stats
async fn get_visibility_stats(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let user_id = path.into_inner();
    let population = state.store.snapshot().await;

    match population.iter().find(|p| p.user_id == user_id) {
        Some(profile) => HttpResponse::Ok().json(state.visibility.stats(profile, &population)),
        None => not_found(&user_id),
    }
}

/// Recompute every profile's visibility and swap in the updated snapshot
///
/// POST /api/v1/visibility/recompute
async fn recompute_visibility(state: web::Data<AppState>) -> impl Responder {
    let population = state.store.snapshot().await;
    let recompute = state.visibility.recompute_all(&population);
    let users_updated = recompute.profiles.len();
    let average = recompute.platform_average_likes_per_week;

    if let Err(e) = state.store.replace_all(recompute.profiles).await {
        tracing::error!("Failed to store recomputed visibility scores: {}", e);
        return error_response(
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to update visibility scores",
            e.to_string(),
        );
    }

    tracing::info!(
        "Recomputed visibility for {} users (platform average {:.2} likes/week)",
        users_updated,
        average
    );

    HttpResponse::Ok().json(VisibilityRecomputeResponse {
        success: true,
        users_updated,
        platform_average_likes_per_week: average,
    })
}

/// Match probability nudge
///
/// GET /api/v1/match-probability?swipes=5&likesWaiting=10
async fn match_probability(query: web::Query<MatchProbabilityQuery>) -> impl Responder {
    HttpResponse::Ok().json(MatchProbabilityResponse {
        match_probability: estimate_match_probability(query.swipes, query.likes_waiting),
        likes_waiting: query.likes_waiting,
    })
}
