use axum::{
    Router,
    http::{HeaderValue, Method},
    middleware,
    routing::{get, post},
};
use scribe_adapters::http::{
    AppState, Ports, identify,
    routes::{
        activate_user, create_blog, create_comment, create_user, deactivate_user, delete_blog,
        delete_user, demote_user, forgot_password, get_blog, get_comment, get_user, list_blogs,
        list_comments, list_users, login, promote_user, refresh, reset_password, update_blog,
        update_user,
    },
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// The CMS HTTP service: account, user, blog and comment routes over one set of ports.
pub struct ScribeService {
    router: Router,
}

impl ScribeService {
    /// Build the router. Every request first passes through `identify`, which
    /// attaches the caller's identity for the guarded handlers.
    pub fn new<P: Ports>(ports: P) -> Self {
        let state = AppState::new(ports);

        let router = Router::new()
            .route("/login", post(login::<P>))
            .route("/refresh", post(refresh::<P>))
            .route("/forgot-password", post(forgot_password::<P>))
            .route("/reset-password", post(reset_password::<P>))
            .route("/users", get(list_users::<P>).post(create_user::<P>))
            .route(
                "/users/{id}",
                get(get_user::<P>)
                    .put(update_user::<P>)
                    .delete(delete_user::<P>),
            )
            .route("/users/{id}/activate", post(activate_user::<P>))
            .route("/users/{id}/deactivate", post(deactivate_user::<P>))
            .route("/users/{id}/promote", post(promote_user::<P>))
            .route("/users/{id}/demote", post(demote_user::<P>))
            .route("/blogs", get(list_blogs::<P>).post(create_blog::<P>))
            .route(
                "/blogs/{blog_id}",
                get(get_blog::<P>)
                    .put(update_blog::<P>)
                    .delete(delete_blog::<P>),
            )
            .route(
                "/blogs/{blog_id}/comments",
                get(list_comments::<P>).post(create_comment::<P>),
            )
            .route(
                "/blogs/{blog_id}/comments/{comment_id}",
                get(get_comment::<P>),
            )
            .layer(middleware::from_fn_with_state(state.clone(), identify::<P>))
            .with_state(state);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Finish the router, restricting CORS to `allowed_origins` when any are configured.
    pub fn into_router(mut self, allowed_origins: &[String]) -> Router {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring malformed CORS origin");
                    None
                }
            })
            .collect();

        if !origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                ])
                .allow_origin(AllowOrigin::list(origins));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Serve on `listener` until the process stops.
    pub async fn run(
        self,
        listener: TcpListener,
        allowed_origins: &[String],
    ) -> Result<(), std::io::Error> {
        let router = self.into_router(allowed_origins);

        tracing::info!("Scribe listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
