//! HTTP transport for the cookbook - maps REST routes to `Cookbook` methods.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /cookbook/v1.0/recipes/italian` - Italian recipes, 404 if none.
//! - `GET /cookbook/v1.0/recipes/vegan` - vegan recipes, 404 if none.
//! - `GET /cookbook/v1.0/recipes` - every recipe.
//! - `POST /cookbook/v1.0/recipes` - create, answers 201.
//! - `GET|PUT|DELETE /cookbook/v1.0/recipes/:id` - single recipe.
//!
//! POST and PUT bodies may be JSON or form-encoded.
//!
//! Every route sits behind the basic auth guard, which answers 403 before
//! any other check runs.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use cookbook::{service, Cookbook, Credentials, InMemoryRecipeStore};
//!
//! let cookbook = Arc::new(Cookbook::new(InMemoryRecipeStore::seeded(), Credentials::default()));
//!
//! // Get the router to compose with other axum routes
//! let app = service::router(cookbook.clone());
//!
//! // Or serve directly
//! service::serve(cookbook, "127.0.0.1:5000").await?;
//! ```

use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{FromRequest, Path, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{async_trait, Form, Json, Router};
use tracing::{debug, info};

use super::{Cookbook, CookbookError};
use crate::projection::{DeleteOutcome, RecipeCollection, SingleRecipe, RECIPES_PATH};
use crate::recipe::RecipeFields;
use crate::store::RecipeRepository;

type SharedCookbook<R> = State<Arc<Cookbook<R>>>;

/// Build an axum `Router` serving the recipe routes of the given cookbook.
pub fn router<R>(cookbook: Arc<Cookbook<R>>) -> Router
where
    R: RecipeRepository + Send + Sync + 'static,
{
    Router::new()
        .route(&format!("{RECIPES_PATH}/italian"), get(italian_handler::<R>))
        .route(&format!("{RECIPES_PATH}/vegan"), get(vegan_handler::<R>))
        .route(RECIPES_PATH, get(list_handler::<R>).post(create_handler::<R>))
        .route(
            &format!("{RECIPES_PATH}/:id"),
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .route_layer(middleware::from_fn_with_state(
            cookbook.clone(),
            require_auth::<R>,
        ))
        .with_state(cookbook)
}

/// Serve the cookbook over HTTP at the given address (e.g. `"127.0.0.1:5000"`).
pub async fn serve<R>(cookbook: Arc<Cookbook<R>>, addr: &str) -> Result<(), std::io::Error>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    let app = router(cookbook);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "cookbook listening");
    axum::serve(listener, app).await
}

impl IntoResponse for CookbookError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.body())).into_response()
    }
}

/// Reject requests without valid basic auth credentials.
async fn require_auth<R>(
    State(cookbook): SharedCookbook<R>,
    request: Request,
    next: Next,
) -> Response
where
    R: RecipeRepository + Send + Sync + 'static,
{
    let outcome = {
        let authorization = request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok());
        cookbook.authenticate(authorization)
    };

    match outcome {
        Ok(username) => {
            debug!(
                %username,
                method = %request.method(),
                path = request.uri().path(),
                "authenticated request"
            );
            next.run(request).await
        }
        Err(e) => e.into_response(),
    }
}

/// `GET /recipes/italian`
async fn italian_handler<R>(
    State(cookbook): SharedCookbook<R>,
) -> Result<Json<RecipeCollection>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    cookbook.italian_recipes().map(Json)
}

/// `GET /recipes/vegan`
async fn vegan_handler<R>(
    State(cookbook): SharedCookbook<R>,
) -> Result<Json<RecipeCollection>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    cookbook.vegan_recipes().map(Json)
}

/// `GET /recipes`
async fn list_handler<R>(
    State(cookbook): SharedCookbook<R>,
) -> Result<Json<RecipeCollection>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    cookbook.all_recipes().map(Json)
}

/// `POST /recipes` - answers 201 with the new recipe.
async fn create_handler<R>(
    State(cookbook): SharedCookbook<R>,
    body: Result<RecipeBody, CookbookError>,
) -> Result<(StatusCode, Json<SingleRecipe>), CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    let RecipeBody(fields) = body?;
    let created = cookbook.create_recipe(fields)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /recipes/:id`
async fn get_handler<R>(
    State(cookbook): SharedCookbook<R>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<SingleRecipe>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    cookbook.recipe(recipe_id(id)?).map(Json)
}

/// `PUT /recipes/:id` - a missing recipe is 404 whatever the body holds.
async fn update_handler<R>(
    State(cookbook): SharedCookbook<R>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<RecipeBody, CookbookError>,
) -> Result<Json<SingleRecipe>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    let id = recipe_id(id)?;
    cookbook.recipe(id)?;
    let RecipeBody(fields) = body?;
    cookbook.update_recipe(id, fields).map(Json)
}

/// `DELETE /recipes/:id`
async fn delete_handler<R>(
    State(cookbook): SharedCookbook<R>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<DeleteOutcome>, CookbookError>
where
    R: RecipeRepository + Send + Sync + 'static,
{
    cookbook.delete_recipe(recipe_id(id)?).map(Json)
}

/// A path segment that is not an id does not name a recipe.
fn recipe_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, CookbookError> {
    path.map(|Path(id)| id)
        .map_err(|e| CookbookError::NotFound(e.body_text()))
}

/// Recipe fields decoded from a JSON or form-encoded body, picked by
/// `Content-Type`.
struct RecipeBody(RecipeFields);

#[async_trait]
impl<S> FromRequest<S> for RecipeBody
where
    S: Send + Sync,
{
    type Rejection = CookbookError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            Form::<RecipeFields>::from_request(req, state)
                .await
                .map(|Form(fields)| Self(fields))
                .map_err(|e| CookbookError::InvalidBody(e.body_text()))
        } else {
            Json::<RecipeFields>::from_request(req, state)
                .await
                .map(|Json(fields)| Self(fields))
                .map_err(|e| CookbookError::InvalidBody(e.body_text()))
        }
    }
}
